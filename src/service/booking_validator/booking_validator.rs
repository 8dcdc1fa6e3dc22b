use crate::error::Error;
use axum::async_trait;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingValidator: Send + Sync {
    ///
    /// Checks whether the user is allowed to book the room.
    /// Does not modify anything.
    ///
    /// ### Errors
    /// - [Error::NotFound] when
    ///     - user has no enrollment
    ///     - room does not exist
    ///     - enrollment has no ticket
    /// - [Error::CannotBook] when
    ///     - room is full
    ///     - ticket is not paid
    ///     - ticket is remote
    ///
    async fn validate(&self, user_id: Uuid, room_id: i64) -> Result<(), Error>;
}
