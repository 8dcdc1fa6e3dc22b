use super::Booking;
use crate::repository;
use axum::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingsRepository: Send + Sync {
    ///
    /// Inserts new booking under the next id of bookings sequence.
    /// Nothing prevents the user from having more than one booking.
    ///
    async fn insert(
        &self,
        user_id: Uuid,
        room_id: i64,
        created_at: OffsetDateTime,
    ) -> Result<Booking, repository::Error>;

    async fn find(&self, id: i64) -> Result<Option<Booking>, repository::Error>;

    ///
    /// Finds the oldest booking of the user
    ///
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<Booking>, repository::Error>;

    ///
    /// Moves booking to another room
    ///
    /// ### Returns
    /// booking after the update
    ///
    /// ### Errors
    /// - [repository::Error::NoDocumentUpdated] when booking does not exist
    ///
    async fn update_room_id(
        &self,
        id: i64,
        room_id: i64,
        updated_at: OffsetDateTime,
    ) -> Result<Booking, repository::Error>;
}
