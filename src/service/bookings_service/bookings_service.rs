use crate::{
    dto::{input, output},
    error::Error,
};
use axum::async_trait;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingsService: Send + Sync {
    ///
    /// Find booking of the user
    ///
    /// ### Errors
    /// - [Error::NotFound] when user has no booking
    ///
    async fn get_booking(&self, user_id: Uuid) -> Result<output::Booking, Error>;

    ///
    /// Book a room for the user. Calling it again books again,
    /// user ends up with more than one booking.
    ///
    /// ### Returns
    /// created booking
    ///
    /// ### Errors
    /// - every error of [crate::service::booking_validator::BookingValidator::validate]
    ///
    async fn create_booking(
        &self,
        user_id: Uuid,
        booking_room: input::BookingRoom,
    ) -> Result<output::Booking, Error>;

    ///
    /// Move existing booking of the user to another room
    ///
    /// ### Returns
    /// updated booking
    ///
    /// ### Errors
    /// - every error of [crate::service::booking_validator::BookingValidator::validate]
    ///   for the new room
    /// - [Error::NotFound] when booking_id or room id is 0
    /// - [Error::CannotBook] when
    ///     - booking does not exist
    ///     - booking belongs to another user
    ///
    async fn update_booking(
        &self,
        user_id: Uuid,
        booking_id: i64,
        booking_room: input::BookingRoom,
    ) -> Result<output::Booking, Error>;
}
