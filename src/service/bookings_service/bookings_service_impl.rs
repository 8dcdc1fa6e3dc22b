use super::BookingsService;
use crate::{
    dto::{input, output},
    error::Error,
    repository::{self, BookingsRepository},
    service::booking_validator::BookingValidator,
};
use axum::async_trait;
use std::sync::Arc;
use time::OffsetDateTime;
use uuid::Uuid;

pub struct BookingsServiceImpl {
    validator: Arc<dyn BookingValidator>,
    repository: Arc<dyn BookingsRepository>,
}

impl BookingsServiceImpl {
    pub fn new(
        validator: Arc<dyn BookingValidator>,
        repository: Arc<dyn BookingsRepository>,
    ) -> Self {
        Self {
            validator,
            repository,
        }
    }
}

#[async_trait]
impl BookingsService for BookingsServiceImpl {
    async fn get_booking(&self, user_id: Uuid) -> Result<output::Booking, Error> {
        tracing::info!("finding booking");

        let booking = self
            .repository
            .find_by_user_id(user_id)
            .await?
            .ok_or(Error::NotFound("booking not exist"))?;

        tracing::info!(id = booking.id, "found booking");

        Ok(booking.into())
    }

    async fn create_booking(
        &self,
        user_id: Uuid,
        booking_room: input::BookingRoom,
    ) -> Result<output::Booking, Error> {
        tracing::info!("creating booking");
        tracing::trace!(?booking_room);

        let room_id = booking_room.room_id();

        // validation and insert are not atomic, two requests can fill the last place
        self.validator.validate(user_id, room_id).await?;

        let booking = self
            .repository
            .insert(user_id, room_id, OffsetDateTime::now_utc())
            .await?;

        tracing::info!(id = booking.id, room_id, "created booking");

        Ok(booking.into())
    }

    async fn update_booking(
        &self,
        user_id: Uuid,
        booking_id: i64,
        booking_room: input::BookingRoom,
    ) -> Result<output::Booking, Error> {
        tracing::info!(booking_id, "updating booking");
        tracing::trace!(?booking_room);

        let room_id = booking_room.room_id();

        self.validator.validate(user_id, room_id).await?;

        if booking_id == 0 || room_id == 0 {
            return Err(Error::NotFound("booking id and room id are required"));
        }

        let booking = self
            .repository
            .find(booking_id)
            .await?
            .ok_or(Error::CannotBook("booking not exist"))?;

        if booking.user_id != user_id {
            return Err(Error::CannotBook("booking belongs to another user"));
        }

        let booking = self
            .repository
            .update_room_id(booking_id, room_id, OffsetDateTime::now_utc())
            .await
            .map_err(|err| match err {
                repository::Error::NoDocumentUpdated => Error::CannotBook("booking not exist"),
                err => Error::Database(err),
            })?;

        tracing::info!(room_id, "updated booking");

        Ok(booking.into())
    }
}
