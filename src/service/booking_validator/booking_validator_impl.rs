use super::BookingValidator;
use crate::{
    error::Error,
    repository::{EnrollmentsRepository, RoomsRepository, TicketStatus, TicketsRepository},
};
use axum::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub struct BookingValidatorImpl {
    enrollments_repository: Arc<dyn EnrollmentsRepository>,
    rooms_repository: Arc<dyn RoomsRepository>,
    tickets_repository: Arc<dyn TicketsRepository>,
}

impl BookingValidatorImpl {
    pub fn new(
        enrollments_repository: Arc<dyn EnrollmentsRepository>,
        rooms_repository: Arc<dyn RoomsRepository>,
        tickets_repository: Arc<dyn TicketsRepository>,
    ) -> Self {
        Self {
            enrollments_repository,
            rooms_repository,
            tickets_repository,
        }
    }
}

#[async_trait]
impl BookingValidator for BookingValidatorImpl {
    async fn validate(&self, user_id: Uuid, room_id: i64) -> Result<(), Error> {
        tracing::info!(room_id, "validating booking");

        let enrollment = self
            .enrollments_repository
            .find_by_user_id(user_id)
            .await?
            .ok_or(Error::NotFound("enrollment not exist"))?;

        let room = self
            .rooms_repository
            .find_with_bookings(room_id)
            .await?
            .ok_or(Error::NotFound("room not exist"))?;

        let ticket = self
            .tickets_repository
            .find_with_type_by_enrollment_id(enrollment.id)
            .await?
            .ok_or(Error::NotFound("ticket not exist"))?;

        tracing::debug!(
            enrollment_id = enrollment.id,
            room_id = room.id,
            capacity = room.capacity,
            bookings = room.bookings.len(),
            ticket_id = ticket.id,
            ticket_type_id = ticket.ticket_type.id,
            status = ticket.status.as_ref(),
            "found booking prerequisites"
        );

        if room.is_full() {
            return Err(Error::CannotBook("room is full"));
        }
        if ticket.status != TicketStatus::Paid {
            return Err(Error::CannotBook("ticket not paid"));
        }
        if ticket.ticket_type.is_remote {
            return Err(Error::CannotBook("ticket is remote"));
        }

        tracing::info!("booking valid");

        Ok(())
    }
}
