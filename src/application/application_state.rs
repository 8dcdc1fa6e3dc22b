use super::ApplicationEnv;
use crate::{
    repository::{
        BookingsRepositoryImpl, EnrollmentsRepositoryImpl, RoomsRepositoryImpl,
        TicketsRepositoryImpl,
    },
    service::{
        booking_validator::BookingValidatorImpl,
        bookings_service::{BookingsService, BookingsServiceImpl},
    },
};
use axum::extract::FromRef;
use mongodb::{options::ClientOptions, Client};
use std::sync::Arc;

#[derive(Clone, FromRef)]
pub struct ApplicationState {
    pub bookings_service: Arc<dyn BookingsService>,
}

pub struct ApplicationStateToClose {
    pub db_client: Client,
}

pub async fn create_state(
    env: &ApplicationEnv,
) -> anyhow::Result<(ApplicationState, ApplicationStateToClose)> {
    tracing::info!("connecting to database");
    let db_client_options = ClientOptions::parse(&env.db_connection_string).await?;
    let db_client = Client::with_options(db_client_options)?;
    let db = db_client.database(&env.db_name);

    tracing::info!("creating repositories");
    let bookings_repository = BookingsRepositoryImpl::new(db.clone()).await?;
    let bookings_repository = Arc::new(bookings_repository);

    let enrollments_repository = EnrollmentsRepositoryImpl::new(db.clone());
    let enrollments_repository = Arc::new(enrollments_repository);

    let rooms_repository = RoomsRepositoryImpl::new(db.clone());
    let rooms_repository = Arc::new(rooms_repository);

    let tickets_repository = TicketsRepositoryImpl::new(db);
    let tickets_repository = Arc::new(tickets_repository);

    tracing::info!("creating services");
    let booking_validator = BookingValidatorImpl::new(
        enrollments_repository,
        rooms_repository,
        tickets_repository,
    );
    let booking_validator = Arc::new(booking_validator);

    let bookings_service = BookingsServiceImpl::new(booking_validator, bookings_repository);
    let bookings_service = Arc::new(bookings_service);

    Ok((
        ApplicationState { bookings_service },
        ApplicationStateToClose { db_client },
    ))
}
