use crate::{
    application::{ApplicationMiddleware, ApplicationState},
    auth::User,
    dto::{input, output},
    error::Error,
    service::bookings_service::BookingsService,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Extension, Json, Router,
};
use std::sync::Arc;

pub fn routing(application_middleware: &ApplicationMiddleware) -> Router<ApplicationState> {
    Router::new()
        .route("/booking", get(get_booking).post(post_booking))
        .route("/booking/:booking_id", put(put_booking))
        .route_layer(application_middleware.auth.clone())
}

async fn get_booking(
    State(service): State<Arc<dyn BookingsService>>,
    Extension(user): Extension<User>,
) -> Result<(StatusCode, Json<output::Booking>), Error> {
    let booking = service.get_booking(user.id).await?;

    Ok((StatusCode::OK, Json(booking)))
}

async fn post_booking(
    State(service): State<Arc<dyn BookingsService>>,
    Extension(user): Extension<User>,
    booking_room: input::BookingRoom,
) -> Result<(StatusCode, Json<output::Booking>), Error> {
    let booking = service.create_booking(user.id, booking_room).await?;

    Ok((StatusCode::OK, Json(booking)))
}

async fn put_booking(
    State(service): State<Arc<dyn BookingsService>>,
    Extension(user): Extension<User>,
    Path(booking_id): Path<i64>,
    booking_room: input::BookingRoom,
) -> Result<(StatusCode, Json<output::Booking>), Error> {
    let booking = service
        .update_booking(user.id, booking_id, booking_room)
        .await?;

    Ok((StatusCode::OK, Json(booking)))
}
