pub mod booking_validator;
pub mod bookings_service;
