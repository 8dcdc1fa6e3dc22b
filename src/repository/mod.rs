mod bookings_repository;
mod collections;
mod enrollments_repository;
mod error;
mod rooms_repository;
mod tickets_repository;

pub use bookings_repository::*;
pub use enrollments_repository::*;
pub use error::*;
pub use rooms_repository::*;
pub use tickets_repository::*;
