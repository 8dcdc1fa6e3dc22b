//!
//! Collection names. Only `bookings` and `counters` are written by this service,
//! the rest belong to enrollment, ticket and hotel management.
//!

pub const BOOKINGS: &str = "bookings";
pub const COUNTERS: &str = "counters";
pub const ENROLLMENTS: &str = "enrollments";
pub const ROOMS: &str = "rooms";
pub const TICKETS: &str = "tickets";
pub const TICKET_TYPES: &str = "ticket_types";
