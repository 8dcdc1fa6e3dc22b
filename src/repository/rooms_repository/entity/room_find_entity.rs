use crate::repository::bookings_repository::entity::BookingFindEntity;
use serde::Deserialize;

///
/// Room joined with its bookings
///
#[derive(Deserialize)]
pub struct RoomFindEntity {
    pub _id: i64,

    pub capacity: i32,

    #[serde(default)]
    pub bookings: Vec<BookingFindEntity>,
}
