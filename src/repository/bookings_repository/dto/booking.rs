use crate::repository::bookings_repository::entity::BookingFindEntity;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i64,
    pub user_id: Uuid,
    pub room_id: i64,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl From<BookingFindEntity> for Booking {
    fn from(value: BookingFindEntity) -> Self {
        Self {
            id: value._id,
            user_id: value.user_id.into(),
            room_id: value.room_id,
            created_at: value.created_at.into(),
            updated_at: value.updated_at.into(),
        }
    }
}
