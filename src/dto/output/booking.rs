use crate::repository;
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    pub user_id: Uuid,
    pub room_id: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<repository::Booking> for Booking {
    fn from(value: repository::Booking) -> Self {
        Self {
            id: value.id,
            user_id: value.user_id,
            room_id: value.room_id,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
