use bson::{DateTime, Uuid};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct BookingFindEntity {
    pub _id: i64,

    pub user_id: Uuid,
    pub room_id: i64,

    pub created_at: DateTime,
    pub updated_at: DateTime,
}
