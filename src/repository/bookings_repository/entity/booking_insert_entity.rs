use bson::{DateTime, Uuid};
use serde::Serialize;

#[derive(Serialize)]
pub struct BookingInsertEntity {
    pub _id: i64,

    pub user_id: Uuid,
    pub room_id: i64,

    pub created_at: DateTime,
    pub updated_at: DateTime,
}
