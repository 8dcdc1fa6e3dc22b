use super::{entity::RoomFindEntity, Room, RoomsRepository};
use crate::repository::{
    self,
    collections::{BOOKINGS, ROOMS},
};
use axum::async_trait;
use bson::{doc, Document};
use futures_util::TryStreamExt;
use mongodb::Database;

pub struct RoomsRepositoryImpl {
    database: Database,
}

impl RoomsRepositoryImpl {
    pub fn new(database: Database) -> Self {
        Self { database }
    }
}

#[async_trait]
impl RoomsRepository for RoomsRepositoryImpl {
    async fn find_with_bookings(&self, id: i64) -> Result<Option<Room>, repository::Error> {
        let document = self
            .database
            .collection::<Document>(ROOMS)
            .aggregate([
                doc! { "$match": { "_id": id } },
                doc! {
                    "$lookup": {
                        "from": BOOKINGS,
                        "localField": "_id",
                        "foreignField": "room_id",
                        "as": "bookings",
                    }
                },
            ])
            .await?
            .try_next()
            .await?;

        let room = document
            .map(bson::from_document::<RoomFindEntity>)
            .transpose()?
            .map(Room::from);

        Ok(room)
    }
}
