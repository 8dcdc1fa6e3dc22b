use super::{
    entity::{BookingFindEntity, BookingInsertEntity, CounterFindEntity},
    Booking, BookingsRepository,
};
use crate::repository::{
    self,
    collections::{BOOKINGS, COUNTERS},
    Error,
};
use axum::async_trait;
use bson::{doc, DateTime, Document};
use mongodb::{
    options::{IndexOptions, ReturnDocument},
    Collection, Database, IndexModel,
};
use std::sync::Arc;
use time::OffsetDateTime;
use uuid::Uuid;

const INDEX_NAME_USER_ID: &str = "index_user_id";
const INDEX_NAME_ROOM_ID: &str = "index_room_id";

pub struct BookingsRepositoryImpl {
    database: Database,
}

impl BookingsRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        let collection_names = database.list_collection_names().await?;
        if !collection_names.iter().any(|name| name == BOOKINGS) {
            tracing::debug!(collection = BOOKINGS, "creating collection");
            database.create_collection(BOOKINGS).await?;
        }

        let collection = database.collection::<Document>(BOOKINGS);

        tracing::debug!("fetching index names");
        let index_names = collection.list_index_names().await?;

        for (index_name, field) in [
            (INDEX_NAME_USER_ID, "user_id"),
            (INDEX_NAME_ROOM_ID, "room_id"),
        ] {
            if !index_names.iter().any(|name| name == index_name) {
                Self::create_index(&collection, index_name, field).await?;
                tracing::debug!(collection = BOOKINGS, index = index_name, "created index");
            }
        }

        Ok(Self { database })
    }

    async fn create_index(
        collection: &Collection<Document>,
        index_name: &str,
        field: &str,
    ) -> Result<(), mongodb::error::Error> {
        let mut keys = Document::new();
        keys.insert(field, 1);

        let index = IndexModel::builder()
            .keys(keys)
            .options(
                IndexOptions::builder()
                    .name(index_name.to_string())
                    .build(),
            )
            .build();

        collection.create_index(index).await?;

        Ok(())
    }

    async fn next_id(&self) -> Result<i64, repository::Error> {
        let counter = self
            .database
            .collection::<CounterFindEntity>(COUNTERS)
            .find_one_and_update(
                doc! { "_id": BOOKINGS },
                doc! { "$inc": { "seq": 1_i64 } },
            )
            .upsert(true)
            .return_document(ReturnDocument::After)
            .await?;

        match counter {
            Some(counter) => Ok(counter.seq),
            None => {
                tracing::error!(collection = COUNTERS, "upsert did not return document");
                Err(Error::Mongo(
                    mongodb::error::ErrorKind::Custom(Arc::new("missing bookings counter")).into(),
                ))
            }
        }
    }
}

#[async_trait]
impl BookingsRepository for BookingsRepositoryImpl {
    async fn insert(
        &self,
        user_id: Uuid,
        room_id: i64,
        created_at: OffsetDateTime,
    ) -> Result<Booking, repository::Error> {
        let id = self.next_id().await?;

        // mongo keeps milliseconds only, returned booking has to match what's stored
        let created_at = DateTime::from(created_at);
        let insert_entity = BookingInsertEntity {
            _id: id,
            user_id: user_id.into(),
            room_id,
            created_at,
            updated_at: created_at,
        };

        self.database
            .collection::<BookingInsertEntity>(BOOKINGS)
            .insert_one(&insert_entity)
            .await?;

        Ok(Booking {
            id,
            user_id,
            room_id,
            created_at: created_at.into(),
            updated_at: created_at.into(),
        })
    }

    async fn find(&self, id: i64) -> Result<Option<Booking>, repository::Error> {
        let booking = self
            .database
            .collection::<BookingFindEntity>(BOOKINGS)
            .find_one(doc! { "_id": id })
            .await?
            .map(Booking::from);

        Ok(booking)
    }

    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<Booking>, repository::Error> {
        let booking = self
            .database
            .collection::<BookingFindEntity>(BOOKINGS)
            .find_one(doc! { "user_id": bson::Uuid::from(user_id) })
            .sort(doc! { "_id": 1 })
            .await?
            .map(Booking::from);

        Ok(booking)
    }

    async fn update_room_id(
        &self,
        id: i64,
        room_id: i64,
        updated_at: OffsetDateTime,
    ) -> Result<Booking, repository::Error> {
        let booking = self
            .database
            .collection::<BookingFindEntity>(BOOKINGS)
            .find_one_and_update(
                doc! { "_id": id },
                doc! {
                    "$set": {
                        "room_id": room_id,
                        "updated_at": DateTime::from(updated_at),
                    }
                },
            )
            .return_document(ReturnDocument::After)
            .await?
            .map(Booking::from)
            .ok_or(Error::NoDocumentUpdated)?;

        Ok(booking)
    }
}
