use super::{entity::TicketFindEntity, Ticket, TicketsRepository};
use crate::repository::{
    self,
    collections::{TICKETS, TICKET_TYPES},
};
use axum::async_trait;
use bson::{doc, Document};
use futures_util::TryStreamExt;
use mongodb::Database;

pub struct TicketsRepositoryImpl {
    database: Database,
}

impl TicketsRepositoryImpl {
    pub fn new(database: Database) -> Self {
        Self { database }
    }
}

#[async_trait]
impl TicketsRepository for TicketsRepositoryImpl {
    async fn find_with_type_by_enrollment_id(
        &self,
        enrollment_id: i64,
    ) -> Result<Option<Ticket>, repository::Error> {
        let document = self
            .database
            .collection::<Document>(TICKETS)
            .aggregate([
                doc! { "$match": { "enrollment_id": enrollment_id } },
                doc! { "$sort": { "_id": 1 } },
                doc! { "$limit": 1 },
                doc! {
                    "$lookup": {
                        "from": TICKET_TYPES,
                        "localField": "ticket_type_id",
                        "foreignField": "_id",
                        "as": "ticket_type",
                    }
                },
                doc! { "$unwind": "$ticket_type" },
            ])
            .await?
            .try_next()
            .await?;

        let ticket = document
            .map(bson::from_document::<TicketFindEntity>)
            .transpose()?
            .map(Ticket::from);

        Ok(ticket)
    }
}
