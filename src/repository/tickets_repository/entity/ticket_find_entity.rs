use crate::repository::TicketStatus;
use serde::Deserialize;

///
/// Ticket joined with its type
///
#[derive(Deserialize)]
pub struct TicketFindEntity {
    pub _id: i64,

    pub status: TicketStatus,

    pub ticket_type: TicketTypeFindEntity,
}

#[derive(Deserialize)]
pub struct TicketTypeFindEntity {
    pub _id: i64,

    pub is_remote: bool,
}
