use super::{TicketStatus, TicketType};
use crate::repository::tickets_repository::entity::TicketFindEntity;

#[derive(Debug, Clone)]
pub struct Ticket {
    pub id: i64,
    pub status: TicketStatus,
    pub ticket_type: TicketType,
}

impl From<TicketFindEntity> for Ticket {
    fn from(value: TicketFindEntity) -> Self {
        Self {
            id: value._id,
            status: value.status,
            ticket_type: value.ticket_type.into(),
        }
    }
}
