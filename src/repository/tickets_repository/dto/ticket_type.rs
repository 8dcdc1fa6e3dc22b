use crate::repository::tickets_repository::entity::TicketTypeFindEntity;

#[derive(Debug, Clone)]
pub struct TicketType {
    pub id: i64,

    /// participant attends online, there's no room to book
    pub is_remote: bool,
}

impl From<TicketTypeFindEntity> for TicketType {
    fn from(value: TicketTypeFindEntity) -> Self {
        Self {
            id: value._id,
            is_remote: value.is_remote,
        }
    }
}
