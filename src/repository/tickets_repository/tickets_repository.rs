use super::Ticket;
use crate::repository;
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsRepository: Send + Sync {
    ///
    /// Finds the first ticket of the enrollment together with its type.
    /// Ticket pointing at a missing type is treated as missing.
    ///
    async fn find_with_type_by_enrollment_id(
        &self,
        enrollment_id: i64,
    ) -> Result<Option<Ticket>, repository::Error>;
}
