use super::Room;
use crate::repository;
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomsRepository: Send + Sync {
    ///
    /// Finds room together with all of its bookings
    ///
    async fn find_with_bookings(&self, id: i64) -> Result<Option<Room>, repository::Error>;
}
