use uuid::Uuid;

///
/// Authenticated user, inserted into request extensions by the auth middleware.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
}

impl User {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}
