use serde::Deserialize;
use uuid::Uuid;

/// `exp` is checked by [jsonwebtoken::Validation], it does not need a field here
#[derive(Deserialize)]
pub struct JwtClaims {
    pub sub: Uuid,
}
