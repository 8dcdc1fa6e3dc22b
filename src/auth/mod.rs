//!
//! Bearer JWT authentication.
//!
//! Tokens are issued elsewhere; this module only validates them
//! and exposes the authenticated [User] to handlers.
//!

mod dto;
mod error;
mod jwt_verifier;
mod middleware;
pub mod util;

pub use dto::User;
pub use middleware::JwtAuthLayer;
