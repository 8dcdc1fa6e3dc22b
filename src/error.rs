use crate::repository;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    ///
    /// Entity required to process the request does not exist
    ///
    #[error("not found: {0}")]
    NotFound(&'static str),

    ///
    /// Request is well formed but violates booking rules
    ///
    #[error("cannot book: {0}")]
    CannotBook(&'static str),

    #[error("database error: {0}")]
    Database(#[from] repository::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match &self {
            Error::NotFound(_) | Error::CannotBook(_) => tracing::warn!(err = %self),
            Error::Database(_) => tracing::error!(err = %self),
        }

        match self {
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::CannotBook(_) => StatusCode::FORBIDDEN,
            Error::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
        .into_response()
    }
}
