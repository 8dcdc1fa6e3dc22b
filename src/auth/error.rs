#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("missing Authorization header")]
    MissingHeader,

    #[error("illegal character in Authorization header")]
    IllegalCharacter,

    #[error("unsupported authorization scheme")]
    UnsupportedScheme,

    #[error("invalid jwt: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),
}
