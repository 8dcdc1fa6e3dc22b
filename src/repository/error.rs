#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no document updated")]
    NoDocumentUpdated,

    #[error("invalid document: {0}")]
    InvalidDocument(#[from] bson::de::Error),

    #[error("mongo error: {0}")]
    Mongo(#[from] mongodb::error::Error),
}
