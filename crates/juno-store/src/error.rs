use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    #[error("Not authenticated")]
    Unauthenticated,

    #[error("AI service error: {0}")]
    Service(String),

    #[cfg(feature = "mongodb")]
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[cfg(feature = "mongodb")]
    #[error("BSON serialization error: {0}")]
    BsonSerialization(#[from] bson::ser::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
