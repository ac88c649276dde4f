use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid warehouse size: {0}")]
    InvalidWarehouseSize(String),

    #[error("invalid identifier {input:?}: {reason}")]
    InvalidIdentifier { input: String, reason: String },

    #[error("failed to serialize resource model: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("resource model must serialize to a JSON object, got {0}")]
    NotAnObject(String),
}

pub type Result<T> = std::result::Result<T, Error>;
