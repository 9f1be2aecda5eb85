use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum CompanionError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Backend error: HTTP {status}: {message}")]
    Backend { status: u16, message: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Conversation not found: {0}")]
    NotFound(String),

    #[error("Timeout after {0}ms")]
    Timeout(u64),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<serde_json::Error> for CompanionError {
    fn from(e: serde_json::Error) -> Self {
        CompanionError::Serialization(e.to_string())
    }
}
