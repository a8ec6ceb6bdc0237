//! Engine-specific error types

use thiserror::Error;
use shared::{PerformerId, SharedError};

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Performer not found: {id}")]
    NotFound { id: PerformerId },

    #[error("Performer {id} was modified concurrently (expected version {expected}, found {found})")]
    VersionConflict { id: PerformerId, expected: u64, found: u64 },

    #[error("Performance would overflow the worth of performer {id}")]
    WorthOverflow { id: PerformerId },

    #[error("Performer already exists: {id}")]
    DuplicateId { id: PerformerId },

    #[error("Invalid performer field {field}: {reason}")]
    InvalidPerformer { field: String, reason: String },

    #[error("Storage failure: {message}")]
    Storage { message: String },

    #[error("Shared component error")]
    SharedError(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl EngineError {
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage { message: message.into() }
    }

    pub fn invalid(field: &str, reason: impl Into<String>) -> Self {
        Self::InvalidPerformer {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

pub type EngineResult<T> = Result<T, EngineError>;
