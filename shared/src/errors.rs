//! Shared error types for the performer arena

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SharedError {
    #[error("Invalid identifier: {input}")]
    InvalidId { input: String },
}
