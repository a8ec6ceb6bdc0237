//! WebServer-specific error types and their HTTP mapping

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use engine::EngineError;
use serde_json::json;
use shared::{PerformerId, ProcessId, SharedError, process_error};
use thiserror::Error;

use crate::types::FieldError;

/// Body sent for every 500 so internals never leak to clients
pub const SERVER_ERROR_BODY: &str = "Server error";

#[derive(Error, Debug)]
pub enum WebServerError {
    #[error("Request validation failed with {} error(s)", errors.len())]
    Validation { errors: Vec<FieldError> },

    #[error("User already exists")]
    DuplicateUser,

    #[error("Performer not found: {id}")]
    PerformerNotFound { id: PerformerId },

    #[error("Malformed identifier")]
    MalformedId(#[from] SharedError),

    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("User storage failure: {message}")]
    Storage { message: String },

    #[error("Password hashing failed: {0}")]
    Hashing(#[from] bcrypt::BcryptError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Server startup error: {0}")]
    ServerStartup(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl WebServerError {
    pub fn validation(errors: Vec<FieldError>) -> Self {
        Self::Validation { errors }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage { message: message.into() }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::DuplicateUser => StatusCode::BAD_REQUEST,
            Self::PerformerNotFound { .. } => StatusCode::NOT_FOUND,
            Self::Engine(EngineError::NotFound { .. }) => StatusCode::NOT_FOUND,
            Self::Engine(EngineError::InvalidPerformer { .. }) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WebServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match self {
            Self::Validation { errors } => (status, Json(json!({ "errors": errors }))).into_response(),
            Self::DuplicateUser => (
                status,
                Json(json!({ "errors": [FieldError::new("User already exists")] })),
            )
                .into_response(),
            Self::PerformerNotFound { .. } | Self::Engine(EngineError::NotFound { .. }) => {
                (status, Json(json!({ "msg": "Performer not found" }))).into_response()
            }
            Self::Engine(EngineError::InvalidPerformer { field, reason }) => (
                status,
                Json(json!({ "errors": [FieldError::for_param(reason, &field)] })),
            )
                .into_response(),
            other => {
                process_error!(ProcessId::current(), "❌ Request failed: {}", other);
                (status, SERVER_ERROR_BODY).into_response()
            }
        }
    }
}

pub type WebServerResult<T> = Result<T, WebServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(WebServerError::DuplicateUser.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            WebServerError::validation(vec![FieldError::new("bad")]).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            WebServerError::PerformerNotFound { id: PerformerId::new() }.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            WebServerError::Engine(EngineError::storage("down")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            WebServerError::MalformedId(SharedError::InvalidId { input: "x".into() }).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_storage_errors_do_not_leak_details() {
        let response = WebServerError::Engine(EngineError::storage("password=hunter2")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
