//! Request, response and record types for the webserver

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::UserId;

/// One entry of an `{"errors": [...]}` response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl FieldError {
    /// Error not tied to a particular field
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            param: None,
            location: None,
        }
    }

    /// Error for a field of the request body
    pub fn for_param(msg: impl Into<String>, param: &str) -> Self {
        Self {
            msg: msg.into(),
            param: Some(param.to_string()),
            location: Some("body".to_string()),
        }
    }
}

/// Body of `POST /api/users`
///
/// Missing fields deserialize as empty strings so they surface as
/// validation errors rather than extractor rejections.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// A registered user; the password is only ever held as a bcrypt hash
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(username: String, email: String, password_hash: String) -> Self {
        Self {
            id: UserId::new(),
            username,
            email,
            password_hash,
            created_at: Utc::now(),
        }
    }
}

/// Query string of `GET /api/performers/top`
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct TopQuery {
    pub limit: Option<usize>,
}
