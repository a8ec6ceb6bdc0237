//! User registration

use axum::{body::Bytes, extract::State, http::StatusCode};
use shared::{ProcessId, process_info};

use crate::error::{WebServerError, WebServerResult};
use crate::state::AppState;
use crate::types::{FieldError, RegisterRequest, User};
use crate::validation::validate_registration;

/// Body of a registration request; unparseable input is a validation error
fn parse_registration(body: &[u8]) -> WebServerResult<RegisterRequest> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(RegisterRequest::default());
    }
    serde_json::from_slice(body).map_err(|e| {
        WebServerError::validation(vec![FieldError::new(format!("Invalid registration body: {e}"))])
    })
}

/// `POST /api/users`
pub async fn register_user(State(state): State<AppState>, body: Bytes) -> WebServerResult<(StatusCode, &'static str)> {
    let request = parse_registration(&body)?;
    let errors = validate_registration(&request);
    if !errors.is_empty() {
        return Err(WebServerError::validation(errors));
    }

    if state.users.find_by_email(&request.email).await?.is_some() {
        return Err(WebServerError::DuplicateUser);
    }

    let password_hash = state.hasher.hash(&request.password).await?;
    let user = User::new(request.username, request.email.trim().to_string(), password_hash);
    let user = state.users.insert(user).await?;

    process_info!(ProcessId::current(), "👤 Registered user {} ({})", user.username, user.id);
    Ok((StatusCode::OK, "User registered"))
}
