//! Health check

use axum::{Json, extract::State};
use chrono::Utc;
use serde_json::{Value, json};

use crate::error::WebServerResult;
use crate::state::AppState;

/// `GET /health`
pub async fn health_check(State(state): State<AppState>) -> WebServerResult<Json<Value>> {
    let performers = state.queries.count().await?;

    Ok(Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().timestamp(),
        "uptimeSeconds": state.uptime_seconds(),
        "performers": performers
    })))
}
