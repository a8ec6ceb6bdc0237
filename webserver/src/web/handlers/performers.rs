//! Performer endpoints
//!
//! Reads go through `PerformerQueries`, writes through `Lifecycle`. Storage
//! failures become a bare 500 via `WebServerError`.

use axum::{
    Json,
    body::Bytes,
    extract::{Path, Query, State},
};
use engine::{BatchReport, NewPerformer, PerformanceOutcome, PerformanceRecord, Performer};
use shared::{PerformerId, ProcessId, process_info};

use crate::error::{WebServerError, WebServerResult};
use crate::state::AppState;
use crate::types::{FieldError, TopQuery};

fn parse_id(raw: &str) -> WebServerResult<PerformerId> {
    Ok(raw.parse::<PerformerId>()?)
}

/// `GET /api/performers`
pub async fn list_performers(State(state): State<AppState>) -> WebServerResult<Json<Vec<Performer>>> {
    Ok(Json(state.queries.all().await?))
}

/// `GET /api/performers/top`
pub async fn top_performers(
    State(state): State<AppState>,
    Query(query): Query<TopQuery>,
) -> WebServerResult<Json<Vec<Performer>>> {
    Ok(Json(state.queries.top(query.limit).await?))
}

/// `GET /api/performers/:id`
pub async fn get_performer(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> WebServerResult<Json<Performer>> {
    let id = parse_id(&raw_id)?;
    match state.queries.by_id(&id).await? {
        Some(performer) => Ok(Json(performer)),
        None => Err(WebServerError::PerformerNotFound { id }),
    }
}

/// `GET /api/performers/:id/history`
pub async fn performer_history(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> WebServerResult<Json<Vec<PerformanceRecord>>> {
    let id = parse_id(&raw_id)?;
    Ok(Json(state.queries.history(&id).await?))
}

/// `POST /api/performers`
///
/// An empty body creates a performer with default settings.
pub async fn create_performer(State(state): State<AppState>, body: Bytes) -> WebServerResult<Json<Performer>> {
    let spec: NewPerformer = if body.iter().all(u8::is_ascii_whitespace) {
        NewPerformer::default()
    } else {
        serde_json::from_slice(&body).map_err(|e| {
            WebServerError::validation(vec![FieldError::new(format!("Invalid performer settings: {e}"))])
        })?
    };

    let performer = state.lifecycle.create(spec).await?;
    process_info!(
        ProcessId::current(),
        "🎭 Registered performer {} ({})",
        performer.name().unwrap_or_default(),
        performer.id()
    );
    Ok(Json(performer))
}

/// `POST /api/performers/:id/perform`
pub async fn perform_one(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> WebServerResult<Json<PerformanceOutcome>> {
    let id = parse_id(&raw_id)?;
    Ok(Json(state.lifecycle.perform(&id).await?))
}

/// `POST /api/performers/perform`
pub async fn perform_all(State(state): State<AppState>) -> WebServerResult<Json<BatchReport>> {
    Ok(Json(state.lifecycle.all_perform().await?))
}
