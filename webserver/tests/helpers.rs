//! Test helper utilities for webserver integration tests

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, Bytes, to_bytes},
    http::{Request, StatusCode, header},
};
use engine::{FixedEarnings, Lifecycle, MemoryStore, PerformerStore, RandomIdentity};
use serde_json::Value;
use tower::ServiceExt;

use webserver::{AppState, BcryptHasher, InMemoryUserStore, PasswordHasher, UserStore, build_router};

/// Cheapest cost bcrypt accepts
pub const TEST_BCRYPT_COST: u32 = 4;

/// State over a fresh memory store with pinned earnings
pub fn memory_state(gross: i64) -> (AppState, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    (state_with_store(store.clone(), gross), store)
}

pub fn state_with_store(store: Arc<dyn PerformerStore>, gross: i64) -> AppState {
    state_with(
        store,
        gross,
        Arc::new(InMemoryUserStore::new()),
        Arc::new(BcryptHasher::new(TEST_BCRYPT_COST)),
    )
}

pub fn state_with(
    store: Arc<dyn PerformerStore>,
    gross: i64,
    users: Arc<dyn UserStore>,
    hasher: Arc<dyn PasswordHasher>,
) -> AppState {
    let lifecycle = Lifecycle::new(store, Arc::new(FixedEarnings(gross)), Arc::new(RandomIdentity));
    AppState::new(lifecycle, users, hasher)
}

pub async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Bytes) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body)
}

pub async fn get(router: &Router, uri: &str) -> (StatusCode, Bytes) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(router, request).await
}

pub async fn get_json(router: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get(router, uri).await;
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

pub async fn post_json(router: &Router, uri: &str, body: Value) -> (StatusCode, Bytes) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(router, request).await
}

pub async fn post_empty(router: &Router, uri: &str) -> (StatusCode, Bytes) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(router, request).await
}

pub fn json(body: &Bytes) -> Value {
    serde_json::from_slice(body).unwrap()
}

pub fn router_for(state: AppState) -> Router {
    build_router(state)
}
