//! HTTP tests for user registration

mod helpers;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use engine::MemoryStore;
use serde_json::json;
use webserver::traits::MockUserStore;
use webserver::{BcryptHasher, InMemoryUserStore, PasswordHasher, UserStore, WebServerError};

use helpers::*;

fn valid_registration() -> serde_json::Value {
    json!({
        "username": "partario",
        "email": "partario@example.com",
        "password": "hunter22"
    })
}

#[tokio::test]
async fn test_registers_valid_user() {
    let users = Arc::new(InMemoryUserStore::new());
    let hasher = Arc::new(BcryptHasher::new(TEST_BCRYPT_COST));
    let state = state_with(Arc::new(MemoryStore::new()), 0, users.clone(), hasher.clone());
    let router = router_for(state);

    let (status, body) = post_json(&router, "/api/users", valid_registration()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(&body[..], b"User registered");

    let user = users.find_by_email("partario@example.com").await.unwrap().unwrap();
    assert_eq!(user.username, "partario");
    assert_ne!(user.password_hash, "hunter22");
    assert!(hasher.verify("hunter22", &user.password_hash).await.unwrap());
}

#[tokio::test]
async fn test_invalid_fields_are_listed() {
    let (state, _store) = memory_state(0);
    let router = router_for(state);

    let (status, body) = post_json(
        &router,
        "/api/users",
        json!({ "username": "abc", "email": "not-an-email", "password": "123" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let errors = json(&body)["errors"].as_array().unwrap().clone();
    let messages: Vec<&str> = errors.iter().map(|e| e["msg"].as_str().unwrap()).collect();
    assert_eq!(
        messages,
        vec![
            "Usernames must be between 5 and 30 characters",
            "Please include a valid email",
            "Password must be at least 5 characters long",
        ]
    );
    assert_eq!(errors[1]["param"], "email");
}

#[tokio::test]
async fn test_missing_fields_fail_validation() {
    let (state, _store) = memory_state(0);
    let router = router_for(state);

    let (status, body) = post_json(&router, "/api/users", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json(&body)["errors"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_mistyped_field_is_400_error_list() {
    let (state, _store) = memory_state(0);
    let router = router_for(state);

    let (status, body) = post_json(
        &router,
        "/api/users",
        json!({ "username": 12345, "email": "partario@example.com", "password": "hunter22" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let errors = json(&body)["errors"].as_array().unwrap().clone();
    assert_eq!(errors.len(), 1);
    assert!(errors[0]["msg"].as_str().unwrap().starts_with("Invalid registration body"));
}

#[tokio::test]
async fn test_form_encoded_body_is_400_error_list() {
    let (state, _store) = memory_state(0);
    let router = router_for(state);

    let request = Request::builder()
        .method("POST")
        .uri("/api/users")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("username=partario&email=partario%40example.com&password=hunter22"))
        .unwrap();
    let (status, body) = send(&router, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json(&body)["errors"][0]["msg"].is_string());
}

#[tokio::test]
async fn test_missing_content_type_still_validates() {
    let (state, _store) = memory_state(0);
    let router = router_for(state);

    let request = Request::builder()
        .method("POST")
        .uri("/api/users")
        .body(Body::from(valid_registration().to_string()))
        .unwrap();
    let (status, body) = send(&router, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(&body[..], b"User registered");
}

#[tokio::test]
async fn test_duplicate_email_rejected() {
    let users = Arc::new(InMemoryUserStore::new());
    let state = state_with(
        Arc::new(MemoryStore::new()),
        0,
        users.clone(),
        Arc::new(BcryptHasher::new(TEST_BCRYPT_COST)),
    );
    let router = router_for(state);

    let (status, _body) = post_json(&router, "/api/users", valid_registration()).await;
    assert_eq!(status, StatusCode::OK);

    let mut again = valid_registration();
    again["email"] = json!("PARTARIO@example.com");
    let (status, body) = post_json(&router, "/api/users", again).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json(&body)["errors"][0]["msg"], "User already exists");
    assert_eq!(users.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_store_failure_is_500() {
    let mut users = MockUserStore::new();
    users
        .expect_find_by_email()
        .returning(|_| Err(WebServerError::storage("users unavailable")));
    users.expect_insert().times(0);

    let state = state_with(
        Arc::new(MemoryStore::new()),
        0,
        Arc::new(users),
        Arc::new(BcryptHasher::new(TEST_BCRYPT_COST)),
    );
    let router = router_for(state);

    let (status, body) = post_json(&router, "/api/users", valid_registration()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(&body[..], b"Server error");
}
