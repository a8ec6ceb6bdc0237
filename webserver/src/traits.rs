//! Service trait definitions for dependency injection
//!
//! User storage and password hashing are abstracted through these traits for
//! testability; performer storage lives in the engine crate.

use async_trait::async_trait;

use crate::error::WebServerResult;
use crate::types::User;

/// Registered user storage
#[mockall::automock]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Look a user up by email (case-insensitive)
    async fn find_by_email(&self, email: &str) -> WebServerResult<Option<User>>;

    /// Store a new user; fails with `DuplicateUser` when the email is taken
    async fn insert(&self, user: User) -> WebServerResult<User>;

    /// Number of registered users
    async fn count(&self) -> WebServerResult<usize>;
}

/// One-way password hashing
#[mockall::automock]
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password with a fresh salt
    async fn hash(&self, password: &str) -> WebServerResult<String>;

    /// Check a plaintext password against a stored hash
    async fn verify(&self, password: &str, hash: &str) -> WebServerResult<bool>;
}
