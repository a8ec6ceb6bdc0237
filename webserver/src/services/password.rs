//! bcrypt password hashing
//!
//! bcrypt is CPU bound, so hashing runs on the blocking pool.

use async_trait::async_trait;

use crate::error::{WebServerError, WebServerResult};
use crate::traits::PasswordHasher;

pub const DEFAULT_BCRYPT_COST: u32 = 10;

#[derive(Debug, Clone, Copy)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    /// `cost` is clamped to the range bcrypt accepts
    pub fn new(cost: u32) -> Self {
        Self {
            cost: cost.clamp(4, 31),
        }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new(DEFAULT_BCRYPT_COST)
    }
}

#[async_trait]
impl PasswordHasher for BcryptHasher {
    async fn hash(&self, password: &str) -> WebServerResult<String> {
        let password = password.to_string();
        let cost = self.cost;
        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| WebServerError::InternalError(format!("hashing task failed: {e}")))?
            .map_err(WebServerError::from)
    }

    async fn verify(&self, password: &str, hash: &str) -> WebServerResult<bool> {
        let password = password.to_string();
        let hash = hash.to_string();
        tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| WebServerError::InternalError(format!("verification task failed: {e}")))?
            .map_err(WebServerError::from)
    }
}
