//! In-memory user store

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{WebServerError, WebServerResult};
use crate::traits::UserStore;
use crate::types::User;

/// Users keyed by lower-cased email
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn email_key(email: &str) -> String {
    email.trim().to_lowercase()
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_email(&self, email: &str) -> WebServerResult<Option<User>> {
        Ok(self.users.read().await.get(&email_key(email)).cloned())
    }

    async fn insert(&self, user: User) -> WebServerResult<User> {
        let mut users = self.users.write().await;
        let key = email_key(&user.email);
        if users.contains_key(&key) {
            return Err(WebServerError::DuplicateUser);
        }
        users.insert(key, user.clone());
        Ok(user)
    }

    async fn count(&self) -> WebServerResult<usize> {
        Ok(self.users.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(email: &str) -> User {
        User::new("kenneth".to_string(), email.to_string(), "$2b$04$hash".to_string())
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let store = InMemoryUserStore::new();
        store.insert(user("kenneth@biz.com")).await.unwrap();

        let found = store.find_by_email("kenneth@biz.com").await.unwrap();
        assert_eq!(found.map(|u| u.username), Some("kenneth".to_string()));
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_email_lookup_ignores_case() {
        let store = InMemoryUserStore::new();
        store.insert(user("Kenneth@Biz.com")).await.unwrap();
        assert!(store.find_by_email("kenneth@biz.com").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let store = InMemoryUserStore::new();
        store.insert(user("kenneth@biz.com")).await.unwrap();

        let result = store.insert(user("KENNETH@biz.com")).await;
        assert!(matches!(result, Err(WebServerError::DuplicateUser)));
        assert_eq!(store.count().await.unwrap(), 1);
    }
}
