//! Shared request state
//!
//! Cloned into every handler; all members are cheap handles.

use std::sync::Arc;
use std::time::Instant;

use engine::{Lifecycle, PerformerQueries};

use crate::traits::{PasswordHasher, UserStore};

#[derive(Clone)]
pub struct AppState {
    pub lifecycle: Lifecycle,
    pub queries: PerformerQueries,
    pub users: Arc<dyn UserStore>,
    pub hasher: Arc<dyn PasswordHasher>,
    pub started_at: Instant,
}

impl AppState {
    /// Queries read from the same store the lifecycle writes to
    pub fn new(lifecycle: Lifecycle, users: Arc<dyn UserStore>, hasher: Arc<dyn PasswordHasher>) -> Self {
        let queries = PerformerQueries::new(lifecycle.store().clone());
        Self {
            lifecycle,
            queries,
            users,
            hasher,
            started_at: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
