//! Read-only performer queries

use std::sync::Arc;

use shared::PerformerId;

use crate::core::performer::{PerformanceRecord, Performer};
use crate::core::ranking;
use crate::error::{EngineError, EngineResult};
use crate::traits::PerformerStore;

#[derive(Clone)]
pub struct PerformerQueries {
    store: Arc<dyn PerformerStore>,
}

impl PerformerQueries {
    pub fn new(store: Arc<dyn PerformerStore>) -> Self {
        Self { store }
    }

    /// Every performer, oldest first
    pub async fn all(&self) -> EngineResult<Vec<Performer>> {
        self.store.list().await
    }

    pub async fn by_id(&self, id: &PerformerId) -> EngineResult<Option<Performer>> {
        self.store.get(id).await
    }

    /// Richest performers first, at most `limit` of them
    pub async fn top(&self, limit: Option<usize>) -> EngineResult<Vec<Performer>> {
        let performers = self.store.list().await?;
        Ok(ranking::top_by_worth(performers, limit))
    }

    /// Performance history of one performer, oldest entry first
    pub async fn history(&self, id: &PerformerId) -> EngineResult<Vec<PerformanceRecord>> {
        self.store
            .get(id)
            .await?
            .map(|p| p.history().to_vec())
            .ok_or_else(|| EngineError::NotFound { id: id.clone() })
    }

    pub async fn count(&self) -> EngineResult<usize> {
        self.store.count().await
    }
}
