//! In-memory performer store

use async_trait::async_trait;
use shared::PerformerId;
use tokio::sync::RwLock;

use crate::core::performer::Performer;
use crate::core::table::PerformerTable;
use crate::error::EngineResult;
use crate::traits::PerformerStore;

/// Performer store backed by a process-local table
#[derive(Debug, Default)]
pub struct MemoryStore {
    table: RwLock<PerformerTable>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PerformerStore for MemoryStore {
    async fn insert(&self, performer: Performer) -> EngineResult<Performer> {
        self.table.write().await.insert(performer)
    }

    async fn get(&self, id: &PerformerId) -> EngineResult<Option<Performer>> {
        Ok(self.table.read().await.get(id).cloned())
    }

    async fn list(&self) -> EngineResult<Vec<Performer>> {
        Ok(self.table.read().await.list())
    }

    async fn update(&self, performer: Performer) -> EngineResult<Performer> {
        let (saved, _previous) = self.table.write().await.update(performer)?;
        Ok(saved)
    }

    async fn name_exists(&self, name: &str) -> EngineResult<bool> {
        Ok(self.table.read().await.name_exists(name))
    }

    async fn count(&self) -> EngineResult<usize> {
        Ok(self.table.read().await.len())
    }
}
