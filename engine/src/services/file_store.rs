//! JSON file backed performer store
//!
//! Keeps the table in memory and rewrites a snapshot file after every
//! mutation. Snapshots are written to a sibling temp file and renamed into
//! place, so a crash mid-write leaves the previous snapshot intact.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use shared::{PerformerId, ProcessId, process_debug};
use tokio::fs;
use tokio::sync::RwLock;

use crate::core::performer::Performer;
use crate::core::table::PerformerTable;
use crate::error::EngineResult;
use crate::traits::PerformerStore;

pub struct JsonFileStore {
    path: PathBuf,
    table: RwLock<PerformerTable>,
}

impl JsonFileStore {
    /// Open a store at `path`, loading the snapshot if one exists
    pub async fn open(path: impl Into<PathBuf>) -> EngineResult<Self> {
        let path = path.into();

        let table = if fs::try_exists(&path).await? {
            let content = fs::read_to_string(&path).await?;
            let rows: Vec<Performer> = if content.trim().is_empty() {
                Vec::new()
            } else {
                serde_json::from_str(&content)?
            };
            PerformerTable::from_rows(rows)?
        } else {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).await?;
            }
            PerformerTable::new()
        };

        process_debug!(
            ProcessId::current(),
            "📁 Opened performer store {} with {} performers",
            path.display(),
            table.len()
        );

        Ok(Self {
            path,
            table: RwLock::new(table),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    async fn persist(&self, table: &PerformerTable) -> EngineResult<()> {
        let content = serde_json::to_string_pretty(&table.list())?;
        let temp = self.temp_path();
        fs::write(&temp, content).await?;
        fs::rename(&temp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl PerformerStore for JsonFileStore {
    async fn insert(&self, performer: Performer) -> EngineResult<Performer> {
        let mut table = self.table.write().await;
        let saved = table.insert(performer)?;

        if let Err(e) = self.persist(&table).await {
            table.remove(saved.id());
            return Err(e);
        }
        Ok(saved)
    }

    async fn get(&self, id: &PerformerId) -> EngineResult<Option<Performer>> {
        Ok(self.table.read().await.get(id).cloned())
    }

    async fn list(&self) -> EngineResult<Vec<Performer>> {
        Ok(self.table.read().await.list())
    }

    async fn update(&self, performer: Performer) -> EngineResult<Performer> {
        let mut table = self.table.write().await;
        let (saved, previous) = table.update(performer)?;

        if let Err(e) = self.persist(&table).await {
            table.restore(previous);
            return Err(e);
        }
        Ok(saved)
    }

    async fn name_exists(&self, name: &str) -> EngineResult<bool> {
        Ok(self.table.read().await.name_exists(name))
    }

    async fn count(&self) -> EngineResult<usize> {
        Ok(self.table.read().await.len())
    }
}
