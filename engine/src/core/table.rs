//! In-memory performer table shared by the store implementations
//!
//! Holds the write rules (duplicate ids, missing defaults, version checks) so
//! every store enforces them the same way.

use std::collections::HashMap;

use shared::PerformerId;

use crate::core::performer::Performer;
use crate::core::ranking;
use crate::error::{EngineError, EngineResult};

#[derive(Debug, Clone, Default)]
pub struct PerformerTable {
    rows: HashMap<PerformerId, Performer>,
}

impl PerformerTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from previously persisted rows
    pub fn from_rows(rows: Vec<Performer>) -> EngineResult<Self> {
        let mut table = Self::new();
        for row in rows {
            if !row.has_defaults() {
                return Err(EngineError::invalid(
                    "name",
                    format!("stored performer {} is missing name or avatar", row.id()),
                ));
            }
            if table.rows.insert(row.id().clone(), row.clone()).is_some() {
                return Err(EngineError::DuplicateId { id: row.id().clone() });
            }
        }
        Ok(table)
    }

    pub fn insert(&mut self, performer: Performer) -> EngineResult<Performer> {
        if !performer.has_defaults() {
            return Err(EngineError::invalid(
                "name",
                "name and avatar must be assigned before the first save",
            ));
        }
        if self.rows.contains_key(performer.id()) {
            return Err(EngineError::DuplicateId {
                id: performer.id().clone(),
            });
        }

        self.rows.insert(performer.id().clone(), performer.clone());
        Ok(performer)
    }

    pub fn get(&self, id: &PerformerId) -> Option<&Performer> {
        self.rows.get(id)
    }

    /// Every row, oldest first
    pub fn list(&self) -> Vec<Performer> {
        let mut rows: Vec<Performer> = self.rows.values().cloned().collect();
        rows.sort_by(ranking::by_creation);
        rows
    }

    /// Replace a row when the candidate's version matches, returning the
    /// previous row so callers can roll back
    pub fn update(&mut self, mut performer: Performer) -> EngineResult<(Performer, Performer)> {
        let id = performer.id().clone();
        let current = self
            .rows
            .get_mut(&id)
            .ok_or_else(|| EngineError::NotFound { id: id.clone() })?;

        if current.version() != performer.version() {
            return Err(EngineError::VersionConflict {
                id,
                expected: performer.version(),
                found: current.version(),
            });
        }

        performer.set_version(current.version() + 1);
        let previous = std::mem::replace(current, performer.clone());
        Ok((performer, previous))
    }

    /// Put a row back exactly as it was
    pub fn restore(&mut self, performer: Performer) {
        self.rows.insert(performer.id().clone(), performer);
    }

    pub fn remove(&mut self, id: &PerformerId) -> Option<Performer> {
        self.rows.remove(id)
    }

    pub fn name_exists(&self, name: &str) -> bool {
        self.rows.values().any(|p| p.name() == Some(name))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::earnings::FixedEarnings;
    use crate::core::performer::NewPerformer;
    use chrono::Utc;

    fn ready(name: &str) -> Performer {
        let mut p = Performer::new(NewPerformer::default()).unwrap();
        p.assign_name(name.to_string());
        p.assign_avatar(format!("https://avatars.test/{}", p.id()));
        p
    }

    #[test]
    fn test_insert_requires_defaults() {
        let mut table = PerformerTable::new();
        let bare = Performer::new(NewPerformer::default()).unwrap();
        assert!(matches!(table.insert(bare), Err(EngineError::InvalidPerformer { .. })));
        assert!(table.is_empty());
    }

    #[test]
    fn test_duplicate_insert_rejected() {
        let mut table = PerformerTable::new();
        let p = ready("a");
        table.insert(p.clone()).unwrap();
        assert!(matches!(table.insert(p), Err(EngineError::DuplicateId { .. })));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_update_bumps_version() {
        let mut table = PerformerTable::new();
        let mut p = table.insert(ready("a")).unwrap();
        p.perform(&FixedEarnings(300), Utc::now()).unwrap();

        let (saved, previous) = table.update(p).unwrap();
        assert_eq!(saved.version(), 1);
        assert_eq!(previous.version(), 0);
        assert_eq!(table.get(saved.id()).unwrap().worth(), 2200);
    }

    #[test]
    fn test_stale_update_conflicts() {
        let mut table = PerformerTable::new();
        let original = table.insert(ready("a")).unwrap();

        let mut first = original.clone();
        first.perform(&FixedEarnings(300), Utc::now()).unwrap();
        table.update(first).unwrap();

        let mut stale = original;
        stale.perform(&FixedEarnings(0), Utc::now()).unwrap();
        let result = table.update(stale);
        assert!(matches!(
            result,
            Err(EngineError::VersionConflict { expected: 0, found: 1, .. })
        ));
    }

    #[test]
    fn test_update_unknown_row() {
        let mut table = PerformerTable::new();
        assert!(matches!(table.update(ready("ghost")), Err(EngineError::NotFound { .. })));
    }

    #[test]
    fn test_name_exists() {
        let mut table = PerformerTable::new();
        table.insert(ready("Neon Busker 12")).unwrap();
        assert!(table.name_exists("Neon Busker 12"));
        assert!(!table.name_exists("Neon Busker 13"));
    }

    #[test]
    fn test_from_rows_rejects_incomplete() {
        let bare = Performer::new(NewPerformer::default()).unwrap();
        assert!(PerformerTable::from_rows(vec![bare]).is_err());
    }
}
