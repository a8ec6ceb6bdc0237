//! Performer lifecycle service
//!
//! Creates performers (with their defaults assigned explicitly before the
//! first save) and runs performances against the store. A performance is a
//! read-modify-write on one record; concurrent writers are detected through
//! the record version and the transition is re-applied to a fresh read.

use std::sync::Arc;

use chrono::Utc;
use futures_util::future::join_all;
use serde::Serialize;
use shared::{PerformerId, ProcessId, process_debug, process_info, process_warn};

use crate::core::identity::{AvatarStyle, TRAITS_PER_PERFORMER};
use crate::core::performer::{NewPerformer, PerformanceRecord, Performer};
use crate::error::{EngineError, EngineResult};
use crate::traits::{EarningsSource, IdentityGenerator, PerformerStore};

/// Attempts per performance before a version conflict is surfaced
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Name draws before falling back to an id suffix
pub const MAX_NAME_ATTEMPTS: u32 = 8;

/// Result of a single performance
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PerformanceOutcome {
    /// The performer as persisted after the performance
    pub performer: Performer,
    /// The history entry that was appended
    pub record: PerformanceRecord,
}

/// A performer the batch could not advance
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchFailure {
    pub id: PerformerId,
    pub error: String,
}

/// Per-entity results of `all_perform`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub performed: Vec<PerformanceOutcome>,
    pub failed: Vec<BatchFailure>,
}

impl BatchReport {
    pub fn attempted(&self) -> usize {
        self.performed.len() + self.failed.len()
    }

    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    /// Sum of net earnings across successful performances
    pub fn net_earned(&self) -> i64 {
        self.performed.iter().map(|o| o.record.net_earned).sum()
    }
}

#[derive(Clone)]
pub struct Lifecycle {
    store: Arc<dyn PerformerStore>,
    earnings: Arc<dyn EarningsSource>,
    identity: Arc<dyn IdentityGenerator>,
    avatars: AvatarStyle,
    max_attempts: u32,
}

impl Lifecycle {
    pub fn new(
        store: Arc<dyn PerformerStore>,
        earnings: Arc<dyn EarningsSource>,
        identity: Arc<dyn IdentityGenerator>,
    ) -> Self {
        Self {
            store,
            earnings,
            identity,
            avatars: AvatarStyle::default(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    pub fn with_avatars(mut self, avatars: AvatarStyle) -> Self {
        self.avatars = avatars;
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn store(&self) -> &Arc<dyn PerformerStore> {
        &self.store
    }

    /// Assign name, avatar and traits where they are missing
    ///
    /// Names are re-drawn while they collide with a stored performer; after
    /// `MAX_NAME_ATTEMPTS` the last draw gets a short id suffix instead.
    pub async fn ensure_defaults(&self, performer: &mut Performer) -> EngineResult<()> {
        if performer.name().is_none() {
            let mut candidate = self.identity.name();
            let mut attempts = 1;
            while self.store.name_exists(&candidate).await? {
                if attempts >= MAX_NAME_ATTEMPTS {
                    candidate = format!("{} {}", candidate, performer.id().short());
                    break;
                }
                candidate = self.identity.name();
                attempts += 1;
            }
            performer.assign_name(candidate);
        }

        if performer.avatar().is_none() {
            performer.assign_avatar(self.avatars.url_for(performer.id()));
        }

        if performer.traits().is_empty() {
            performer.assign_traits(self.identity.traits(TRAITS_PER_PERFORMER));
        }

        Ok(())
    }

    /// Create and persist a new performer
    pub async fn create(&self, spec: NewPerformer) -> EngineResult<Performer> {
        let mut performer = Performer::new(spec)?;
        self.ensure_defaults(&mut performer).await?;
        let saved = self.store.insert(performer).await?;

        process_debug!(
            ProcessId::current(),
            "🎭 Created performer {} ({}) worth {}",
            saved.name().unwrap_or_default(),
            saved.id(),
            saved.worth()
        );
        Ok(saved)
    }

    /// Create `count` performers with default settings
    pub async fn seed(&self, count: usize) -> EngineResult<Vec<Performer>> {
        let mut created = Vec::with_capacity(count);
        for _ in 0..count {
            created.push(self.create(NewPerformer::default()).await?);
        }
        Ok(created)
    }

    /// Run one performance for `id` and persist it
    pub async fn perform(&self, id: &PerformerId) -> EngineResult<PerformanceOutcome> {
        let mut attempt = 1;
        loop {
            let mut performer = self
                .store
                .get(id)
                .await?
                .ok_or_else(|| EngineError::NotFound { id: id.clone() })?;

            let record = performer.perform(self.earnings.as_ref(), Utc::now())?;

            match self.store.update(performer).await {
                Ok(saved) => return Ok(PerformanceOutcome { performer: saved, record }),
                Err(EngineError::VersionConflict { .. }) if attempt < self.max_attempts => {
                    process_debug!(
                        ProcessId::current(),
                        "🔁 Version conflict on {} (attempt {}/{}), re-reading",
                        id,
                        attempt,
                        self.max_attempts
                    );
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Run one performance for every stored performer
    ///
    /// Best effort: each performer succeeds or fails on its own and failures
    /// are listed in the report. Only a failure to list the performers fails
    /// the whole call.
    pub async fn all_perform(&self) -> EngineResult<BatchReport> {
        let ids: Vec<PerformerId> = self
            .store
            .list()
            .await?
            .into_iter()
            .map(|p| p.id().clone())
            .collect();

        let results = join_all(ids.iter().map(|id| self.perform(id))).await;

        let mut report = BatchReport::default();
        for (id, result) in ids.into_iter().zip(results) {
            match result {
                Ok(outcome) => report.performed.push(outcome),
                Err(e) => {
                    process_warn!(ProcessId::current(), "⚠️ Performer {} failed to perform: {}", id, e);
                    report.failed.push(BatchFailure {
                        id,
                        error: e.to_string(),
                    });
                }
            }
        }

        process_info!(
            ProcessId::current(),
            "🎬 Batch performance: {} performed, {} failed, net {}",
            report.performed.len(),
            report.failed.len(),
            report.net_earned()
        );
        Ok(report)
    }
}
