//! Trait definitions with mockall annotations for testing
//!
//! Storage and randomness are injected into the lifecycle service through
//! these traits so tests can pin earnings and simulate storage failures.

use crate::core::performer::Performer;
use crate::error::EngineResult;
use shared::PerformerId;

/// Source of gross earnings for a single performance
#[mockall::automock]
pub trait EarningsSource: Send + Sync {
    /// Gross earnings for one performance, before costs
    fn gross_earnings(&self) -> i64;
}

/// Generator for performer display names and traits
#[mockall::automock]
pub trait IdentityGenerator: Send + Sync {
    /// A display name; collisions are possible but rare
    fn name(&self) -> String;

    /// `count` distinct traits
    fn traits(&self, count: usize) -> Vec<String>;
}

/// Persistence abstraction for performers
///
/// Implementations must commit an update as a whole: either the new record
/// (with its bumped version) is visible afterwards or the old one is.
#[mockall::automock]
#[async_trait::async_trait]
pub trait PerformerStore: Send + Sync {
    /// Insert a performer whose defaults have been ensured
    ///
    /// Fails with `DuplicateId` when the id is taken and `InvalidPerformer`
    /// when name or avatar is missing.
    async fn insert(&self, performer: Performer) -> EngineResult<Performer>;

    /// Fetch one performer
    async fn get(&self, id: &PerformerId) -> EngineResult<Option<Performer>>;

    /// Every performer, oldest first
    async fn list(&self) -> EngineResult<Vec<Performer>>;

    /// Replace a performer if its stored version still matches
    ///
    /// Fails with `VersionConflict` when another writer got there first.
    /// Returns the record as stored, with the version bumped.
    async fn update(&self, performer: Performer) -> EngineResult<Performer>;

    /// Whether any stored performer already uses this name
    async fn name_exists(&self, name: &str) -> EngineResult<bool>;

    /// Number of stored performers
    async fn count(&self) -> EngineResult<usize>;
}
