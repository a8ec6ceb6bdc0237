//! Service implementations
//!
//! Stores that handle actual I/O plus the lifecycle, query and scheduling
//! services built on top of them.

pub mod file_store;
pub mod lifecycle;
pub mod memory_store;
pub mod queries;
pub mod scheduler;

#[cfg(test)]
mod tests;

// Re-export all service implementations
pub use file_store::JsonFileStore;
pub use lifecycle::{BatchFailure, BatchReport, Lifecycle, PerformanceOutcome};
pub use memory_store::MemoryStore;
pub use queries::PerformerQueries;
pub use scheduler::{PerformanceScheduler, SchedulerHandle};
