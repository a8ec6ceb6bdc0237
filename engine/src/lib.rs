//! Performer simulation engine
//!
//! Performers earn (or lose) money each time they perform. This crate holds
//! the performer entity and its state machine, the pluggable earnings and
//! identity sources, the storage trait with in-memory and JSON file
//! implementations, and the lifecycle, query and scheduling services.

pub mod core;
pub mod error;
pub mod services;
pub mod traits;

// Re-export commonly used types
pub use crate::core::{
    AvatarStyle, FixedEarnings, NewPerformer, PerformanceMode, PerformanceRecord, Performer,
    RandomIdentity, UniformEarnings,
};
pub use error::{EngineError, EngineResult};
pub use services::{
    BatchReport, JsonFileStore, Lifecycle, MemoryStore, PerformanceOutcome, PerformanceScheduler,
    PerformerQueries, SchedulerHandle,
};
pub use traits::{EarningsSource, IdentityGenerator, PerformerStore};
