//! Core business logic modules
//!
//! Pure domain logic with no I/O dependencies

pub mod earnings;
pub mod identity;
pub mod performer;
pub mod ranking;
pub mod table;

// Re-export commonly used types
pub use earnings::{FixedEarnings, UniformEarnings, MAX_GROSS_EARNINGS};
pub use identity::{AvatarStyle, RandomIdentity, TRAITS_PER_PERFORMER};
pub use performer::{NewPerformer, PerformanceMode, PerformanceRecord, Performer};
pub use table::PerformerTable;
