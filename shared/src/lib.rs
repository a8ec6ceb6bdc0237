//! Shared types for the performer arena workspace
//!
//! Contains the identifiers, the shared error type and the process-aware
//! logging setup used by both the engine and the webserver.

pub mod errors;
pub mod logging;
pub mod types;

pub use errors::*;
pub use types::*;
