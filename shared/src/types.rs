//! Core shared types and identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use uuid::Uuid;

use crate::errors::SharedError;

/// Global process ID singleton - set once at startup
static PROCESS_ID: OnceLock<ProcessId> = OnceLock::new();

/// Process identifier used to tag log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcessId {
    /// HTTP API server
    WebServer,
    /// Batch simulation binary
    Simulator,
    /// Library use without a binary entry point (tests, embedding)
    Embedded,
}

impl ProcessId {
    /// Initialize the global process ID for the webserver
    pub fn init_webserver() -> &'static ProcessId {
        PROCESS_ID.get_or_init(|| ProcessId::WebServer)
    }

    /// Initialize the global process ID for the simulator
    pub fn init_simulator() -> &'static ProcessId {
        PROCESS_ID.get_or_init(|| ProcessId::Simulator)
    }

    /// Get the global process ID, falling back to `Embedded` when no binary set it
    pub fn current() -> &'static ProcessId {
        PROCESS_ID.get_or_init(|| ProcessId::Embedded)
    }

    /// Crate targets this process logs under
    pub fn log_targets(&self) -> &'static [&'static str] {
        match self {
            ProcessId::WebServer => &["webserver", "engine", "shared"],
            ProcessId::Simulator => &["simulate", "engine", "shared"],
            ProcessId::Embedded => &["engine", "shared"],
        }
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessId::WebServer => write!(f, "webserver"),
            ProcessId::Simulator => write!(f, "simulate"),
            ProcessId::Embedded => write!(f, "embedded"),
        }
    }
}

/// Unique identifier for performers
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PerformerId(Uuid);

impl PerformerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// First eight hex characters, used as a short disambiguating suffix
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }
}

impl Default for PerformerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PerformerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PerformerId {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| SharedError::InvalidId { input: s.to_string() })
    }
}

/// Unique identifier for registered users
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_performer_id_parse_roundtrip() {
        let id = PerformerId::new();
        let parsed: PerformerId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_performer_id_rejects_garbage() {
        let result = "53265426".parse::<PerformerId>();
        assert_eq!(
            result,
            Err(SharedError::InvalidId { input: "53265426".to_string() })
        );
    }

    #[test]
    fn test_short_id_is_prefix() {
        let id = PerformerId::new();
        let short = id.short();
        assert_eq!(short.len(), 8);
        assert!(id.to_string().starts_with(&short));
    }

    #[test]
    fn test_performer_id_serializes_as_plain_string() {
        let id = PerformerId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{id}\""));
    }
}
