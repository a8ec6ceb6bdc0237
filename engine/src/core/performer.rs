//! Performer entity and its performance state machine
//!
//! Worth, timeout and history are private: the only way to change them is
//! [`Performer::perform`], which keeps `worth == initial + sum(net_earned)`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::PerformerId;

use crate::error::{EngineError, EngineResult};
use crate::traits::EarningsSource;

pub const DEFAULT_WORTH: i64 = 2000;
pub const DEFAULT_COST_PER_PERFORMANCE: i64 = 100;

/// Optional overrides for a new performer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPerformer {
    pub worth: Option<i64>,
    pub timeout: Option<u32>,
    pub cost_per_performance: Option<i64>,
}

impl NewPerformer {
    pub fn with_worth(mut self, worth: i64) -> Self {
        self.worth = Some(worth);
        self
    }

    pub fn with_timeout(mut self, timeout: u32) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_cost(mut self, cost: i64) -> Self {
        self.cost_per_performance = Some(cost);
        self
    }
}

/// One entry of a performer's history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceRecord {
    pub net_earned: i64,
    #[serde(rename = "date")]
    pub occurred_at: DateTime<Utc>,
}

/// Which branch of the state machine the next performance takes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerformanceMode {
    /// Earnings are drawn from the earnings source
    Normal,
    /// Only costs apply; the countdown decrements
    Timeout,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Performer {
    #[serde(rename = "_id")]
    id: PerformerId,
    name: Option<String>,
    avatar: Option<String>,
    worth: i64,
    cost_per_performance: i64,
    #[serde(rename = "timeout")]
    timeout_remaining: u32,
    #[serde(default)]
    traits: Vec<String>,
    created_at: DateTime<Utc>,
    #[serde(default)]
    performance_history: Vec<PerformanceRecord>,
    #[serde(rename = "__v", default)]
    version: u64,
}

impl Performer {
    /// Build an unsaved performer; name, avatar and traits are left unset
    pub fn new(spec: NewPerformer) -> EngineResult<Self> {
        let cost = spec.cost_per_performance.unwrap_or(DEFAULT_COST_PER_PERFORMANCE);
        if cost < 0 {
            return Err(EngineError::invalid(
                "costPerPerformance",
                format!("must not be negative, got {cost}"),
            ));
        }

        Ok(Self {
            id: PerformerId::new(),
            name: None,
            avatar: None,
            worth: spec.worth.unwrap_or(DEFAULT_WORTH),
            cost_per_performance: cost,
            timeout_remaining: spec.timeout.unwrap_or(0),
            traits: Vec::new(),
            created_at: Utc::now(),
            performance_history: Vec::new(),
            version: 0,
        })
    }

    pub fn id(&self) -> &PerformerId {
        &self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref()
    }

    pub fn worth(&self) -> i64 {
        self.worth
    }

    pub fn cost_per_performance(&self) -> i64 {
        self.cost_per_performance
    }

    pub fn timeout_remaining(&self) -> u32 {
        self.timeout_remaining
    }

    pub fn traits(&self) -> &[String] {
        &self.traits
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn history(&self) -> &[PerformanceRecord] {
        &self.performance_history
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Sum of every recorded net earning
    pub fn total_net_earned(&self) -> i64 {
        self.performance_history.iter().map(|r| r.net_earned).sum()
    }

    /// Name and avatar are both present
    pub fn has_defaults(&self) -> bool {
        self.name.is_some() && self.avatar.is_some()
    }

    pub fn mode(&self) -> PerformanceMode {
        if self.timeout_remaining > 0 {
            PerformanceMode::Timeout
        } else {
            PerformanceMode::Normal
        }
    }

    /// Run one performance and return the appended record
    ///
    /// The earnings source is only consulted in normal mode. If the result
    /// would not fit in `worth` the performer is left untouched.
    pub fn perform(&mut self, earnings: &dyn EarningsSource, at: DateTime<Utc>) -> EngineResult<PerformanceRecord> {
        let mode = self.mode();
        let net_earned = match mode {
            PerformanceMode::Timeout => self.cost_per_performance.checked_neg(),
            PerformanceMode::Normal => earnings.gross_earnings().checked_sub(self.cost_per_performance),
        };
        let (net_earned, worth) = net_earned
            .and_then(|net| self.worth.checked_add(net).map(|worth| (net, worth)))
            .ok_or_else(|| EngineError::WorthOverflow { id: self.id.clone() })?;

        if mode == PerformanceMode::Timeout {
            self.timeout_remaining -= 1;
        }
        let record = PerformanceRecord {
            net_earned,
            occurred_at: at,
        };
        self.performance_history.push(record);
        self.worth = worth;
        Ok(record)
    }

    pub(crate) fn assign_name(&mut self, name: String) {
        self.name = Some(name);
    }

    pub(crate) fn assign_avatar(&mut self, avatar: String) {
        self.avatar = Some(avatar);
    }

    pub(crate) fn assign_traits(&mut self, traits: Vec<String>) {
        self.traits = traits;
    }

    pub(crate) fn set_version(&mut self, version: u64) {
        self.version = version;
    }
}
