//! Earnings sources

use rand::Rng;

use crate::traits::EarningsSource;

/// Upper bound (inclusive) of gross earnings per performance
pub const MAX_GROSS_EARNINGS: i64 = 500;

/// Uniformly distributed gross earnings in `[0, max]`
#[derive(Debug, Clone, Copy)]
pub struct UniformEarnings {
    max: i64,
}

impl UniformEarnings {
    pub fn new(max: i64) -> Self {
        Self { max: max.max(0) }
    }
}

impl Default for UniformEarnings {
    fn default() -> Self {
        Self::new(MAX_GROSS_EARNINGS)
    }
}

impl EarningsSource for UniformEarnings {
    fn gross_earnings(&self) -> i64 {
        rand::thread_rng().gen_range(0..=self.max)
    }
}

/// Always returns the same gross earnings
#[derive(Debug, Clone, Copy)]
pub struct FixedEarnings(pub i64);

impl EarningsSource for FixedEarnings {
    fn gross_earnings(&self) -> i64 {
        self.0
    }
}
