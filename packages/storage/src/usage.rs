// ABOUTME: API usage counter surfaced at /api/api-usage
// ABOUTME: Explicitly owned state, injected where needed rather than a global

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Default monthly call allowance for the external prices API.
pub const DEFAULT_MONTHLY_LIMIT: u64 = 1000;

/// Counts outbound calls against a monthly allowance.
#[derive(Debug)]
pub struct ApiUsage {
    calls_made: AtomicU64,
    monthly_limit: u64,
}

/// Point-in-time view of the counter.
#[derive(Debug, Clone, Serialize)]
pub struct ApiUsageSnapshot {
    pub calls_made: u64,
    pub monthly_limit: u64,
    pub remaining: u64,
    pub percentage_used: f64,
}

impl ApiUsage {
    pub fn new(monthly_limit: u64) -> Self {
        ApiUsage {
            calls_made: AtomicU64::new(0),
            monthly_limit,
        }
    }

    pub fn record_call(&self) {
        self.calls_made.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> ApiUsageSnapshot {
        let calls_made = self.calls_made.load(Ordering::Relaxed);
        let percentage = if self.monthly_limit > 0 {
            (calls_made as f64 / self.monthly_limit as f64) * 100.0
        } else {
            0.0
        };

        ApiUsageSnapshot {
            calls_made,
            monthly_limit: self.monthly_limit,
            remaining: self.monthly_limit.saturating_sub(calls_made),
            percentage_used: (percentage * 10.0).round() / 10.0,
        }
    }
}

impl Default for ApiUsage {
    fn default() -> Self {
        Self::new(DEFAULT_MONTHLY_LIMIT)
    }
}
