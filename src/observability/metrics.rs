//! Validation counters
//!
//! - Counters only
//! - Monotonic increase
//! - Thread-safe but lock-free

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters for one validation run.
///
/// Uses Relaxed ordering; values are only read once the run is over.
#[derive(Debug, Default)]
pub struct ValidationMetrics {
    records_checked: AtomicU64,
    records_accepted: AtomicU64,
    records_rejected: AtomicU64,
    issues_reported: AtomicU64,
}

impl ValidationMetrics {
    /// Create a registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Count an accepted record
    pub fn record_accepted(&self) {
        self.records_checked.fetch_add(1, Ordering::Relaxed);
        self.records_accepted.fetch_add(1, Ordering::Relaxed);
    }

    /// Count a rejected record and its issues
    pub fn record_rejected(&self, issues: usize) {
        self.records_checked.fetch_add(1, Ordering::Relaxed);
        self.records_rejected.fetch_add(1, Ordering::Relaxed);
        self.issues_reported.fetch_add(issues as u64, Ordering::Relaxed);
    }

    /// Take a point-in-time snapshot of all counters
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            records_checked: self.records_checked.load(Ordering::Relaxed),
            records_accepted: self.records_accepted.load(Ordering::Relaxed),
            records_rejected: self.records_rejected.load(Ordering::Relaxed),
            issues_reported: self.issues_reported.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of the counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub records_checked: u64,
    pub records_accepted: u64,
    pub records_rejected: u64,
    pub issues_reported: u64,
}

impl MetricsSnapshot {
    /// True when at least one record was rejected
    pub fn has_rejections(&self) -> bool {
        self.records_rejected > 0
    }
}
