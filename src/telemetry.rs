//! Token counters.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Default)]
pub struct Metrics {
    pub tokens_issued: AtomicU64,
    pub tokens_verified: AtomicU64,
    pub tokens_rejected: AtomicU64,
    pub signing_failures: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_issue(&self) {
        self.tokens_issued.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_verify(&self) {
        self.tokens_verified.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_reject(&self) {
        self.tokens_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_signing_failure(&self) {
        self.signing_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            tokens_issued: self.tokens_issued.load(Ordering::Relaxed),
            tokens_verified: self.tokens_verified.load(Ordering::Relaxed),
            tokens_rejected: self.tokens_rejected.load(Ordering::Relaxed),
            signing_failures: self.signing_failures.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub tokens_issued: u64,
    pub tokens_verified: u64,
    pub tokens_rejected: u64,
    pub signing_failures: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_metrics_start_at_zero() {
        let s = Metrics::new().snapshot();
        assert_eq!(s.tokens_issued, 0);
        assert_eq!(s.tokens_rejected, 0);
        assert_eq!(s.signing_failures, 0);
    }

    #[test]
    fn record_issue_increments() {
        let m = Metrics::new();
        m.record_issue();
        m.record_issue();
        assert_eq!(m.snapshot().tokens_issued, 2);
    }

    #[test]
    fn record_reject_increments() {
        let m = Metrics::new();
        m.record_reject();
        assert_eq!(m.snapshot().tokens_rejected, 1);
        assert_eq!(m.snapshot().tokens_verified, 0);
    }
}
