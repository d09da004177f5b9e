//! Metrics collection for relationship updates

use crate::report::{PropagationReport, SideEffectStage};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counters collected across relationship updates
///
/// Lock-free atomics so a shared engine can record from concurrent
/// requests. `snapshot()` yields a plain copy for reporting.
#[derive(Debug, Default)]
pub struct EngineMetrics {
    attempts: AtomicU64,
    completed: AtomicU64,
    validation_failures: AtomicU64,
    self_write_failures: AtomicU64,
    partners_demoted: AtomicU64,
    partners_confirmed: AtomicU64,
    partner_failures: AtomicU64,
    notifications_sent: AtomicU64,
    notification_failures: AtomicU64,
}

impl EngineMetrics {
    /// Create new zeroed metrics
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_attempt(&self) {
        self.attempts.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_completed(&self) {
        self.completed.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_validation_failure(&self) {
        self.validation_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_self_write_failure(&self) {
        self.self_write_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Fold one propagation report into the counters
    pub(crate) fn absorb_report(&self, report: &PropagationReport) {
        self.partners_demoted
            .fetch_add(report.demoted.len() as u64, Ordering::Relaxed);
        self.partners_confirmed
            .fetch_add(report.confirmed.len() as u64, Ordering::Relaxed);
        self.notifications_sent
            .fetch_add(report.notified.len() as u64, Ordering::Relaxed);

        let notify_failures = report.failures_at(SideEffectStage::Notify).count() as u64;
        self.notification_failures
            .fetch_add(notify_failures, Ordering::Relaxed);
        self.partner_failures.fetch_add(
            report.failures.len() as u64 - notify_failures,
            Ordering::Relaxed,
        );
    }

    /// Reset all counters
    pub fn reset(&self) {
        self.attempts.store(0, Ordering::Relaxed);
        self.completed.store(0, Ordering::Relaxed);
        self.validation_failures.store(0, Ordering::Relaxed);
        self.self_write_failures.store(0, Ordering::Relaxed);
        self.partners_demoted.store(0, Ordering::Relaxed);
        self.partners_confirmed.store(0, Ordering::Relaxed);
        self.partner_failures.store(0, Ordering::Relaxed);
        self.notifications_sent.store(0, Ordering::Relaxed);
        self.notification_failures.store(0, Ordering::Relaxed);
    }

    /// Take a point-in-time copy of the counters
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            attempts: self.attempts.load(Ordering::Relaxed),
            completed: self.completed.load(Ordering::Relaxed),
            validation_failures: self.validation_failures.load(Ordering::Relaxed),
            self_write_failures: self.self_write_failures.load(Ordering::Relaxed),
            partners_demoted: self.partners_demoted.load(Ordering::Relaxed),
            partners_confirmed: self.partners_confirmed.load(Ordering::Relaxed),
            partner_failures: self.partner_failures.load(Ordering::Relaxed),
            notifications_sent: self.notifications_sent.load(Ordering::Relaxed),
            notification_failures: self.notification_failures.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of the engine counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    /// Updates started
    pub attempts: u64,

    /// Updates that ran to completion (including tolerated degradations)
    pub completed: u64,

    /// Updates aborted because a partner did not exist
    pub validation_failures: u64,

    /// Tolerated failures writing the caller's own record
    pub self_write_failures: u64,

    /// Former partners reset to Single
    pub partners_demoted: u64,

    /// Partners whose records were updated to mirror a caller
    pub partners_confirmed: u64,

    /// Swallowed partner read/write failures
    pub partner_failures: u64,

    /// Notifications delivered
    pub notifications_sent: u64,

    /// Notifications that failed to send
    pub notification_failures: u64,
}

impl MetricsSnapshot {
    /// Generate a summary report of the counters
    pub fn summary(&self) -> String {
        [
            "Relationship Engine Metrics".to_string(),
            "===========================".to_string(),
            format!("Updates: {} attempted, {} completed", self.attempts, self.completed),
            format!("Validation failures: {}", self.validation_failures),
            format!("Tolerated self-write failures: {}", self.self_write_failures),
            format!(
                "Partners: {} demoted, {} confirmed, {} failed",
                self.partners_demoted, self.partners_confirmed, self.partner_failures
            ),
            format!(
                "Notifications: {} sent, {} failed",
                self.notifications_sent, self.notification_failures
            ),
        ]
        .join("\n")
    }
}
