//! Structured side-effect reporting
//!
//! The caller-visible contract of an update is a boolean, but operators
//! need to see which side effects actually happened. Every propagation
//! run produces a report listing the partners demoted, confirmed and
//! notified, plus every swallowed failure.

use entwine_domain::UserId;

/// Which step of the per-partner fan-out failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideEffectStage {
    /// Reading the partner's current record
    Read,

    /// Writing the partner's patched record
    Write,

    /// Dispatching the notification message
    Notify,
}

impl SideEffectStage {
    /// Get the stage name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            SideEffectStage::Read => "read",
            SideEffectStage::Write => "write",
            SideEffectStage::Notify => "notify",
        }
    }
}

/// One swallowed per-partner failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SideEffectFailure {
    /// The partner whose side effect failed
    pub partner: UserId,

    /// The step that failed
    pub stage: SideEffectStage,

    /// Failure detail, as logged
    pub detail: String,
}

/// What the propagation fan-out actually did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropagationReport {
    /// Former partners reset to Single
    pub demoted: Vec<UserId>,

    /// Current partners whose records now mirror the caller's status
    pub confirmed: Vec<UserId>,

    /// Partners that received a notification
    pub notified: Vec<UserId>,

    /// Swallowed failures, one per partner and stage
    pub failures: Vec<SideEffectFailure>,
}

impl PropagationReport {
    /// Whether every side effect succeeded
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Failures at a given stage
    pub fn failures_at(&self, stage: SideEffectStage) -> impl Iterator<Item = &SideEffectFailure> {
        self.failures.iter().filter(move |f| f.stage == stage)
    }

    pub(crate) fn record_failure(
        &mut self,
        partner: UserId,
        stage: SideEffectStage,
        detail: impl Into<String>,
    ) {
        self.failures.push(SideEffectFailure {
            partner,
            stage,
            detail: detail.into(),
        });
    }
}

/// The result of one relationship status update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOutcome {
    /// Whether the caller's own record write went through
    ///
    /// False only under the tolerate-self-write-failure policy; the
    /// update still counts as successful for the caller.
    pub self_update_applied: bool,

    /// What happened to each affected partner
    pub report: PropagationReport,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_is_clean() {
        let report = PropagationReport::default();
        assert!(report.is_clean());
        assert!(report.demoted.is_empty());
    }

    #[test]
    fn test_failures_at_filters_by_stage() {
        let mut report = PropagationReport::default();
        report.record_failure(UserId::new("bob"), SideEffectStage::Write, "down");
        report.record_failure(UserId::new("carol"), SideEffectStage::Notify, "down");

        assert!(!report.is_clean());
        assert_eq!(report.failures_at(SideEffectStage::Write).count(), 1);
        assert_eq!(report.failures_at(SideEffectStage::Notify).count(), 1);
        assert_eq!(report.failures_at(SideEffectStage::Read).count(), 0);
    }
}
