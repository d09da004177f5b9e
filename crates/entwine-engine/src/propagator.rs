//! Partner status propagation
//!
//! The algorithmic core of the engine. After the caller's own record is
//! rewritten, every affected partner record must be brought back into a
//! consistent state: partners dropped by the update are demoted to
//! Single, partners kept or added get the caller's new status mirrored
//! onto them. Both loops are sequential, best-effort fan-outs - one
//! partner's failure never aborts the siblings.

use crate::notifier::Notifier;
use crate::report::{PropagationReport, SideEffectStage};
use entwine_domain::traits::{Messenger, RecordStore};
use entwine_domain::{Facet, MaritalStatus, ProfilePatch, RelationshipFields, UserId};

/// Partners referenced before the update but absent from the new target set
///
/// Pure set difference over the previous facet's deduplicated partner
/// union. An id can never appear in both this set and `current`, so the
/// demotion and confirmation loops are disjoint by construction.
pub fn removed_partners(previous: &RelationshipFields, current: &[UserId]) -> Vec<UserId> {
    previous
        .linked_partners()
        .into_iter()
        .filter(|id| !current.contains(id))
        .collect()
}

/// Executes the per-partner fan-out for one update
pub(crate) struct StatusPropagator<'a, S, M> {
    store: &'a S,
    notifier: &'a Notifier<M>,
    caller: &'a UserId,
    status: MaritalStatus,
    facet: Facet,
}

impl<'a, S, M> StatusPropagator<'a, S, M>
where
    S: RecordStore,
    M: Messenger,
{
    pub fn new(
        store: &'a S,
        notifier: &'a Notifier<M>,
        caller: &'a UserId,
        status: MaritalStatus,
        facet: Facet,
    ) -> Self {
        Self {
            store,
            notifier,
            caller,
            status,
            facet,
        }
    }

    /// Run both fan-out loops and report what happened
    ///
    /// `previous` is the caller's facet state captured *before* the
    /// self-update write; `current` is the new target partner set.
    pub async fn propagate(
        &self,
        previous: &RelationshipFields,
        current: &[UserId],
    ) -> PropagationReport {
        let mut report = PropagationReport::default();

        for partner in removed_partners(previous, current) {
            self.demote(&partner, &mut report).await;
        }

        if !current.is_empty() && !self.status.is_single() {
            for partner in current {
                self.confirm(partner, &mut report).await;
            }
        }

        report
    }

    /// Reset a removed partner to Single and tell them about it
    async fn demote(&self, partner: &UserId, report: &mut PropagationReport) {
        match self.store.apply(partner, &ProfilePatch::demote(self.facet)).await {
            Ok(()) => {
                tracing::info!(
                    caller = %self.caller,
                    partner = %partner,
                    facet = self.facet.as_str(),
                    "removed partner demoted to single"
                );
                report.demoted.push(partner.clone());
                let body = self.notifier.demotion_text(self.caller, self.facet);
                self.send(partner, &body, report).await;
            }
            Err(e) => {
                tracing::warn!(
                    caller = %self.caller,
                    partner = %partner,
                    error = %e,
                    "failed to demote removed partner"
                );
                report.record_failure(partner.clone(), SideEffectStage::Write, e.to_string());
            }
        }
    }

    /// Mirror the caller's new status onto a current partner
    async fn confirm(&self, partner: &UserId, report: &mut PropagationReport) {
        let record = match self.store.fetch(partner).await {
            Ok(Some(record)) => record,
            Ok(None) => {
                // Validated moments ago; the record vanished underneath us
                tracing::warn!(caller = %self.caller, partner = %partner, "partner record missing");
                report.record_failure(partner.clone(), SideEffectStage::Read, "record missing");
                return;
            }
            Err(e) => {
                tracing::warn!(caller = %self.caller, partner = %partner, error = %e, "failed to read partner record");
                report.record_failure(partner.clone(), SideEffectStage::Read, e.to_string());
                return;
            }
        };

        let patch = self.mirror_patch(record.facet(self.facet));
        match self.store.apply(partner, &patch).await {
            Ok(()) => {
                tracing::info!(
                    caller = %self.caller,
                    partner = %partner,
                    facet = self.facet.as_str(),
                    status = self.status.as_str(),
                    "partner status mirrored"
                );
                report.confirmed.push(partner.clone());
                let body = self.notifier.link_text(self.caller, self.facet, self.status);
                self.send(partner, &body, report).await;
            }
            Err(e) => {
                tracing::warn!(caller = %self.caller, partner = %partner, error = %e, "failed to update partner record");
                report.record_failure(partner.clone(), SideEffectStage::Write, e.to_string());
            }
        }
    }

    /// Compute the patch that makes a partner's facet mirror the caller
    ///
    /// Polyamorous: the caller joins the partner's set without
    /// duplication, and claims the single-partner reference only if it
    /// is currently unset (first-claim - an existing reference is never
    /// overwritten). Exclusive: the partner's reference becomes the
    /// caller and their set is cleared.
    fn mirror_patch(&self, fields: &RelationshipFields) -> ProfilePatch {
        if self.status.is_polyamorous() {
            let mut partners = fields.partners.clone();
            if !partners.contains(self.caller) {
                partners.push(self.caller.clone());
            }
            let partner = fields.partner.clone().or_else(|| Some(self.caller.clone()));
            ProfilePatch {
                facet: self.facet,
                status: self.status,
                partner,
                partners,
                looking_for: None,
            }
        } else {
            ProfilePatch {
                facet: self.facet,
                status: self.status,
                partner: Some(self.caller.clone()),
                partners: Vec::new(),
                looking_for: None,
            }
        }
    }

    async fn send(&self, to: &UserId, body: &str, report: &mut PropagationReport) {
        if !self.notifier.is_enabled() {
            return;
        }
        if self.notifier.dispatch(self.caller, to, body).await {
            report.notified.push(to.clone());
        } else {
            report.record_failure(to.clone(), SideEffectStage::Notify, "dispatch failed");
        }
    }
}
