//! Relationship update orchestration

use crate::metrics::{EngineMetrics, MetricsSnapshot};
use crate::notifier::Notifier;
use crate::propagator::StatusPropagator;
use crate::report::UpdateOutcome;
use crate::request::UpdateRequest;
use crate::validator::PartnerValidator;
use crate::{EngineConfig, EngineError};
use entwine_domain::traits::{Messenger, NoFallback, RecordSource, RecordStore};
use entwine_domain::{ProfilePatch, RelationshipFields};

/// Error text shown to callers for anything that is not a validation failure
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred";

/// The caller-facing result shape
///
/// UI code only ever sees a boolean plus an optional message; the
/// structured outcome rides along for logging and diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateResponse {
    /// Whether the update counts as successful for the caller
    pub success: bool,

    /// Error message, present only on failure
    pub error: Option<String>,

    /// Structured outcome, present only on success
    pub outcome: Option<UpdateOutcome>,
}

/// Orchestrates one relationship status update end to end
///
/// Sequence: validate partner ids → snapshot the caller's pre-write
/// facet state → write the caller's own record → propagate to affected
/// partners. Aborting is only possible during validation; after the
/// first write the operation always runs to completion, recording
/// rather than raising partner-side failures.
///
/// # Examples
///
/// ```no_run
/// use entwine_domain::{Facet, UserId};
/// use entwine_engine::{EngineConfig, RelationshipEngine, UpdateRequest};
/// use entwine_store::{MemoryDirectory, MemoryMailbox, SeedDirectory};
///
/// # #[tokio::main]
/// # async fn main() {
/// let engine = RelationshipEngine::with_fallback(
///     MemoryDirectory::new(),
///     MemoryMailbox::new(),
///     SeedDirectory::with_demo_profiles(),
///     EngineConfig::default(),
/// );
/// let response = engine.handle(UpdateRequest::single(UserId::new("alice"), Facet::Public)).await;
/// # let _ = response;
/// # }
/// ```
pub struct RelationshipEngine<S, M, F = NoFallback> {
    store: S,
    notifier: Notifier<M>,
    fallback: Option<F>,
    config: EngineConfig,
    metrics: EngineMetrics,
}

impl<S, M> RelationshipEngine<S, M, NoFallback>
where
    S: RecordStore,
    M: Messenger,
{
    /// Create an engine that validates against the primary store only
    pub fn new(store: S, messenger: M, config: EngineConfig) -> Self {
        Self {
            store,
            notifier: Notifier::new(messenger, &config),
            fallback: None,
            config,
            metrics: EngineMetrics::new(),
        }
    }
}

impl<S, M, F> RelationshipEngine<S, M, F>
where
    S: RecordStore,
    M: Messenger,
    F: RecordSource,
{
    /// Create an engine with a secondary known-good dataset consulted
    /// when a partner id does not resolve in the primary store
    pub fn with_fallback(store: S, messenger: M, fallback: F, config: EngineConfig) -> Self {
        Self {
            store,
            notifier: Notifier::new(messenger, &config),
            fallback: Some(fallback),
            config,
            metrics: EngineMetrics::new(),
        }
    }

    /// Point-in-time copy of the engine counters
    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    /// The primary record store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The underlying messenger
    pub fn messenger(&self) -> &M {
        self.notifier.messenger()
    }

    /// Update one user's relationship status and propagate the change
    ///
    /// The only outright failure is [`EngineError::PartnerNotFound`],
    /// raised before any write. A failed self-update write is tolerated
    /// by default (logged, `self_update_applied` false in the outcome);
    /// partner-side failures are always swallowed into the report.
    pub async fn update_relationship_status(
        &self,
        request: UpdateRequest,
    ) -> Result<UpdateOutcome, EngineError> {
        self.metrics.record_attempt();
        let targets = request.target_partners();

        // Validating: every target id must resolve somewhere, or nothing
        // at all is written
        let validator = PartnerValidator::new(&self.store, self.fallback.as_ref());
        if let Some(missing) = validator.missing_partner(&targets).await {
            self.metrics.record_validation_failure();
            tracing::info!(
                user = %request.user_id,
                partner = %missing,
                "update aborted: partner not found"
            );
            return Err(EngineError::PartnerNotFound(missing));
        }

        // Snapshot the facet state the self-update is about to overwrite;
        // the propagator diffs the new target set against it
        let previous = match self.store.fetch(&request.user_id).await {
            Ok(Some(record)) => record.facet(request.facet).clone(),
            Ok(None) => RelationshipFields::default(),
            Err(e) => {
                tracing::warn!(
                    user = %request.user_id,
                    error = %e,
                    "could not snapshot previous state, assuming no prior partners"
                );
                RelationshipFields::default()
            }
        };

        // Updating Self
        let patch = ProfilePatch::self_update(
            request.status,
            request.partner_id.clone(),
            &request.partner_ids,
            request.facet,
            request.looking_for.clone(),
        );
        let mut self_update_applied = true;
        if let Err(e) = self.store.apply(&request.user_id, &patch).await {
            self.metrics.record_self_write_failure();
            tracing::error!(user = %request.user_id, error = %e, "self update write failed");
            if !self.config.tolerate_self_write_failure {
                return Err(EngineError::SelfUpdateFailed(e.to_string()));
            }
            self_update_applied = false;
        }

        // Propagating: best-effort fan-out, never surfaced to the caller
        let propagator = StatusPropagator::new(
            &self.store,
            &self.notifier,
            &request.user_id,
            request.status,
            request.facet,
        );
        let report = propagator.propagate(&previous, &targets).await;
        self.metrics.absorb_report(&report);
        self.metrics.record_completed();

        Ok(UpdateOutcome {
            self_update_applied,
            report,
        })
    }

    /// UI-facing wrapper around [`Self::update_relationship_status`]
    ///
    /// Callers only ever observe success, a partner-not-found message,
    /// or the generic unexpected-error text.
    pub async fn handle(&self, request: UpdateRequest) -> UpdateResponse {
        match self.update_relationship_status(request).await {
            Ok(outcome) => UpdateResponse {
                success: true,
                error: None,
                outcome: Some(outcome),
            },
            Err(e @ EngineError::PartnerNotFound(_)) => UpdateResponse {
                success: false,
                error: Some(e.to_string()),
                outcome: None,
            },
            Err(e) => {
                tracing::error!(error = %e, "relationship update failed");
                UpdateResponse {
                    success: false,
                    error: Some(UNEXPECTED_ERROR.to_string()),
                    outcome: None,
                }
            }
        }
    }
}
