//! Error types for relationship update operations

use entwine_domain::UserId;
use thiserror::Error;

/// Errors a relationship update can surface to the caller
///
/// Per-partner propagation failures are never errors; they are logged
/// and collected in the propagation report instead.
#[derive(Error, Debug)]
pub enum EngineError {
    /// A requested partner id resolves in neither the primary store nor
    /// the fallback dataset; the update aborts before any write
    #[error("Partner not found: {0}")]
    PartnerNotFound(UserId),

    /// The caller's own record write failed and the engine is configured
    /// not to tolerate it (see `EngineConfig::tolerate_self_write_failure`)
    #[error("Self update write failed: {0}")]
    SelfUpdateFailed(String),
}
