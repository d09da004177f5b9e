//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and
//! infrastructure. Concrete implementations live in other crates; the
//! engine is generic over them and tests substitute mocks.

use crate::{ProfilePatch, ProfileRecord, UserId};
use async_trait::async_trait;

/// Read access to user relationship records
///
/// Implemented by the infrastructure layer (entwine-store) for both the
/// primary store and any read-only fallback dataset.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Error type for source operations
    type Error: std::fmt::Display + Send;

    /// Fetch a record by user id; Ok(None) when no such record exists
    async fn fetch(&self, id: &UserId) -> Result<Option<ProfileRecord>, Self::Error>;
}

/// Read/write access to user relationship records
///
/// Writes are partial updates scoped to a single facet. Writing to a
/// missing record is an error; record creation is outside the engine's
/// responsibility.
#[async_trait]
pub trait RecordStore: RecordSource {
    /// Apply a partial update to an existing record
    async fn apply(&self, id: &UserId, patch: &ProfilePatch) -> Result<(), Self::Error>;
}

/// Outbound user-to-user messaging
///
/// Fire-and-forget from the engine's perspective; delivery semantics
/// belong to the messaging subsystem.
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Error type for messaging operations
    type Error: std::fmt::Display + Send;

    /// Send an informational message from one user to another
    async fn send(&self, from: &UserId, to: &UserId, body: &str) -> Result<(), Self::Error>;
}

/// A fallback source that never resolves anything
///
/// The default fallback type parameter of the engine: validation consults
/// only the primary store unless a real fallback dataset is wired in.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFallback;

#[async_trait]
impl RecordSource for NoFallback {
    type Error = std::convert::Infallible;

    async fn fetch(&self, _id: &UserId) -> Result<Option<ProfileRecord>, Self::Error> {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_no_fallback_never_resolves() {
        let source = NoFallback;
        let found = source.fetch(&UserId::new("anyone")).await.unwrap();
        assert!(found.is_none());
    }
}
