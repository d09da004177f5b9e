//! Entwine Relationship Engine
//!
//! Keeps each user's marital status and linked-partner references
//! mutually consistent across records, for two independent profile
//! facets, and notifies affected partners.
//!
//! A relationship edge is stored redundantly as attributes on both
//! endpoint records. Every update re-derives a consistent edge set for
//! the caller, evicts stale edges from former partners, and mirrors the
//! new state onto current partners. There is no cross-record
//! transaction: partner writes are a sequential best-effort fan-out, and
//! every swallowed failure is logged and surfaced in the structured
//! [`PropagationReport`].
//!
//! # Examples
//!
//! ```no_run
//! use entwine_domain::{Facet, MaritalStatus, UserId};
//! use entwine_engine::{EngineConfig, RelationshipEngine, UpdateRequest};
//! use entwine_store::{MemoryDirectory, MemoryMailbox};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let engine = RelationshipEngine::new(
//!     MemoryDirectory::new(),
//!     MemoryMailbox::new(),
//!     EngineConfig::default(),
//! );
//!
//! let request = UpdateRequest::exclusive(
//!     UserId::new("alice"),
//!     MaritalStatus::Married,
//!     UserId::new("bob"),
//!     Facet::Public,
//! );
//! let response = engine.handle(request).await;
//! # let _ = response;
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod engine;
pub mod error;
pub mod metrics;
pub mod notifier;
pub mod propagator;
pub mod report;
pub mod request;
pub mod validator;

// Re-exports for convenience
pub use config::EngineConfig;
pub use engine::{RelationshipEngine, UpdateResponse, UNEXPECTED_ERROR};
pub use error::EngineError;
pub use metrics::{EngineMetrics, MetricsSnapshot};
pub use notifier::Notifier;
pub use report::{PropagationReport, SideEffectFailure, SideEffectStage, UpdateOutcome};
pub use request::UpdateRequest;
pub use validator::PartnerValidator;
