//! Entwine Domain Layer
//!
//! This crate contains the core domain model for Entwine's relationship
//! status consistency engine. It defines the fundamental concepts, value
//! objects, and trait interfaces that the store and engine layers depend
//! upon.
//!
//! ## Key Concepts
//!
//! - **Facet**: one of two independent relationship-state slots per user
//!   (public or private) which never cross-influence each other
//! - **RelationshipFields**: one facet's state - marital status, a single
//!   partner reference, and a partner set
//! - **ProfilePatch**: the partial-update payload written to exactly one
//!   facet of a record
//! - **Edge**: a logical link between two users, stored redundantly as
//!   partner references on both endpoint records rather than as its own
//!   entity
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture:
//! - Pure domain logic only
//! - Infrastructure implementations live in other crates
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod facet;
pub mod patch;
pub mod record;
pub mod status;
pub mod traits;
pub mod user;

// Re-exports for convenience
pub use facet::Facet;
pub use patch::ProfilePatch;
pub use record::{ProfileRecord, RelationshipFields};
pub use status::MaritalStatus;
pub use user::UserId;
