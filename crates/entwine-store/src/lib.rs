//! Entwine Storage Layer
//!
//! Concrete implementations of the domain's `RecordSource`, `RecordStore`
//! and `Messenger` traits:
//!
//! - [`MemoryDirectory`]: in-memory primary store, used by tests and demo
//!   wiring
//! - [`SqliteDirectory`]: SQLite-backed primary store (one row per user,
//!   per-facet columns, partner lists as JSON)
//! - [`SeedDirectory`]: read-only fixture dataset used as the validation
//!   fallback when the primary store is unreliable or unseeded
//! - [`MemoryMailbox`]: messenger that records sent messages in memory
//!
//! # Examples
//!
//! ```no_run
//! use entwine_store::SqliteDirectory;
//!
//! let store = SqliteDirectory::in_memory().unwrap();
//! // Directory is now ready for record operations
//! ```

#![warn(missing_docs)]

use entwine_domain::UserId;
use thiserror::Error;

pub mod mailbox;
pub mod memory;
pub mod seed;
pub mod sqlite;

pub use mailbox::{MemoryMailbox, Message};
pub use memory::MemoryDirectory;
pub use seed::SeedDirectory;
pub use sqlite::SqliteDirectory;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// No record exists for the given user id
    #[error("Record not found: {0}")]
    NotFound(UserId),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A stored value could not be decoded
    #[error("Invalid stored data: {0}")]
    Encoding(String),

    /// Internal invariant failure (e.g. a poisoned connection lock)
    #[error("Internal store error: {0}")]
    Internal(String),
}
