//! In-memory profile directory

use crate::StoreError;
use entwine_domain::traits::{RecordSource, RecordStore};
use entwine_domain::{ProfilePatch, ProfileRecord, UserId};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-memory implementation of the profile directory
///
/// Backs tests and demo wiring. Patch semantics are shared with every
/// other store through [`ProfilePatch::apply_to`], so behaviour matches
/// the SQLite directory exactly.
#[derive(Debug, Default)]
pub struct MemoryDirectory {
    records: RwLock<HashMap<UserId, ProfileRecord>>,
}

impl MemoryDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a record
    pub async fn insert(&self, record: ProfileRecord) {
        self.records.write().await.insert(record.id.clone(), record);
    }

    /// Fetch a record clone without going through the trait
    pub async fn get(&self, id: &UserId) -> Option<ProfileRecord> {
        self.records.read().await.get(id).cloned()
    }

    /// Number of records currently held
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the directory holds no records
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl RecordSource for MemoryDirectory {
    type Error = StoreError;

    async fn fetch(&self, id: &UserId) -> Result<Option<ProfileRecord>, Self::Error> {
        Ok(self.records.read().await.get(id).cloned())
    }
}

#[async_trait]
impl RecordStore for MemoryDirectory {
    async fn apply(&self, id: &UserId, patch: &ProfilePatch) -> Result<(), Self::Error> {
        let mut records = self.records.write().await;
        let record = records
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        patch.apply_to(record);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entwine_domain::{Facet, MaritalStatus};

    #[tokio::test]
    async fn test_insert_and_fetch() {
        let directory = MemoryDirectory::new();
        directory.insert(ProfileRecord::new("alice")).await;

        let record = directory.fetch(&UserId::new("alice")).await.unwrap();
        assert!(record.is_some());
        assert!(directory.fetch(&UserId::new("bob")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_apply_patch() {
        let directory = MemoryDirectory::new();
        directory.insert(ProfileRecord::new("alice")).await;

        let patch = ProfilePatch::self_update(
            MaritalStatus::Married,
            Some(UserId::new("bob")),
            &[],
            Facet::Public,
            None,
        );
        directory.apply(&UserId::new("alice"), &patch).await.unwrap();

        let record = directory.get(&UserId::new("alice")).await.unwrap();
        assert_eq!(record.public.status, MaritalStatus::Married);
        assert_eq!(record.public.partner, Some(UserId::new("bob")));
        assert_eq!(record.private.status, MaritalStatus::Single);
    }

    #[tokio::test]
    async fn test_apply_to_missing_record_fails() {
        let directory = MemoryDirectory::new();
        let patch = ProfilePatch::demote(Facet::Public);
        let result = directory.apply(&UserId::new("ghost"), &patch).await;
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }
}
