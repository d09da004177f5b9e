//! Read-only seed/fixture fallback dataset

use entwine_domain::traits::RecordSource;
use entwine_domain::{ProfileRecord, UserId};
use async_trait::async_trait;
use std::collections::HashMap;

/// A read-only set of known-good profile records
///
/// Used as the secondary lookup during partner validation: when the
/// primary store is unseeded or unreliable, an id that resolves here is
/// still accepted. The seed never receives writes; propagation against a
/// seed-only partner fails at the primary store and is reported
/// best-effort.
#[derive(Debug, Clone, Default)]
pub struct SeedDirectory {
    records: HashMap<UserId, ProfileRecord>,
}

impl SeedDirectory {
    /// Build a seed set from the given records
    pub fn new(records: impl IntoIterator<Item = ProfileRecord>) -> Self {
        Self {
            records: records
                .into_iter()
                .map(|record| (record.id.clone(), record))
                .collect(),
        }
    }

    /// A small demo fixture set for environments without a seeded primary
    pub fn with_demo_profiles() -> Self {
        Self::new([
            ProfileRecord::new("demo-ana"),
            ProfileRecord::new("demo-ben"),
            ProfileRecord::new("demo-cleo"),
        ])
    }

    /// Whether the seed contains a record for the given id
    pub fn contains(&self, id: &UserId) -> bool {
        self.records.contains_key(id)
    }

    /// Number of seeded records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the seed set is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl RecordSource for SeedDirectory {
    type Error = std::convert::Infallible;

    async fn fetch(&self, id: &UserId) -> Result<Option<ProfileRecord>, Self::Error> {
        Ok(self.records.get(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seed_lookup() {
        let seed = SeedDirectory::with_demo_profiles();
        assert_eq!(seed.len(), 3);
        assert!(seed.contains(&UserId::new("demo-ana")));

        let found = seed.fetch(&UserId::new("demo-ben")).await.unwrap();
        assert!(found.is_some());
        let missing = seed.fetch(&UserId::new("nobody")).await.unwrap();
        assert!(missing.is_none());
    }
}
