//! Partner existence validation

use entwine_domain::traits::RecordSource;
use entwine_domain::UserId;

/// Confirms candidate partner ids resolve to real records before any
/// write proceeds
///
/// Lookup policy: primary first, then the fallback dataset, else fail.
/// A primary read *error* also falls through to the fallback - the
/// fallback exists precisely because the primary store may be unseeded
/// or unreliable - and is logged at warn.
pub struct PartnerValidator<'a, S, F> {
    primary: &'a S,
    fallback: Option<&'a F>,
}

impl<'a, S, F> PartnerValidator<'a, S, F>
where
    S: RecordSource,
    F: RecordSource,
{
    /// Create a validator over a primary source and an optional fallback
    pub fn new(primary: &'a S, fallback: Option<&'a F>) -> Self {
        Self { primary, fallback }
    }

    /// Whether the candidate id resolves in the primary or fallback source
    pub async fn exists(&self, id: &UserId) -> bool {
        match self.primary.fetch(id).await {
            Ok(Some(_)) => return true,
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(partner = %id, error = %e, "primary lookup failed, trying fallback");
            }
        }

        if let Some(fallback) = self.fallback {
            match fallback.fetch(id).await {
                Ok(Some(_)) => return true,
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!(partner = %id, error = %e, "fallback lookup failed");
                }
            }
        }

        false
    }

    /// First candidate id that resolves nowhere, if any
    ///
    /// Short-circuits: ids after the first failure are not looked up.
    pub async fn missing_partner(&self, ids: &[UserId]) -> Option<UserId> {
        for id in ids {
            if !self.exists(id).await {
                return Some(id.clone());
            }
        }
        None
    }

    /// Whether every candidate id resolves
    pub async fn all_exist(&self, ids: &[UserId]) -> bool {
        self.missing_partner(ids).await.is_none()
    }
}
