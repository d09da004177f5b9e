//! Relationship update request

use entwine_domain::{Facet, MaritalStatus, UserId};

/// Parameters of one relationship status update
///
/// `partner_id` is used for exclusive coupled statuses, `partner_ids`
/// for polyamorous; the other is ignored. `looking_for` replaces the
/// caller's tag list when present and is facet-independent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateRequest {
    /// The user whose status is being updated
    pub user_id: UserId,

    /// The desired new status
    pub status: MaritalStatus,

    /// Desired single partner (exclusive coupled statuses)
    pub partner_id: Option<UserId>,

    /// Desired partner set (polyamorous status)
    pub partner_ids: Vec<UserId>,

    /// Which facet to update
    pub facet: Facet,

    /// Replacement tag list, when provided
    pub looking_for: Option<Vec<String>>,
}

impl UpdateRequest {
    /// Request to become Single on the given facet
    pub fn single(user_id: impl Into<UserId>, facet: Facet) -> Self {
        Self {
            user_id: user_id.into(),
            status: MaritalStatus::Single,
            partner_id: None,
            partner_ids: Vec::new(),
            facet,
            looking_for: None,
        }
    }

    /// Request an exclusive coupled status with one partner
    pub fn exclusive(
        user_id: impl Into<UserId>,
        status: MaritalStatus,
        partner: impl Into<UserId>,
        facet: Facet,
    ) -> Self {
        debug_assert!(status.is_exclusive(), "use single() or polyamorous()");
        Self {
            user_id: user_id.into(),
            status,
            partner_id: Some(partner.into()),
            partner_ids: Vec::new(),
            facet,
            looking_for: None,
        }
    }

    /// Request a polyamorous status with the given partner set
    pub fn polyamorous(
        user_id: impl Into<UserId>,
        partners: Vec<UserId>,
        facet: Facet,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            status: MaritalStatus::Polyamorous,
            partner_id: None,
            partner_ids: partners,
            facet,
            looking_for: None,
        }
    }

    /// Attach a replacement tag list to this request
    pub fn with_looking_for(mut self, tags: Vec<String>) -> Self {
        self.looking_for = Some(tags);
        self
    }

    /// The new target partner set implied by this request
    ///
    /// `partner_ids` (deduplicated, order preserved) when polyamorous,
    /// else `partner_id` as a zero-or-one element set. These ids are
    /// both what gets validated and what the propagator confirms.
    pub fn target_partners(&self) -> Vec<UserId> {
        if self.status.is_polyamorous() {
            let mut targets = Vec::with_capacity(self.partner_ids.len());
            for id in &self.partner_ids {
                if !targets.contains(id) {
                    targets.push(id.clone());
                }
            }
            targets
        } else {
            self.partner_id.iter().cloned().collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_has_no_targets() {
        let request = UpdateRequest::single("alice", Facet::Public);
        assert!(request.target_partners().is_empty());
    }

    #[test]
    fn test_exclusive_targets_the_one_partner() {
        let request =
            UpdateRequest::exclusive("alice", MaritalStatus::Married, "bob", Facet::Public);
        assert_eq!(request.target_partners(), vec![UserId::new("bob")]);
    }

    #[test]
    fn test_polyamorous_targets_deduplicate() {
        let request = UpdateRequest::polyamorous(
            "alice",
            vec![UserId::new("bob"), UserId::new("carol"), UserId::new("bob")],
            Facet::Public,
        );
        assert_eq!(
            request.target_partners(),
            vec![UserId::new("bob"), UserId::new("carol")]
        );
    }

    #[test]
    fn test_exclusive_ignores_partner_set() {
        let mut request =
            UpdateRequest::exclusive("alice", MaritalStatus::Engaged, "bob", Facet::Private);
        request.partner_ids = vec![UserId::new("stale")];
        assert_eq!(request.target_partners(), vec![UserId::new("bob")]);
    }
}
