//! Partial-update payload for one facet of a record

use crate::{Facet, MaritalStatus, ProfileRecord, UserId};

/// The minimal partial update written to one facet of a user record
///
/// A patch always carries the status and both partner fields for its
/// facet; `looking_for` is included only when the caller supplied it
/// (that field is shared between facets, not duplicated per-facet).
///
/// Building a patch performs no I/O; the same builder serves the
/// caller's own update and is independently testable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfilePatch {
    /// Which facet this patch applies to
    pub facet: Facet,

    /// New status for the facet
    pub status: MaritalStatus,

    /// New single partner reference for the facet
    pub partner: Option<UserId>,

    /// New partner set for the facet
    pub partners: Vec<UserId>,

    /// Replacement tag list, when provided; None leaves the field untouched
    pub looking_for: Option<Vec<String>>,
}

impl ProfilePatch {
    /// Build the caller's own update payload
    ///
    /// - Polyamorous: the partner set becomes `partner_ids` and the single
    ///   partner reference becomes its first element, if any.
    /// - Otherwise: the single partner reference becomes `partner_id` and
    ///   the partner set is cleared.
    ///
    /// # Examples
    ///
    /// ```
    /// use entwine_domain::{Facet, MaritalStatus, ProfilePatch, UserId};
    ///
    /// let patch = ProfilePatch::self_update(
    ///     MaritalStatus::Polyamorous,
    ///     None,
    ///     &[UserId::new("bob"), UserId::new("carol")],
    ///     Facet::Public,
    ///     None,
    /// );
    /// assert_eq!(patch.partner, Some(UserId::new("bob")));
    /// assert_eq!(patch.partners.len(), 2);
    /// ```
    pub fn self_update(
        status: MaritalStatus,
        partner_id: Option<UserId>,
        partner_ids: &[UserId],
        facet: Facet,
        looking_for: Option<Vec<String>>,
    ) -> Self {
        let (partner, partners) = if status.is_polyamorous() {
            (partner_ids.first().cloned(), partner_ids.to_vec())
        } else {
            (partner_id, Vec::new())
        };

        Self {
            facet,
            status,
            partner,
            partners,
            looking_for,
        }
    }

    /// Build the demotion payload for a removed partner
    ///
    /// Resets the facet to Single with no partner references.
    pub fn demote(facet: Facet) -> Self {
        Self {
            facet,
            status: MaritalStatus::Single,
            partner: None,
            partners: Vec::new(),
            looking_for: None,
        }
    }

    /// Apply this patch to a record in place
    ///
    /// Touches only the patched facet, plus `looking_for` when present.
    /// Store implementations share this so partial-update semantics are
    /// defined in exactly one place.
    pub fn apply_to(&self, record: &mut ProfileRecord) {
        let fields = record.facet_mut(self.facet);
        fields.status = self.status;
        fields.partner = self.partner.clone();
        fields.partners = self.partners.clone();
        if let Some(tags) = &self.looking_for {
            record.looking_for = tags.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RelationshipFields;

    #[test]
    fn test_self_update_polyamorous_claims_first_partner() {
        let ids = vec![UserId::new("bob"), UserId::new("carol")];
        let patch =
            ProfilePatch::self_update(MaritalStatus::Polyamorous, None, &ids, Facet::Public, None);

        assert_eq!(patch.status, MaritalStatus::Polyamorous);
        assert_eq!(patch.partner, Some(UserId::new("bob")));
        assert_eq!(patch.partners, ids);
    }

    #[test]
    fn test_self_update_polyamorous_without_partners() {
        let patch =
            ProfilePatch::self_update(MaritalStatus::Polyamorous, None, &[], Facet::Public, None);

        assert_eq!(patch.partner, None);
        assert!(patch.partners.is_empty());
    }

    #[test]
    fn test_self_update_exclusive_clears_partner_set() {
        let patch = ProfilePatch::self_update(
            MaritalStatus::Married,
            Some(UserId::new("bob")),
            &[UserId::new("stale")],
            Facet::Private,
            None,
        );

        assert_eq!(patch.partner, Some(UserId::new("bob")));
        assert!(patch.partners.is_empty());
    }

    #[test]
    fn test_self_update_single_has_no_references() {
        let patch = ProfilePatch::self_update(MaritalStatus::Single, None, &[], Facet::Public, None);

        assert_eq!(patch.partner, None);
        assert!(patch.partners.is_empty());
    }

    #[test]
    fn test_looking_for_passthrough() {
        let tags = vec!["friendship".to_string(), "events".to_string()];
        let patch = ProfilePatch::self_update(
            MaritalStatus::Single,
            None,
            &[],
            Facet::Public,
            Some(tags.clone()),
        );
        assert_eq!(patch.looking_for, Some(tags));

        let patch = ProfilePatch::self_update(MaritalStatus::Single, None, &[], Facet::Public, None);
        assert_eq!(patch.looking_for, None);
    }

    #[test]
    fn test_apply_to_touches_only_its_facet() {
        let mut record = ProfileRecord::new("alice");
        record.private = RelationshipFields {
            status: MaritalStatus::Engaged,
            partner: Some(UserId::new("dave")),
            partners: Vec::new(),
        };

        let patch = ProfilePatch::self_update(
            MaritalStatus::Married,
            Some(UserId::new("bob")),
            &[],
            Facet::Public,
            None,
        );
        patch.apply_to(&mut record);

        assert_eq!(record.public.status, MaritalStatus::Married);
        assert_eq!(record.public.partner, Some(UserId::new("bob")));
        // Private facet untouched
        assert_eq!(record.private.status, MaritalStatus::Engaged);
        assert_eq!(record.private.partner, Some(UserId::new("dave")));
    }

    #[test]
    fn test_apply_to_leaves_looking_for_when_absent() {
        let mut record = ProfileRecord::new("alice");
        record.looking_for = vec!["hiking".to_string()];

        ProfilePatch::demote(Facet::Public).apply_to(&mut record);
        assert_eq!(record.looking_for, vec!["hiking".to_string()]);

        let patch = ProfilePatch::self_update(
            MaritalStatus::Single,
            None,
            &[],
            Facet::Public,
            Some(Vec::new()),
        );
        patch.apply_to(&mut record);
        assert!(record.looking_for.is_empty());
    }

    #[test]
    fn test_demote_payload() {
        let patch = ProfilePatch::demote(Facet::Private);
        assert_eq!(patch.status, MaritalStatus::Single);
        assert_eq!(patch.partner, None);
        assert!(patch.partners.is_empty());
        assert_eq!(patch.looking_for, None);
    }
}
