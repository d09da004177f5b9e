//! User relationship record and per-facet fields

use crate::{Facet, MaritalStatus, UserId};

/// The relationship-relevant state of one facet of a user record
///
/// `partner` is meaningful for exclusive coupled statuses; `partners` is
/// meaningful for polyamorous status. Both are kept on every record so a
/// status change is a field rewrite, not a schema change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationshipFields {
    /// Current marital status for this facet
    pub status: MaritalStatus,

    /// Single partner reference (exclusive coupled statuses)
    pub partner: Option<UserId>,

    /// Partner set (polyamorous status); empty otherwise
    pub partners: Vec<UserId>,
}

impl RelationshipFields {
    /// All partners this facet currently references, deduplicated
    ///
    /// The union of the single partner reference and the partner set, in
    /// encounter order. This is the previous-edge set the propagator
    /// diffs against the new target set.
    pub fn linked_partners(&self) -> Vec<UserId> {
        let mut all = Vec::with_capacity(self.partners.len() + 1);
        if let Some(partner) = &self.partner {
            all.push(partner.clone());
        }
        for partner in &self.partners {
            if !all.contains(partner) {
                all.push(partner.clone());
            }
        }
        all
    }
}

/// One user's relationship record
///
/// Part of a larger profile entity; only the relationship-relevant fields
/// are modelled here. The two facets never influence one another.
/// `looking_for` is shared between facets, not duplicated per-facet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileRecord {
    /// Unique user identifier
    pub id: UserId,

    /// Public facet state
    pub public: RelationshipFields,

    /// Private facet state
    pub private: RelationshipFields,

    /// Free-form tags describing what the user is looking for
    pub looking_for: Vec<String>,
}

impl ProfileRecord {
    /// Create a fresh record with both facets Single and no tags
    pub fn new(id: impl Into<UserId>) -> Self {
        Self {
            id: id.into(),
            public: RelationshipFields::default(),
            private: RelationshipFields::default(),
            looking_for: Vec::new(),
        }
    }

    /// Borrow the fields of the given facet
    pub fn facet(&self, facet: Facet) -> &RelationshipFields {
        match facet {
            Facet::Public => &self.public,
            Facet::Private => &self.private,
        }
    }

    /// Mutably borrow the fields of the given facet
    pub fn facet_mut(&mut self, facet: Facet) -> &mut RelationshipFields {
        match facet {
            Facet::Public => &mut self.public,
            Facet::Private => &mut self.private,
        }
    }
}
