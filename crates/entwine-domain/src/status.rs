//! Marital status enumeration

/// Relationship status carried by one facet of a user record
///
/// Three behavioural groups matter to the engine:
/// - Single: no partner references
/// - Exclusive coupled statuses (in a relationship, engaged, married):
///   at most one partner reference
/// - Polyamorous: a set of simultaneous partner references
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaritalStatus {
    /// No partners
    Single,

    /// Coupled, exclusive
    InARelationship,

    /// Coupled, exclusive
    Engaged,

    /// Coupled, exclusive
    Married,

    /// Coupled with a set of simultaneous partners
    Polyamorous,
}

impl MaritalStatus {
    /// Get the status name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            MaritalStatus::Single => "single",
            MaritalStatus::InARelationship => "in_a_relationship",
            MaritalStatus::Engaged => "engaged",
            MaritalStatus::Married => "married",
            MaritalStatus::Polyamorous => "polyamorous",
        }
    }

    /// Human-readable label, as shown to users
    pub fn label(&self) -> &'static str {
        match self {
            MaritalStatus::Single => "Single",
            MaritalStatus::InARelationship => "In a relationship",
            MaritalStatus::Engaged => "Engaged",
            MaritalStatus::Married => "Married",
            MaritalStatus::Polyamorous => "Polyamorous",
        }
    }

    /// Parse a status from a string
    ///
    /// Accepts spaces or underscores, case-insensitive, so both the wire
    /// form ("In a relationship") and the storage form parse.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(' ', "_").as_str() {
            "single" => Some(MaritalStatus::Single),
            "in_a_relationship" => Some(MaritalStatus::InARelationship),
            "engaged" => Some(MaritalStatus::Engaged),
            "married" => Some(MaritalStatus::Married),
            "polyamorous" => Some(MaritalStatus::Polyamorous),
            _ => None,
        }
    }

    /// Whether this status carries no partner references
    pub fn is_single(&self) -> bool {
        matches!(self, MaritalStatus::Single)
    }

    /// Whether this status carries a partner set rather than a single reference
    pub fn is_polyamorous(&self) -> bool {
        matches!(self, MaritalStatus::Polyamorous)
    }

    /// Whether this is a coupled status with at most one partner reference
    pub fn is_exclusive(&self) -> bool {
        matches!(
            self,
            MaritalStatus::InARelationship | MaritalStatus::Engaged | MaritalStatus::Married
        )
    }
}

impl Default for MaritalStatus {
    /// Records are created Single
    fn default() -> Self {
        MaritalStatus::Single
    }
}

impl std::str::FromStr for MaritalStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid marital status: {}", s))
    }
}
