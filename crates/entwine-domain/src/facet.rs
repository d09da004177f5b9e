//! Profile facet selector

/// One of the two independent relationship-state slots per user
///
/// The public and private facets are updated and propagated completely
/// independently of one another; no operation on one facet may touch the
/// other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facet {
    /// Publicly visible relationship state
    Public,

    /// Privately visible relationship state
    Private,
}

impl Facet {
    /// Get the facet name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Facet::Public => "public",
            Facet::Private => "private",
        }
    }

    /// Parse a facet from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "public" => Some(Facet::Public),
            "private" => Some(Facet::Private),
            _ => None,
        }
    }
}

impl Default for Facet {
    /// Callers that do not specify a facet operate on the public one
    fn default() -> Self {
        Facet::Public
    }
}

impl std::str::FromStr for Facet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid facet: {}", s))
    }
}
