//! User identifier newtype

use std::fmt;

/// Opaque unique identifier for a user record
///
/// Identity is owned by the backing store; the engine never parses or
/// derives meaning from the id's content, it only compares and copies it.
///
/// # Examples
///
/// ```
/// use entwine_domain::UserId;
///
/// let id = UserId::new("user-42");
/// assert_eq!(id.as_str(), "user-42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserId(String);

impl UserId {
    /// Create a UserId from any string-like value
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw id string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_round_trip() {
        let id = UserId::new("alice");
        assert_eq!(id.as_str(), "alice");
        assert_eq!(id.to_string(), "alice");
        assert_eq!(UserId::from("alice"), id);
    }

    #[test]
    fn test_user_id_ordering() {
        let a = UserId::new("a");
        let b = UserId::new("b");
        assert!(a < b);
    }
}
