//! Configuration for the relationship engine

use serde::{Deserialize, Serialize};

/// Configuration for the relationship engine
///
/// Controls the degraded-availability policies and the notification
/// templates. The defaults reproduce the behaviour the UI layer was
/// built against: self-write failures are tolerated and partners are
/// notified.
///
/// # Examples
///
/// ```
/// use entwine_engine::EngineConfig;
///
/// // Default configuration
/// let config = EngineConfig::default();
/// assert!(config.notifications_enabled);
///
/// // No notifications
/// let config = EngineConfig::quiet();
/// assert!(!config.notifications_enabled);
///
/// // Surface self-write failures instead of swallowing them
/// let config = EngineConfig::strict();
/// assert!(!config.tolerate_self_write_failure);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Whether partners whose records were changed receive a message
    /// Default: true
    #[serde(default = "default_true")]
    pub notifications_enabled: bool,

    /// Whether a failed write of the caller's own record still counts as
    /// a successful update (logged, surfaced in the outcome, invisible
    /// to the end user). Default: true, matching the caller contract the
    /// UI expects. Set false to surface it as an error instead.
    #[serde(default = "default_true")]
    pub tolerate_self_write_failure: bool,

    /// Message sent to a partner removed by an update.
    /// Placeholders: `{sender}`, `{facet}`
    #[serde(default = "default_demotion_notice")]
    pub demotion_notice: String,

    /// Message sent to a partner added or reconfirmed by an update.
    /// Placeholders: `{sender}`, `{facet}`, `{status}`
    #[serde(default = "default_link_notice")]
    pub link_notice: String,
}

fn default_true() -> bool {
    true
}

fn default_demotion_notice() -> String {
    "{sender} has updated their relationship status. Your {facet} relationship status was reset to Single.".to_string()
}

fn default_link_notice() -> String {
    "{sender} has listed you as a partner. Your {facet} relationship status is now {status}.".to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            notifications_enabled: true,
            tolerate_self_write_failure: true,
            demotion_notice: default_demotion_notice(),
            link_notice: default_link_notice(),
        }
    }
}

impl EngineConfig {
    /// Configuration that sends no partner notifications
    pub fn quiet() -> Self {
        Self {
            notifications_enabled: false,
            ..Default::default()
        }
    }

    /// Configuration that surfaces self-write failures as errors
    ///
    /// Suitable when the backing store is trusted and callers prefer a
    /// hard failure over a silently incomplete update.
    pub fn strict() -> Self {
        Self {
            tolerate_self_write_failure: false,
            ..Default::default()
        }
    }
}
