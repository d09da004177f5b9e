//! Best-effort partner notification

use crate::EngineConfig;
use entwine_domain::traits::Messenger;
use entwine_domain::{Facet, MaritalStatus, UserId};

/// Dispatches informational messages to partners whose records were
/// changed as a side effect
///
/// Strictly best-effort: a failed send is logged and reported as `false`,
/// never an error, and never blocks the relationship update's success
/// determination.
pub struct Notifier<M> {
    messenger: M,
    enabled: bool,
    demotion_notice: String,
    link_notice: String,
}

impl<M: Messenger> Notifier<M> {
    /// Create a notifier from the engine configuration
    pub fn new(messenger: M, config: &EngineConfig) -> Self {
        Self {
            messenger,
            enabled: config.notifications_enabled,
            demotion_notice: config.demotion_notice.clone(),
            link_notice: config.link_notice.clone(),
        }
    }

    /// Whether notifications are enabled at all
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The underlying messenger
    pub fn messenger(&self) -> &M {
        &self.messenger
    }

    /// Render the message for a partner demoted by an update
    pub fn demotion_text(&self, sender: &UserId, facet: Facet) -> String {
        render(&self.demotion_notice, sender, facet, None)
    }

    /// Render the message for a partner added or reconfirmed by an update
    pub fn link_text(&self, sender: &UserId, facet: Facet, status: MaritalStatus) -> String {
        render(&self.link_notice, sender, facet, Some(status))
    }

    /// Send a message, best-effort; returns whether it went through
    pub async fn dispatch(&self, from: &UserId, to: &UserId, body: &str) -> bool {
        if !self.enabled {
            return false;
        }
        match self.messenger.send(from, to, body).await {
            Ok(()) => {
                tracing::debug!(from = %from, to = %to, "notification sent");
                true
            }
            Err(e) => {
                tracing::warn!(from = %from, to = %to, error = %e, "notification dispatch failed");
                false
            }
        }
    }
}

fn render(template: &str, sender: &UserId, facet: Facet, status: Option<MaritalStatus>) -> String {
    let mut text = template
        .replace("{sender}", sender.as_str())
        .replace("{facet}", facet.as_str());
    if let Some(status) = status {
        text = text.replace("{status}", status.label());
    }
    text
}
