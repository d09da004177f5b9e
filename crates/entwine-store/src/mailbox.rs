//! In-memory messenger

use crate::StoreError;
use entwine_domain::traits::Messenger;
use entwine_domain::UserId;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// A delivered message, as recorded by the mailbox
///
/// Message ids are UUIDv7 so the log stays chronologically sortable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Unique message identifier
    pub id: uuid::Uuid,

    /// Sending user
    pub from: UserId,

    /// Receiving user
    pub to: UserId,

    /// Message text
    pub body: String,
}

/// Messenger implementation that appends to an in-memory log
///
/// Lets tests and demo wiring observe exactly which notifications the
/// engine dispatched, and in what order.
#[derive(Debug, Default)]
pub struct MemoryMailbox {
    messages: RwLock<Vec<Message>>,
}

impl MemoryMailbox {
    /// Create an empty mailbox
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages sent so far, in send order
    pub async fn sent(&self) -> Vec<Message> {
        self.messages.read().await.clone()
    }

    /// Messages addressed to the given user, in send order
    pub async fn sent_to(&self, to: &UserId) -> Vec<Message> {
        self.messages
            .read()
            .await
            .iter()
            .filter(|m| &m.to == to)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl Messenger for MemoryMailbox {
    type Error = StoreError;

    async fn send(&self, from: &UserId, to: &UserId, body: &str) -> Result<(), Self::Error> {
        self.messages.write().await.push(Message {
            id: uuid::Uuid::now_v7(),
            from: from.clone(),
            to: to.clone(),
            body: body.to_string(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_send_records_messages_in_order() {
        let mailbox = MemoryMailbox::new();
        let alice = UserId::new("alice");
        let bob = UserId::new("bob");
        let carol = UserId::new("carol");

        mailbox.send(&alice, &bob, "first").await.unwrap();
        mailbox.send(&alice, &carol, "second").await.unwrap();

        let all = mailbox.sent().await;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].body, "first");
        assert_eq!(all[1].body, "second");
        assert_ne!(all[0].id, all[1].id);

        let to_bob = mailbox.sent_to(&bob).await;
        assert_eq!(to_bob.len(), 1);
        assert_eq!(to_bob[0].from, alice);
    }
}
