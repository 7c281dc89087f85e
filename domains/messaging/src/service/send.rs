//! Message send operation
//!
//! Constructs a well-formed outbound admin reply and commits it through the
//! conversation store. Validation happens before any store round trip; the
//! reply inherits the conversation's channel, fixed at creation.

use backoffice_common::Result;

use crate::domain::entities::{Conversation, Message};
use crate::repository::ConversationStore;

#[derive(Clone)]
pub struct ReplySender {
    store: ConversationStore,
}

impl ReplySender {
    pub fn new(store: ConversationStore) -> Self {
        Self { store }
    }

    /// Send an admin reply into the given conversation
    ///
    /// Rejects whitespace-only bodies with no store call and no mutation.
    /// On success the committed message is returned; the caller refreshes
    /// the conversation list to observe the unread/summary changes.
    pub async fn send_reply(&self, conversation: &Conversation, body: &str) -> Result<Message> {
        let message = Message::new_admin_reply(
            &conversation.id,
            &conversation.customer_id,
            conversation.channel(),
            body,
        )?;

        tracing::debug!(conversation_id = %conversation.id, "Sending admin reply");

        self.store.append_message(message).await
    }
}
