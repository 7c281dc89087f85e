//! Conversation store
//!
//! Source of truth for all conversations and their unread/summary state.
//! Backed by an in-memory list standing in for a remote backend, so every
//! operation awaits a simulated round trip before touching state. The store
//! exclusively owns the conversation list; callers get clones and re-resolve
//! by id after any mutation.

use std::sync::{Arc, RwLock};

use backoffice_common::{Error, Latency, Result};

use crate::domain::entities::{Conversation, Message, Sender};

#[derive(Clone)]
pub struct ConversationStore {
    conversations: Arc<RwLock<Vec<Conversation>>>,
    latency: Latency,
}

impl ConversationStore {
    /// Create an empty store
    pub fn new(latency: Latency) -> Self {
        Self::seeded(Vec::new(), latency)
    }

    /// Create a store pre-populated with seed conversations
    pub fn seeded(conversations: Vec<Conversation>, latency: Latency) -> Self {
        Self {
            conversations: Arc::new(RwLock::new(conversations)),
            latency,
        }
    }

    /// List all conversations in store-insertion order
    pub async fn list(&self) -> Result<Vec<Conversation>> {
        self.latency.simulate().await;

        let conversations = self.conversations.read().expect("store lock poisoned");
        Ok(conversations.clone())
    }

    /// Find a conversation by id
    pub async fn find(&self, id: &str) -> Result<Option<Conversation>> {
        self.latency.simulate().await;

        let conversations = self.conversations.read().expect("store lock poisoned");
        Ok(conversations.iter().find(|c| c.id == id).cloned())
    }

    /// Append a message to its conversation and update summary state
    ///
    /// The target conversation is located via `message.conversation_id`; a
    /// miss is surfaced as `NotFound` rather than silently dropped. On
    /// success the appended message is echoed back and no other
    /// conversation is touched.
    pub async fn append_message(&self, message: Message) -> Result<Message> {
        self.latency.simulate().await;

        let mut conversations = self.conversations.write().expect("store lock poisoned");
        let conversation = conversations
            .iter_mut()
            .find(|c| c.id == message.conversation_id)
            .ok_or_else(|| {
                Error::NotFound(format!(
                    "Conversation {} not found",
                    message.conversation_id
                ))
            })?;

        tracing::debug!(
            conversation_id = %conversation.id,
            sender = %message.sender,
            "Appending message"
        );

        conversation.record_message(message.clone());
        Ok(message)
    }

    /// Sum of unread counts across all conversations
    pub async fn total_unread(&self) -> Result<u32> {
        self.latency.simulate().await;

        let conversations = self.conversations.read().expect("store lock poisoned");
        Ok(conversations.iter().map(|c| c.unread_count).sum())
    }

    /// Whether any stored message was authored by the given sender
    pub fn contains_sender(&self, sender: Sender) -> bool {
        let conversations = self.conversations.read().expect("store lock poisoned");
        conversations
            .iter()
            .flat_map(|c| c.messages.iter())
            .any(|m| m.sender == sender)
    }
}
