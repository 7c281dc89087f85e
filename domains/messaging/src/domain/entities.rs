//! Domain entities for the Messaging domain
//!
//! A conversation groups the ordered messages exchanged between one
//! customer and the admin over a single channel. The conversation caches
//! its most recent message for list-view display and tracks how many
//! customer messages are still unanswered.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use backoffice_common::{Error, Result};

/// Who authored a message
///
/// `Ai` is admitted by the data model for forward compatibility, but no
/// current flow stores it: AI output is staged as a transient draft and
/// only persisted once the admin sends it as their own reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Customer,
    Admin,
    Ai,
}

impl std::fmt::Display for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sender::Customer => write!(f, "customer"),
            Sender::Admin => write!(f, "admin"),
            Sender::Ai => write!(f, "ai"),
        }
    }
}

/// Delivery channel of a conversation
///
/// Fixed at conversation creation; every reply inherits the channel of the
/// conversation's first message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    #[default]
    Email,
    Whatsapp,
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Channel::Email => write!(f, "email"),
            Channel::Whatsapp => write!(f, "whatsapp"),
        }
    }
}

/// Message entity: a single communication unit within a conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub conversation_id: String,
    pub customer_id: String,
    pub sender: Sender,
    #[serde(rename = "type")]
    pub channel: Channel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub body: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<String>,
}

impl Message {
    /// Create an outbound admin reply within an existing conversation
    ///
    /// The body is trimmed; a whitespace-only body is rejected before any
    /// id or timestamp is generated.
    pub fn new_admin_reply(
        conversation_id: &str,
        customer_id: &str,
        channel: Channel,
        body: &str,
    ) -> Result<Self> {
        let body = Self::validate_body(body)?;

        Ok(Message {
            id: format!("msg-{}", Uuid::new_v4()),
            conversation_id: conversation_id.to_string(),
            customer_id: customer_id.to_string(),
            sender: Sender::Admin,
            channel,
            subject: None,
            body,
            timestamp: Utc::now(),
            attachments: Vec::new(),
        })
    }

    /// Create an inbound customer message
    pub fn new_from_customer(
        conversation_id: &str,
        customer_id: &str,
        channel: Channel,
        subject: Option<String>,
        body: &str,
    ) -> Result<Self> {
        let body = Self::validate_body(body)?;

        Ok(Message {
            id: format!("msg-{}", Uuid::new_v4()),
            conversation_id: conversation_id.to_string(),
            customer_id: customer_id.to_string(),
            sender: Sender::Customer,
            channel,
            subject,
            body,
            timestamp: Utc::now(),
            attachments: Vec::new(),
        })
    }

    fn validate_body(body: &str) -> Result<String> {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            return Err(Error::Validation(
                "Message body cannot be empty or whitespace-only".to_string(),
            ));
        }
        Ok(trimmed.to_string())
    }
}

/// Conversation entity: a customer-support thread
///
/// `last_message` and `last_message_timestamp` are a derived cache of the
/// most recent message; `record_message` keeps them coherent with the
/// message sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: String,
    pub customer_id: String,
    pub customer_name: String,
    pub last_message: String,
    pub last_message_timestamp: DateTime<Utc>,
    pub unread_count: u32,
    pub messages: Vec<Message>,
}

impl Conversation {
    /// The conversation's channel: that of its first message
    ///
    /// A conversation with no messages yet defaults to email.
    pub fn channel(&self) -> Channel {
        self.messages
            .first()
            .map(|m| m.channel)
            .unwrap_or_default()
    }

    /// The most recent message authored by the customer, if any
    pub fn last_customer_message(&self) -> Option<&Message> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.sender == Sender::Customer)
    }

    /// Append a message and update the derived summary state
    ///
    /// Messages are append-only for the process lifetime: never reordered,
    /// never removed. A customer message increments the unread count by 1;
    /// an admin (or ai) message resets it to 0.
    pub fn record_message(&mut self, message: Message) {
        self.last_message = message.body.clone();
        self.last_message_timestamp = message.timestamp;
        match message.sender {
            Sender::Customer => self.unread_count += 1,
            Sender::Admin | Sender::Ai => self.unread_count = 0,
        }
        self.messages.push(message);
    }
}
