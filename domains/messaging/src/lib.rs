//! Messaging domain: support conversations, unified inbox, AI reply drafting

pub mod domain;
pub mod inbox;
pub mod repository;
pub mod service;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{Channel, Conversation, Message, Sender};

// Re-export repository types
pub use repository::ConversationStore;

// Re-export service types
pub use service::draft::{DraftGenerator, DraftOutcome};
pub use service::send::ReplySender;

// Re-export the view controller
pub use inbox::{InboxController, InboxPhase};
