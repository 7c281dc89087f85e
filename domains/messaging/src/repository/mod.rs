//! In-memory repository for the Messaging domain

pub mod conversations;

pub use conversations::ConversationStore;
