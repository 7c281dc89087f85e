//! Inbox view controller
//!
//! Orchestrates the interactive inbox workflow: loads conversations, tracks
//! the selection, routes admin actions to the send and draft services, and
//! converts every failure into a user-visible notification. The selection
//! is held as an id and re-resolved against the latest fetched list after
//! every refresh; a stale conversation object is never the source of truth.
//!
//! At most one operation is in flight at a time: every mutating method
//! takes `&mut self`, so the exclusive borrow enforces the same
//! single-in-flight rule the UI applies by disabling its controls.

use std::sync::Arc;

use backoffice_common::NotificationSink;

use crate::domain::entities::Conversation;
use crate::repository::ConversationStore;
use crate::service::draft::{DraftGenerator, DraftOutcome, FAILURE_DRAFT};
use crate::service::send::ReplySender;

/// Lifecycle of the conversation-list fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InboxPhase {
    /// Initial fetch not yet completed
    Loading,
    /// Last fetch succeeded; the list reflects the store
    Loaded,
    /// Last fetch failed; the list is empty and an error was reported
    Failed,
}

pub struct InboxController {
    store: ConversationStore,
    sender: ReplySender,
    drafts: DraftGenerator,
    notifier: Arc<dyn NotificationSink>,

    phase: InboxPhase,
    conversations: Vec<Conversation>,
    selected_id: Option<String>,
    reply_input: String,
    pending_draft: Option<String>,
}

impl InboxController {
    pub fn new(
        store: ConversationStore,
        drafts: DraftGenerator,
        notifier: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            sender: ReplySender::new(store.clone()),
            store,
            drafts,
            notifier,
            phase: InboxPhase::Loading,
            conversations: Vec::new(),
            selected_id: None,
            reply_input: String::new(),
            pending_draft: None,
        }
    }

    // --- State accessors ---

    pub fn phase(&self) -> InboxPhase {
        self.phase
    }

    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    /// The currently selected conversation, resolved against the latest
    /// fetched list
    pub fn selected(&self) -> Option<&Conversation> {
        let id = self.selected_id.as_deref()?;
        self.conversations.iter().find(|c| c.id == id)
    }

    pub fn reply_input(&self) -> &str {
        &self.reply_input
    }

    pub fn pending_draft(&self) -> Option<&str> {
        self.pending_draft.as_deref()
    }

    /// Sum of unread counts across the fetched list (inbox badge)
    pub fn total_unread(&self) -> u32 {
        self.conversations.iter().map(|c| c.unread_count).sum()
    }

    // --- Operations ---

    /// Fetch the conversation list and re-derive the selection
    ///
    /// On failure the list is left empty and an error notification is
    /// emitted; the session stays interactive.
    pub async fn refresh(&mut self) {
        self.phase = InboxPhase::Loading;

        match self.store.list().await {
            Ok(conversations) => {
                self.conversations = conversations;
                self.reselect();
                self.phase = InboxPhase::Loaded;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch conversations");
                self.conversations = Vec::new();
                self.notifier.error("Failed to fetch conversations.");
                self.phase = InboxPhase::Failed;
            }
        }
    }

    /// Re-derive the selection from the previous id and the fresh list
    ///
    /// A previously selected id is kept if it still exists, dropped
    /// otherwise; with no previous selection the first conversation is
    /// selected by default.
    fn reselect(&mut self) {
        match self.selected_id.take() {
            Some(id) => {
                if self.conversations.iter().any(|c| c.id == id) {
                    self.selected_id = Some(id);
                }
            }
            None => {
                self.selected_id = self.conversations.first().map(|c| c.id.clone());
            }
        }
    }

    /// Switch the selection to the given conversation
    ///
    /// Always clears the pending draft and the reply input so nothing
    /// leaks across conversations.
    pub fn select(&mut self, conversation_id: &str) {
        if !self.conversations.iter().any(|c| c.id == conversation_id) {
            tracing::debug!(conversation_id, "Ignoring selection of unknown conversation");
            return;
        }

        self.selected_id = Some(conversation_id.to_string());
        self.reply_input.clear();
        self.pending_draft = None;
    }

    pub fn set_reply_input(&mut self, text: impl Into<String>) {
        self.reply_input = text.into();
    }

    /// Ask the AI collaborator for a suggested reply to the selected
    /// conversation's most recent customer message
    pub async fn generate_draft(&mut self) {
        let Some(conversation) = self.selected().cloned() else {
            return;
        };

        self.pending_draft = None;

        match self.drafts.generate(&conversation).await {
            Ok(DraftOutcome::Drafted(text)) => {
                self.pending_draft = Some(text);
                self.notifier.success("AI draft generated successfully!");
            }
            Ok(DraftOutcome::NoCustomerMessage) => {
                self.notifier
                    .info("No customer message found to generate a draft from.");
            }
            Err(e) => {
                tracing::error!(error = %e, conversation_id = %conversation.id, "AI draft generation failed");
                self.pending_draft = Some(FAILURE_DRAFT.to_string());
                self.notifier.error("Failed to generate AI draft.");
            }
        }
    }

    /// Copy the pending draft into the reply input
    pub fn accept_draft(&mut self) {
        if let Some(draft) = self.pending_draft.take() {
            self.reply_input = draft;
        }
    }

    /// Clear the pending draft without touching the reply input
    pub fn discard_draft(&mut self) {
        self.pending_draft = None;
    }

    /// Send the reply input as an admin message to the selected
    /// conversation, then re-run the full fetch-and-reselect cycle
    ///
    /// Rejected with no store call when nothing is selected or the body is
    /// whitespace-only. On success the reply input and any pending draft
    /// are cleared; on failure both are left untouched.
    pub async fn send_reply(&mut self) {
        let Some(conversation) = self.selected().cloned() else {
            self.notifier.error("No conversation selected.");
            return;
        };

        if self.reply_input.trim().is_empty() {
            self.notifier.error("Reply cannot be empty.");
            return;
        }

        match self.sender.send_reply(&conversation, &self.reply_input).await {
            Ok(_) => {
                self.notifier.success("Message sent successfully!");
                self.reply_input.clear();
                self.pending_draft = None;
                // Re-fetch so the unread count and last-message cache shown
                // in the list come from the store's latest appended state.
                self.refresh().await;
            }
            Err(e) => {
                tracing::error!(error = %e, conversation_id = %conversation.id, "Failed to send message");
                self.notifier.error("Failed to send message.");
            }
        }
    }
}
