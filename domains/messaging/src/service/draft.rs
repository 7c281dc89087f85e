//! AI draft generator
//!
//! Produces a suggested reply body for the admin to review, edit, or
//! discard; never sent automatically. The generator reads the conversation,
//! finds the most recent customer message, and asks the text-generation
//! collaborator for a concise reply. Drafts are transient state, never
//! persisted as messages.

use std::sync::Arc;

use backoffice_genai::{GenAiError, GenerationRequest, TextGenerator};

use crate::domain::entities::Conversation;

/// Persona and tone for every generated draft
pub const SYSTEM_INSTRUCTION: &str =
    "You are a professional e-commerce support assistant. Provide polite and helpful responses.";

/// Substituted when the collaborator returns no content
pub const EMPTY_RESPONSE_FALLBACK: &str =
    "Could not generate a draft at this time. Please try again or compose manually.";

/// Shown in the draft field when the collaborator call fails
pub const FAILURE_DRAFT: &str = "Failed to generate draft. Please try again.";

/// Result of a draft-generation attempt that did not fail outright
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftOutcome {
    /// A draft body ready for admin review
    Drafted(String),
    /// The conversation holds no customer message to draft from; no
    /// collaborator call was made
    NoCustomerMessage,
}

#[derive(Clone)]
pub struct DraftGenerator {
    genai: Arc<dyn TextGenerator>,
}

impl DraftGenerator {
    pub fn new(genai: Arc<dyn TextGenerator>) -> Self {
        Self { genai }
    }

    /// Generate a suggested reply for the conversation
    ///
    /// An empty collaborator response is mapped to the fixed fallback copy;
    /// collaborator errors propagate for the caller to convert into a
    /// notification plus the failure draft text.
    pub async fn generate(
        &self,
        conversation: &Conversation,
    ) -> Result<DraftOutcome, GenAiError> {
        let Some(last_customer_message) = conversation.last_customer_message() else {
            tracing::debug!(
                conversation_id = %conversation.id,
                "No customer message to draft from"
            );
            return Ok(DraftOutcome::NoCustomerMessage);
        };

        let user_prompt = build_user_prompt(conversation, &last_customer_message.body);
        let request =
            GenerationRequest::new(user_prompt).with_system_instruction(SYSTEM_INSTRUCTION);

        tracing::debug!(conversation_id = %conversation.id, "Requesting AI draft");

        let response = self.genai.generate(request).await?;

        if response.is_empty() {
            return Ok(DraftOutcome::Drafted(EMPTY_RESPONSE_FALLBACK.to_string()));
        }

        Ok(DraftOutcome::Drafted(response.text))
    }
}

/// Interpolate the customer context into the drafting prompt
fn build_user_prompt(conversation: &Conversation, message_body: &str) -> String {
    format!(
        "Generate a polite and concise reply (max 150 words) to the following customer message.\n\
         Customer Name: {}\n\
         Conversation ID: {}\n\
         Message: \"{}\"\n\n\
         Ensure the tone is professional, helpful, and friendly. \
         Avoid repeating information already in the message.",
        conversation.customer_name, conversation.id, message_body
    )
}
