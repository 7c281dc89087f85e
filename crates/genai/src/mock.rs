//! Mock Text-Generation Service Implementation
//!
//! Used by `TextGeneratorFactory` when no API key is configured. Returns
//! deterministic, clearly marked synthetic drafts so the inbox workflow
//! remains exercisable without a live credential.

use crate::{GenAiError, GenerationRequest, GenerationResponse, TextGenerator};

pub const MOCK_MODEL: &str = "mock-model";

/// How much of the prompt is echoed back in the synthetic draft
const PROMPT_PREVIEW_CHARS: usize = 100;

/// Mock text-generation service for offline use and testing
#[derive(Debug, Clone, Default)]
pub struct MockGenService;

impl MockGenService {
    /// Create a new mock service
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl TextGenerator for MockGenService {
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse, GenAiError> {
        tracing::info!("Mock text-generation service processing request");

        let preview: String = request
            .user_prompt
            .chars()
            .take(PROMPT_PREVIEW_CHARS)
            .collect();

        let text = format!(
            "[MOCK AI DRAFT] No API key configured. This is a simulated draft response for: \"{}...\"",
            preview
        );

        Ok(GenerationResponse {
            text,
            model: MOCK_MODEL.to_string(),
        })
    }

    fn default_model(&self) -> &str {
        MOCK_MODEL
    }
}
