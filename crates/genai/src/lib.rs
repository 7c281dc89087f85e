//! Backoffice text-generation service
//!
//! Wraps the external text-generation collaborator behind a trait with two
//! implementations:
//! - `GeminiService` — calls the Gemini `generateContent` API over HTTP
//! - `MockGenService` — deterministic synthetic drafts when no API key is
//!   configured, so the rest of the system is exercisable offline
//!
//! The sampling configuration is an explicit, fully enumerated structure
//! passed once per request; there is no shared mutable config state.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod gemini;
pub mod mock;

pub use gemini::GeminiService;
pub use mock::MockGenService;

/// Default model used for draft generation
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

#[derive(Error, Debug)]
pub enum GenAiError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Response error: {0}")]
    Response(String),

    #[error("Rate limit exceeded")]
    RateLimit,

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Sampling configuration for a single generation request
///
/// Defaults are tuned for concise support replies: moderate temperature,
/// a tight output-token ceiling, and a small thinking budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub model: String,
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub max_output_tokens: u32,
    pub thinking_budget: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.5,
            top_p: 0.95,
            top_k: 64,
            max_output_tokens: 250,
            thinking_budget: 100,
        }
    }
}

/// A single non-streaming text-generation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub user_prompt: String,
    pub system_instruction: Option<String>,
    pub config: GenerationConfig,
}

impl GenerationRequest {
    pub fn new(user_prompt: impl Into<String>) -> Self {
        Self {
            user_prompt: user_prompt.into(),
            system_instruction: None,
            config: GenerationConfig::default(),
        }
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    pub fn with_config(mut self, config: GenerationConfig) -> Self {
        self.config = config;
        self
    }
}

/// A single non-streaming text-generation response
///
/// `text` may be empty when the model returned no content; the caller is
/// responsible for substituting fallback copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub text: String,
    pub model: String,
}

impl GenerationResponse {
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Text-generation service trait for different implementations
#[async_trait::async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a single non-streaming text completion
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse, GenAiError>;

    /// Return the default model for this service
    fn default_model(&self) -> &str;
}

/// Factory selecting the concrete service from configuration
pub struct TextGeneratorFactory;

impl TextGeneratorFactory {
    /// Build a service from an optional API key and model name
    ///
    /// No key means no network calls: the mock service is returned and every
    /// response is clearly marked as synthetic.
    pub fn create(api_key: Option<String>, model: String) -> Box<dyn TextGenerator> {
        match api_key {
            Some(key) => {
                tracing::info!(model = %model, "Using Gemini text-generation service");
                Box::new(GeminiService::new(key, model))
            }
            None => {
                tracing::warn!(
                    "GEMINI_API_KEY is not set; using mock text-generation service"
                );
                Box::new(MockGenService::new())
            }
        }
    }

    /// Build a service from the process environment
    pub fn from_env() -> Box<dyn TextGenerator> {
        dotenvy::dotenv().ok();

        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|k| !k.is_empty());
        let model =
            std::env::var("GENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Self::create(api_key, model)
    }
}
