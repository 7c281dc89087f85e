//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config. Every value has a default so
//! the application runs with no environment at all; in particular the
//! GenAI key is optional and its absence selects the mock collaborator.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

/// Default simulated round-trip latency for the in-memory repositories
pub const DEFAULT_LATENCY_MS: u64 = 500;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Gemini API key; `None` selects the mock text-generation collaborator
    pub gemini_api_key: Option<String>,

    /// Model used for draft generation
    pub genai_model: String,

    /// Simulated network latency applied by the mock repositories, in ms
    pub mock_latency_ms: u64,

    /// Runtime configuration
    pub log_level: String,
    pub rust_log: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let config = Self {
            gemini_api_key: env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty()),

            genai_model: env::var("GENAI_MODEL").unwrap_or_else(|_| "gemini-2.5-flash".to_string()),

            mock_latency_ms: env::var("MOCK_LATENCY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_LATENCY_MS),

            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "backoffice=debug".to_string()),
        };

        Ok(config)
    }
}
