//! Shared utilities, configuration, and error handling for Backoffice
//!
//! This crate provides common functionality used across the Backoffice application:
//! - Configuration management following 12-factor principles
//! - Error types and handling
//! - The injected notification sink for user-visible outcomes
//! - Simulated network latency for the in-memory repositories

pub mod config;
pub mod error;
pub mod latency;
pub mod notify;

pub use config::Config;
pub use error::{Error, Result};
pub use latency::Latency;
pub use notify::{MemorySink, Notification, NotificationLevel, NotificationSink, TracingSink};
