//! Injected notification sink for user-visible outcomes
//!
//! Every component that reports an outcome to the admin receives a
//! `NotificationSink` explicitly instead of writing to ambient global
//! state. The application wires a `TracingSink`; tests wire a
//! `MemorySink` and assert on what was emitted.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

/// Severity of a user-visible notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Error,
    Info,
}

impl std::fmt::Display for NotificationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationLevel::Success => write!(f, "success"),
            NotificationLevel::Error => write!(f, "error"),
            NotificationLevel::Info => write!(f, "info"),
        }
    }
}

/// A transient, auto-dismissing notification shown to the admin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

/// Capability for reporting user-visible outcomes
pub trait NotificationSink: Send + Sync {
    fn notify(&self, level: NotificationLevel, message: &str);

    fn success(&self, message: &str) {
        self.notify(NotificationLevel::Success, message);
    }

    fn error(&self, message: &str) {
        self.notify(NotificationLevel::Error, message);
    }

    fn info(&self, message: &str) {
        self.notify(NotificationLevel::Info, message);
    }
}

/// Notification sink that forwards to the tracing subscriber
#[derive(Debug, Clone, Default)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl NotificationSink for TracingSink {
    fn notify(&self, level: NotificationLevel, message: &str) {
        match level {
            NotificationLevel::Success => tracing::info!(level = %level, "{message}"),
            NotificationLevel::Error => tracing::error!(level = %level, "{message}"),
            NotificationLevel::Info => tracing::info!(level = %level, "{message}"),
        }
    }
}

/// In-memory notification capture for tests
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    notifications: Arc<Mutex<Vec<Notification>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All notifications emitted so far, in emission order
    pub fn emitted(&self) -> Vec<Notification> {
        self.notifications
            .lock()
            .expect("notification lock poisoned")
            .clone()
    }

    /// The most recent notification, if any
    pub fn last(&self) -> Option<Notification> {
        self.emitted().pop()
    }

    /// Count of notifications at the given level
    pub fn count_at(&self, level: NotificationLevel) -> usize {
        self.emitted().iter().filter(|n| n.level == level).count()
    }

    pub fn clear(&self) {
        self.notifications
            .lock()
            .expect("notification lock poisoned")
            .clear();
    }
}

impl NotificationSink for MemorySink {
    fn notify(&self, level: NotificationLevel, message: &str) {
        self.notifications
            .lock()
            .expect("notification lock poisoned")
            .push(Notification::new(level, message));
    }
}
