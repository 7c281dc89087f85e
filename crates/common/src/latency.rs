//! Simulated network latency for the in-memory repositories
//!
//! The mock persistence layer stands in for a remote backend, so every
//! repository operation awaits a configurable round-trip delay before
//! touching state. Tests construct repositories with `Latency::none()`.

use std::time::Duration;

use crate::config::DEFAULT_LATENCY_MS;

/// A fixed round-trip delay applied before each repository operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    delay: Duration,
}

impl Latency {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    /// Zero delay, for tests
    pub fn none() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Await the simulated round trip
    pub async fn simulate(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self::from_millis(DEFAULT_LATENCY_MS)
    }
}
