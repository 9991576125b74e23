//! Client configuration and backend response types.

use serde::Deserialize;
use std::time::Duration;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for connecting to the device/playback service.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the service (e.g., "http://192.168.1.20:8000")
    pub url: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a config with just the URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Error body returned by the service, e.g.
/// `{"status": "error", "message": "Device not found"}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub status: Option<String>,
    pub message: Option<String>,
}
