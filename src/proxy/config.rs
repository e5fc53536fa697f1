//! Proxy fetch configuration.

use std::time::Duration;

/// Configuration for outbound proxy calls.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchConfig {
    /// Deadline for a complete upstream response.
    ///
    /// `None` means no deadline: a hung upstream keeps the request open.
    pub timeout: Option<Duration>,
}

impl FetchConfig {
    /// Creates a config without a deadline
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the upstream deadline
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the shared HTTP client for these settings
    pub fn build_client(&self) -> reqwest::Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        builder.build()
    }
}
