//! Outbound response bodies produced by the relay server.

use serde::{Deserialize, Serialize};

/// Uniform error body returned for every failed request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Short description of what went wrong
    pub error: String,

    /// Longer explanation, such as the upstream status and body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,

    /// Upstream HTTP status, when the upstream answered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
            status: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_status(mut self, status: Option<u16>) -> Self {
        self.status = status;
        self
    }
}

/// Body returned by `POST /save-json` on success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveResponse {
    pub message: String,
    pub filename: String,
}

/// Body returned by `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    /// Number of variables in the loaded environment
    pub variables: usize,
}
