//! Proxy fetch error types.
//!
//! Every way a proxied call can fail is a variant of [`FetchError`], so the
//! server boundary pattern-matches on the kind instead of probing the shape
//! of an error payload.

use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Body of a failed upstream response.
///
/// Parsed JSON when the body is valid JSON, the raw text otherwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Detail {
    Json(Value),
    Text(String),
}

impl Detail {
    /// Interprets an upstream error body
    pub fn from_body(body: &str) -> Self {
        match serde_json::from_str::<Value>(body) {
            Ok(value) => Detail::Json(value),
            Err(_) => Detail::Text(body.to_string()),
        }
    }
}

impl fmt::Display for Detail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Detail::Json(value) => {
                let pretty = serde_json::to_string_pretty(value).map_err(|_| fmt::Error)?;
                f.write_str(&pretty)
            }
            Detail::Text(text) => f.write_str(text),
        }
    }
}

/// Errors that can occur while proxying a request.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The caller supplied no URL, or only whitespace.
    #[error("API URL is required")]
    MissingUrl,

    /// The upstream could not be reached.
    ///
    /// Covers invalid URLs, DNS failures, refused connections, TLS errors and
    /// the optional deadline expiring.
    #[error("Network error: {0}")]
    Transport(String),

    /// The upstream answered with a non-success status.
    #[error("External API returned {status} {status_text}. Details: {detail}")]
    Status {
        status: u16,
        status_text: String,
        detail: Detail,
    },

    /// The upstream answered with success but the body is not JSON.
    #[error("Response body is not valid JSON: {0}")]
    Parse(String),
}

impl FetchError {
    /// Short machine-readable name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::MissingUrl => "validation",
            FetchError::Transport(_) => "upstream_transport",
            FetchError::Status { .. } => "upstream_status",
            FetchError::Parse(_) => "upstream_parse",
        }
    }

    /// Upstream HTTP status, when the upstream answered at all
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Transport(format!("Request timed out: {}", err))
        } else if err.is_connect() {
            FetchError::Transport(format!("Connection failed: {}", err))
        } else {
            FetchError::Transport(err.to_string())
        }
    }
}
