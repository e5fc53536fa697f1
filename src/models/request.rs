//! Inbound request bodies accepted by the relay server.

use serde::{Deserialize, Serialize};

/// Body of `POST /call-api`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallApiRequest {
    /// URL template typed by the user, possibly holding `{{variables}}`
    #[serde(default)]
    pub api_url: Option<String>,
}

impl CallApiRequest {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: Some(api_url.into()),
        }
    }

    /// The URL, or the empty string when absent
    pub fn url(&self) -> &str {
        self.api_url.as_deref().unwrap_or_default()
    }
}

/// Body of `POST /save-json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveJsonRequest {
    /// JSON text as displayed by the UI
    #[serde(default)]
    pub json_data: Option<String>,

    /// URL as typed by the user, before substitution
    #[serde(default)]
    pub original_url: Option<String>,
}
