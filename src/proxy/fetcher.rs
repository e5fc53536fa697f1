//! Proxy fetcher built on reqwest.
//!
//! Substitutes environment variables into a user-supplied URL, issues a GET
//! and normalizes the outcome into `Result<Value, FetchError>`.

use crate::environment::Environment;
use crate::proxy::config::FetchConfig;
use crate::proxy::error::{Detail, FetchError};
use crate::variables::{substitute, unresolved_tokens};
use serde_json::Value;
use std::sync::Arc;

/// Forwards GET requests to templated URLs.
///
/// Holds a shared HTTP client and the immutable environment mapping. Calls
/// are independent: concurrent `fetch` calls share nothing mutable.
#[derive(Debug, Clone)]
pub struct ProxyFetcher {
    client: reqwest::Client,
    environment: Arc<Environment>,
}

impl ProxyFetcher {
    /// Creates a fetcher with a client built from `config`
    pub fn new(environment: Arc<Environment>, config: &FetchConfig) -> reqwest::Result<Self> {
        Ok(Self::with_client(config.build_client()?, environment))
    }

    /// Creates a fetcher around an existing client
    pub fn with_client(client: reqwest::Client, environment: Arc<Environment>) -> Self {
        Self {
            client,
            environment,
        }
    }

    /// The environment used for substitution
    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Validates `raw_url` and substitutes environment variables into it.
    pub fn resolve_url(&self, raw_url: &str) -> Result<String, FetchError> {
        if raw_url.trim().is_empty() {
            return Err(FetchError::MissingUrl);
        }

        let final_url = substitute(raw_url, &self.environment);
        if final_url != raw_url {
            log::debug!("Substituted URL: {} -> {}", raw_url, final_url);
        }

        let leftover = unresolved_tokens(&final_url);
        if !leftover.is_empty() {
            log::warn!(
                "URL still contains undefined variables: {}",
                leftover.join(", ")
            );
        }

        Ok(final_url)
    }

    /// Fetches `raw_url` and returns the upstream JSON as-is.
    ///
    /// # Errors
    ///
    /// - [`FetchError::MissingUrl`] when `raw_url` is blank (no network call)
    /// - [`FetchError::Transport`] when the upstream cannot be reached
    /// - [`FetchError::Status`] when the upstream answers with a non-2xx status
    /// - [`FetchError::Parse`] when a 2xx body is not JSON
    pub async fn fetch(&self, raw_url: &str) -> Result<Value, FetchError> {
        let final_url = self.resolve_url(raw_url)?;
        log::info!("GET {}", final_url);

        let response = self.client.get(&final_url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await?;
            let status_text = status.canonical_reason().unwrap_or("Unknown").to_string();
            log::debug!("Upstream {} responded {}", final_url, status.as_u16());

            return Err(FetchError::Status {
                status: status.as_u16(),
                status_text,
                detail: Detail::from_body(&body),
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| FetchError::Parse(e.to_string()))
    }
}
