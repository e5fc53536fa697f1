//! Configuration schema for REST Relay.
//!
//! This module defines the configuration structure and validation logic for
//! the relay server settings.

use crate::proxy::FetchConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Main configuration structure for REST Relay.
///
/// Read from the `"rest-relay"` key of the settings file. Missing settings
/// fall back to defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelayConfig {
    /// Port the HTTP server listens on. Defaults to 3000.
    ///
    /// Must be greater than 0.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Interface to bind. Defaults to loopback since this is a local tool.
    #[serde(default = "default_host")]
    pub host: String,

    /// Path to the Postman environment export. Defaults to
    /// "postman_environment.json" in the working directory.
    #[serde(default = "default_environment_file")]
    pub environment_file: PathBuf,

    /// Directory holding the browser UI. Defaults to "public".
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,

    /// Directory saved responses are written to. Defaults to "downloads".
    #[serde(default = "default_downloads_dir")]
    pub downloads_dir: PathBuf,

    /// Upstream deadline in milliseconds.
    ///
    /// Unset by default: upstream calls wait indefinitely. Must be > 0 when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
            environment_file: default_environment_file(),
            public_dir: default_public_dir(),
            downloads_dir: default_downloads_dir(),
            timeout_ms: None,
        }
    }
}

impl RelayConfig {
    /// Validates the configuration and returns errors if any settings are invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("port must be greater than 0".to_string());
        }

        if self.host.trim().is_empty() {
            return Err("host must not be empty".to_string());
        }

        if self.environment_file.as_os_str().is_empty() {
            return Err("environmentFile must not be empty".to_string());
        }

        if self.timeout_ms == Some(0) {
            return Err("timeoutMs must be greater than 0".to_string());
        }

        Ok(())
    }

    /// Merges this configuration with another, using values from `other`.
    ///
    /// `other` was deserialized with defaults filled in, so every field is
    /// taken from it except an unset timeout, which keeps ours.
    pub fn merge(&self, other: &RelayConfig) -> Self {
        Self {
            port: other.port,
            host: other.host.clone(),
            environment_file: other.environment_file.clone(),
            public_dir: other.public_dir.clone(),
            downloads_dir: other.downloads_dir.clone(),
            timeout_ms: other.timeout_ms.or(self.timeout_ms),
        }
    }

    /// `host:port` string for binding the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Upstream deadline, if one is configured
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    /// Proxy settings derived from this configuration
    pub fn fetch_config(&self) -> FetchConfig {
        FetchConfig {
            timeout: self.timeout(),
        }
    }
}

// Default value functions for serde

fn default_port() -> u16 {
    3000
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_environment_file() -> PathBuf {
    PathBuf::from("postman_environment.json")
}

fn default_public_dir() -> PathBuf {
    PathBuf::from("public")
}

fn default_downloads_dir() -> PathBuf {
    PathBuf::from("downloads")
}
