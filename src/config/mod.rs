//! Configuration management for REST Relay.
//!
//! Settings come from an optional JSON file whose `"rest-relay"` object is
//! merged over the defaults, then from the `REST_RELAY_PORT` environment
//! variable. The result is passed to the server explicitly.

pub mod schema;

pub use schema::RelayConfig;

use serde_json::Value;
use std::fs;
use std::path::Path;

/// Settings key holding the relay configuration.
pub const SETTINGS_KEY: &str = "rest-relay";

/// Environment variable overriding the listen port.
pub const PORT_ENV_VAR: &str = "REST_RELAY_PORT";

/// Loads configuration from a settings JSON value.
///
/// Reads the `"rest-relay"` settings, merges them with defaults and validates
/// the result.
///
/// # Returns
///
/// `Ok(RelayConfig)` with the loaded configuration, or `Err` if validation fails.
///
/// # Example
///
/// ```
/// use rest_relay::config::load_config;
/// use serde_json::json;
///
/// let settings = json!({
///     "rest-relay": {
///         "port": 8080,
///         "timeoutMs": 5000
///     }
/// });
///
/// let config = load_config(Some(settings)).unwrap();
/// assert_eq!(config.port, 8080);
/// ```
pub fn load_config(settings_json: Option<Value>) -> Result<RelayConfig, String> {
    let mut config = RelayConfig::default();

    if let Some(relay_settings) = settings_json.as_ref().and_then(|s| s.get(SETTINGS_KEY)) {
        match serde_json::from_value::<RelayConfig>(relay_settings.clone()) {
            Ok(user_config) => {
                config = config.merge(&user_config);
            }
            Err(e) => {
                log::warn!(
                    "Failed to parse {} settings: {}. Using defaults.",
                    SETTINGS_KEY,
                    e
                );
            }
        }
    }

    config
        .validate()
        .map_err(|e| format!("Invalid configuration: {}", e))?;

    Ok(config)
}

/// Loads configuration from a settings file.
///
/// A missing file is not an error: defaults are used.
pub fn load_config_file(path: &Path) -> Result<RelayConfig, String> {
    if !path.is_file() {
        log::debug!("No settings file at {}, using defaults", path.display());
        return load_config(None);
    }

    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    let settings: Value = serde_json::from_str(&content)
        .map_err(|e| format!("Failed to parse {}: {}", path.display(), e))?;

    load_config(Some(settings))
}

/// Applies a port override, typically the value of `REST_RELAY_PORT`.
pub fn apply_port_override(
    mut config: RelayConfig,
    port: Option<&str>,
) -> Result<RelayConfig, String> {
    if let Some(raw) = port {
        config.port = raw
            .trim()
            .parse()
            .map_err(|_| format!("{} must be a port number, got '{}'", PORT_ENV_VAR, raw))?;
        config
            .validate()
            .map_err(|e| format!("Invalid configuration: {}", e))?;
    }
    Ok(config)
}
