//! Environment file loader for REST Relay
//!
//! Reads a Postman environment export (`postman_environment.json` by default)
//! once at startup. Loading never stops the server: any failure degrades to an
//! empty mapping with a warning.

use super::models::{Environment, EnvironmentFile};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Errors that can occur during environment loading
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    /// Environment file does not exist
    #[error("Environment file not found at {}", .0.display())]
    NotFound(PathBuf),

    /// IO error occurred while reading file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// File content is not a valid environment export
    #[error("Failed to parse environment file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Loads the environment mapping from `path`.
///
/// # Returns
///
/// * `Ok(Environment)` - Mapping built from the enabled records
/// * `Err(EnvError)` - If the file is missing, unreadable or malformed
pub fn load_environment(path: &Path) -> Result<Environment, EnvError> {
    if !path.is_file() {
        return Err(EnvError::NotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)?;
    parse_environment(&content)
}

/// Parses environment file content into a mapping
pub fn parse_environment(content: &str) -> Result<Environment, EnvError> {
    let file: EnvironmentFile = serde_json::from_str(content)?;
    Ok(Environment::from_file(&file))
}

/// Loads the environment mapping, falling back to an empty one on any error.
///
/// The outcome is logged either way: the variable names on success (values
/// only at debug level, they may hold secrets), the failure reason otherwise.
pub fn load_environment_or_default(path: &Path) -> Environment {
    match load_environment(path) {
        Ok(env) => {
            log::info!(
                "Loaded environment {}from {}: {} variable(s) [{}]",
                env.name().map(|n| format!("'{}' ", n)).unwrap_or_default(),
                path.display(),
                env.len(),
                env.keys().join(", ")
            );
            for (key, value) in env.iter() {
                log::debug!("  {} = {}", key, value);
            }
            env
        }
        Err(EnvError::NotFound(missing)) => {
            log::warn!(
                "Environment file not found at {}; continuing without variables",
                missing.display()
            );
            Environment::new()
        }
        Err(e) => {
            log::warn!(
                "Could not load environment from {}: {}; continuing without variables",
                path.display(),
                e
            );
            Environment::new()
        }
    }
}
