//! Saving fetched responses to disk.
//!
//! The UI sends back the JSON text it displayed along with the URL the user
//! typed (before substitution). The text is validated, then written verbatim
//! into the downloads directory under a name derived from that URL.

pub mod filename;

pub use filename::{derive_filename, sanitize_basename, DEFAULT_BASENAME};

use std::io;
use std::path::{Path, PathBuf};

/// Errors that can occur while saving a response
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    /// The submitted text is not valid JSON
    #[error("Content is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Creating the directory or writing the file failed
    #[error("Failed to write file: {0}")]
    Io(#[from] io::Error),
}

/// Validates `json_text` and writes it to `dir`.
///
/// The directory is created if missing. An existing file with the same name
/// is overwritten.
///
/// # Returns
///
/// The path of the written file.
pub async fn save_json(
    dir: &Path,
    json_text: &str,
    original_url: Option<&str>,
) -> Result<PathBuf, SaveError> {
    serde_json::from_str::<serde_json::Value>(json_text)?;

    let path = dir.join(derive_filename(original_url));
    tokio::fs::create_dir_all(dir).await?;
    tokio::fs::write(&path, json_text).await?;

    log::info!("Saved response to {}", path.display());
    Ok(path)
}
