//! Filename derivation for saved responses.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

/// Base name used when the URL yields nothing usable.
pub const DEFAULT_BASENAME: &str = "api-response";

/// Characters outside this set are replaced with `_`.
static UNSAFE_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9\-_.]").expect("Failed to compile filename regex"));

/// Last non-empty path segment of `url`, without query or fragment.
///
/// Returns `None` when the URL cannot be parsed or has no path segment.
pub fn last_path_segment(url: &str) -> Option<String> {
    let parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(e) => {
            log::warn!("Could not parse '{}' for a filename: {}", url, e);
            return None;
        }
    };

    let segment = parsed.path_segments()?.filter(|s| !s.is_empty()).last()?;
    let segment = segment.split(['?', '#']).next().unwrap_or_default();

    if segment.is_empty() {
        None
    } else {
        Some(segment.to_string())
    }
}

/// Replaces every character outside `[A-Za-z0-9-_.]` with `_`
pub fn sanitize_basename(name: &str) -> String {
    UNSAFE_CHARS.replace_all(name, "_").into_owned()
}

/// Derives the `.json` file name for a response fetched from `original_url`.
///
/// # Examples
///
/// - `Some("https://api.example.com/v1/users?page=2")` → `"users.json"`
/// - `Some("https://api.example.com/")` → `"api-response.json"`
/// - `None` → `"api-response.json"`
pub fn derive_filename(original_url: Option<&str>) -> String {
    let base = original_url
        .filter(|u| !u.is_empty())
        .and_then(last_path_segment)
        .unwrap_or_else(|| DEFAULT_BASENAME.to_string());

    format!("{}.json", sanitize_basename(&base))
}
