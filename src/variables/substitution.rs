//! Variable substitution engine for REST Relay
//!
//! Replaces `{{key}}` tokens with values from an [`Environment`]. Each key is
//! applied in its own pass, in mapping order, over the output of the previous
//! pass. A value that itself contains `{{other}}` text is therefore expanded
//! only if `other` comes later in the mapping.

use crate::environment::Environment;
use once_cell::sync::Lazy;
use regex::Regex;

/// Cached pattern for locating leftover `{{name}}` tokens.
static TOKEN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{([^{}]+)\}\}").expect("Failed to compile token regex"));

/// Substitutes every `{{key}}` token in `text` with its value from `env`.
///
/// - All occurrences of a token are replaced, not just the first
/// - Keys are matched literally; regex metacharacters in a key have no meaning
/// - Tokens naming keys absent from `env` are left as they are
/// - There is no escape syntax for a literal `{{...}}`
///
/// # Examples
///
/// ```
/// use rest_relay::environment::Environment;
/// use rest_relay::variables::substitute;
///
/// let env = Environment::from_pairs([("host", "example.com")]);
/// assert_eq!(substitute("https://{{host}}/api", &env), "https://example.com/api");
/// ```
pub fn substitute(text: &str, env: &Environment) -> String {
    // Fast path: nothing to replace
    if !text.contains("{{") {
        return text.to_string();
    }

    let mut result = text.to_string();
    for (key, value) in env.iter() {
        let token = format!("{{{{{}}}}}", key);
        if result.contains(&token) {
            result = result.replace(&token, value);
        }
    }
    result
}

/// Lists the `{{name}}` tokens still present in `text`, in order of appearance.
///
/// Used after substitution to report placeholders the environment did not
/// define.
pub fn unresolved_tokens(text: &str) -> Vec<String> {
    TOKEN_REGEX
        .captures_iter(text)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
