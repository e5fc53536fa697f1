//! Environment data models for REST Relay
//!
//! An environment file is a Postman-style export: an ordered list of records,
//! each carrying a key, a value and an `enabled` flag. Only enabled records
//! make it into the [`Environment`] mapping used for substitution.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single variable record as it appears in the environment file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnvironmentRecord {
    /// Variable name referenced as `{{key}}`
    pub key: String,

    /// Raw value; scalars other than strings are stringified on load
    #[serde(default)]
    pub value: Value,

    /// Records without an explicit `enabled: true` are ignored
    #[serde(default)]
    pub enabled: bool,

    /// Postman variable type ("default", "secret", ...), informational only
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl EnvironmentRecord {
    /// Creates an enabled record with a string value
    pub fn enabled(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Value::String(value.into()),
            enabled: true,
            kind: None,
        }
    }

    /// Creates a disabled record with a string value
    pub fn disabled(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            enabled: false,
            ..Self::enabled(key, value)
        }
    }

    /// Returns the value as substitution text.
    ///
    /// Strings are used as-is, numbers and booleans are formatted, `null`
    /// becomes the empty string and arrays/objects become compact JSON.
    pub fn value_text(&self) -> String {
        match &self.value {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Null => String::new(),
            other => other.to_string(),
        }
    }
}

/// Top-level shape of the environment file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnvironmentFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Environment display name (e.g., "dev", "staging")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Variable records in file order
    pub values: Vec<EnvironmentRecord>,
}

/// The loaded mapping of variable name to substitution value.
///
/// Entries keep the order in which their keys first appeared in the source,
/// since substitution runs one pass per key in that order. Keys are unique
/// and never empty. There is no mutation API: the mapping is built once and
/// shared read-only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    name: Option<String>,
    entries: Vec<(String, String)>,
}

impl Environment {
    /// Creates an empty environment
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the mapping from file records, keeping only enabled ones.
    ///
    /// A repeated key replaces the earlier value but keeps the earlier
    /// position. Records with an empty key are skipped.
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a EnvironmentRecord>,
    {
        let mut env = Self::new();
        for record in records.into_iter().filter(|r| r.enabled) {
            if record.key.is_empty() {
                log::warn!("Skipping enabled environment record with an empty key");
                continue;
            }
            env.upsert(&record.key, record.value_text());
        }
        env
    }

    /// Builds the mapping from a parsed environment file
    pub fn from_file(file: &EnvironmentFile) -> Self {
        let mut env = Self::from_records(&file.values);
        env.name = file.name.clone();
        env
    }

    /// Builds the mapping from plain key/value pairs, in order.
    ///
    /// Mostly useful for injecting a fixed mapping in tests.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut env = Self::new();
        for (key, value) in pairs {
            let key = key.into();
            if !key.is_empty() {
                env.upsert(&key, value.into());
            }
        }
        env
    }

    fn upsert(&mut self, key: &str, value: String) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key.to_string(), value)),
        }
    }

    /// Environment display name, if the source file had one
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Gets a variable value by name
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Checks if a variable exists
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterates over `(key, value)` pairs in mapping order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Variable names in mapping order
    pub fn keys(&self) -> Vec<&str> {
        self.entries.iter().map(|(k, _)| k.as_str()).collect()
    }

    /// Returns the number of variables
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if the environment has no variables
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
