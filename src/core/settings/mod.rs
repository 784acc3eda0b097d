//! core::settings
//!
//! Persisted argument values reused across invocations.
//!
//! # Overview
//!
//! The settings store is a flat key-value document. Keys are descriptor
//! names (e.g. `service-url`), values are the raw strings a user would
//! type on the command line. The input layer reads a [`SettingsSnapshot`]
//! as its lowest-priority non-default source, and writes resolved values
//! back when `--save` is given.
//!
//! # Storage
//!
//! [`FileSettingsStore`] keeps the snapshot as a TOML table at
//! `~/.witx/settings.toml` unless a path is supplied (see
//! [`crate::core::paths`]).
//!
//! # Example
//!
//! ```ignore
//! use witx::core::settings::{FileSettingsStore, SettingsStore};
//!
//! let store = FileSettingsStore::with_path("/tmp/settings.toml".into());
//! let snapshot = store.load()?;
//! if let Some(url) = snapshot.get("service-url") {
//!     println!("service url: {}", url);
//! }
//! ```

mod file_store;

pub use file_store::FileSettingsStore;

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from settings operations.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse settings file '{path}': {message}")]
    Parse { path: PathBuf, message: String },

    #[error("failed to write settings file '{path}': {message}")]
    Write { path: PathBuf, message: String },

    #[error("settings file '{path}' is locked by another process")]
    Locked { path: PathBuf },

    #[error("home directory not found")]
    NoHomeDir,
}

/// Raw values loaded from the settings store.
///
/// Values are untyped strings; descriptors parse them on use.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettingsSnapshot {
    values: BTreeMap<String, String>,
}

impl SettingsSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a raw value by argument name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Overlay `other` onto this snapshot; keys in `other` win.
    pub fn merge(&mut self, other: &SettingsSnapshot) {
        for (k, v) in &other.values {
            self.values.insert(k.clone(), v.clone());
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SettingsSnapshot {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Load/save contract for a settings backend.
///
/// Implementations must be thread-safe (Send + Sync).
pub trait SettingsStore: Send + Sync {
    /// Load the current snapshot. A store with nothing persisted yields an
    /// empty snapshot, not an error.
    fn load(&self) -> Result<SettingsSnapshot, SettingsError>;

    /// Persist `values` as a superset merge: keys already stored and absent
    /// from `values` are kept, keys present in `values` are overwritten.
    fn save(&self, values: &SettingsSnapshot) -> Result<(), SettingsError>;

    /// Whether anything has been persisted yet.
    fn exists(&self) -> bool;

    /// Human-readable location, for messages.
    fn location(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_overwrites_and_keeps() {
        let mut base: SettingsSnapshot = [("a", "1"), ("b", "2")].into_iter().collect();
        let update: SettingsSnapshot = [("b", "3"), ("c", "4")].into_iter().collect();

        base.merge(&update);

        assert_eq!(base.get("a"), Some("1"));
        assert_eq!(base.get("b"), Some("3"));
        assert_eq!(base.get("c"), Some("4"));
        assert_eq!(base.len(), 3);
    }

    #[test]
    fn serializes_as_flat_table() {
        let snapshot: SettingsSnapshot = [("service-url", "https://example.test")]
            .into_iter()
            .collect();
        let text = toml::to_string(&snapshot).expect("serialize");
        assert_eq!(text.trim(), "service-url = \"https://example.test\"");
    }
}
