//! Layered key/value property store.
//!
//! A [`PropertyStore`] holds a local map of string entries plus an optional
//! parent store consulted only when a key is absent locally. Writes go to
//! the local map only; a fallthrough read never caches the parent's value.
//!
//! The backing text format is the classic properties grammar, one
//! `key=value` pair per line:
//! - lines starting with `#` or `!` are comments, blank lines are skipped
//! - the first `=` or `:` splits key from value, both sides trimmed
//! - a line without a separator maps the whole trimmed line to the empty
//!   value
//!
//! Saving overwrites the destination wholesale from the local map, so the
//! design assumes a single owning process per configuration file.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;

use crate::error::ConfigError;

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;

/// A key/value store with chain-of-fallback parent lookup.
#[derive(Debug, Clone, Default)]
pub struct PropertyStore {
    entries: BTreeMap<String, String>,
    parent: Option<Arc<PropertyStore>>,
}

impl PropertyStore {
    /// Creates an empty store with no parent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store that falls back to `parent` on local miss.
    #[must_use]
    pub fn with_parent(parent: Arc<Self>) -> Self {
        Self {
            entries: BTreeMap::new(),
            parent: Some(parent),
        }
    }

    /// Loads a store from an optional backing file, chained to an optional
    /// parent.
    ///
    /// An absent path, a missing file, or a file the process may not read
    /// all yield an empty store with the given parent; that is the valid
    /// empty-start state, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::FileRead`] for any other I/O failure.
    pub fn load(path: Option<&Path>, parent: Option<Arc<Self>>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self {
                entries: BTreeMap::new(),
                parent,
            });
        };

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::PermissionDenied) => {
                tracing::debug!(
                    "Config file '{}' not readable ({}), starting empty",
                    path.display(),
                    e.kind()
                );
                return Ok(Self {
                    entries: BTreeMap::new(),
                    parent,
                });
            }
            Err(e) => {
                return Err(ConfigError::FileRead {
                    path: path.to_path_buf(),
                    source: e,
                });
            }
        };

        let entries = Self::parse(&content);
        tracing::debug!(
            "Loaded {} entries from '{}'",
            entries.len(),
            path.display()
        );

        Ok(Self { entries, parent })
    }

    /// Parses properties text into a key/value map.
    ///
    /// When a key appears more than once the last occurrence wins.
    #[must_use]
    pub fn parse(content: &str) -> BTreeMap<String, String> {
        let mut entries = BTreeMap::new();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }

            match line.split_once(['=', ':']) {
                Some((key, value)) => {
                    entries.insert(key.trim().to_string(), value.trim().to_string());
                }
                None => {
                    entries.insert(line.to_string(), String::new());
                }
            }
        }

        entries
    }

    /// Looks up a key locally, falling through to the parent chain on miss.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        match self.entries.get(key) {
            Some(value) => Some(value.as_str()),
            None => self.parent.as_ref().and_then(|parent| parent.get(key)),
        }
    }

    /// Looks up a key in the local map only.
    #[must_use]
    pub fn get_local(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Writes a key into the local map. The parent chain is never mutated.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Returns the local entries in key order. Parent entries are excluded.
    pub fn local_entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Returns the number of local entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the local map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Saves the local entries to an optional backing file.
    ///
    /// A `None` path is a silent no-op: a store with no backing file is
    /// explicitly allowed to be write-discarding. Otherwise the destination
    /// is overwritten wholesale with the local map only; parent entries are
    /// never persisted.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::FileWrite`] if the file cannot be written.
    pub fn save(&self, path: Option<&Path>) -> Result<(), ConfigError> {
        let Some(path) = path else {
            return Ok(());
        };

        std::fs::write(path, self.serialize()).map_err(|e| ConfigError::FileWrite {
            path: path.to_path_buf(),
            source: e,
        })?;

        tracing::debug!(
            "Saved {} entries to '{}'",
            self.entries.len(),
            path.display()
        );

        Ok(())
    }

    /// Serializes the local map as properties text with a header comment.
    fn serialize(&self) -> String {
        let mut out = String::from("#\n");
        for (key, value) in &self.entries {
            out.push_str(key);
            out.push('=');
            out.push_str(value);
            out.push('\n');
        }
        out
    }
}
