//! Error types for configuration loading, saving, and typed access.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration operations.
///
/// I/O variants are raised only for genuine read/write failures; a backing
/// file that does not exist (or cannot be opened for reading) is a valid
/// empty-start state, not an error. The format variants are raised only by
/// the timeout accessor, the one setting with no sensible fallback. All
/// other degenerate inputs (missing keys, malformed quoting, unknown enum
/// text, unparsable booleans) degrade silently to documented defaults.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the backing configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the backing configuration file on save.
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A required key is absent from the entire lookup chain.
    #[error("Missing required key '{key}'. {hint}")]
    MissingKey {
        /// The absent key
        key: &'static str,
        /// Hint for how to provide the value
        hint: &'static str,
    },

    /// A key that must hold an integer holds non-numeric text.
    #[error("Invalid integer value '{value}' for key '{key}'")]
    InvalidInteger {
        /// The key holding the bad value
        key: &'static str,
        /// The offending raw value
        value: String,
    },
}

impl ConfigError {
    /// Creates a `MissingKey` error for a required key.
    #[must_use]
    pub const fn missing(key: &'static str, hint: &'static str) -> Self {
        Self::MissingKey { key, hint }
    }
}
