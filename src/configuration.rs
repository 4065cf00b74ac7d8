//! Typed configuration facade over the layered property store.
//!
//! # Layering
//!
//! A configuration owns a [`PropertyStore`] chained to an optional parent
//! configuration. Lookups resolve with the following priority (highest to
//! lowest):
//!
//! 1. **Local entries** - values read from this configuration's backing file
//!    or written through its setters
//! 2. **Parent chain** - each ancestor consulted in order on local miss
//!
//! The parent's store is snapshotted at construction; a parent mutated
//! afterwards does not change what existing children resolve.
//!
//! # Value normalization
//!
//! Getters never return quote-wrapped values. The server and domain setters
//! enforce single-quote wrapping on the stored raw value regardless of how
//! the value arrives.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::defaults;
use crate::error::ConfigError;
use crate::keys;
use crate::options::ConfigurationOptions;
use crate::quote::{ensure_single_quoted, strip_quotes};
use crate::store::PropertyStore;
use crate::well_known;

#[cfg(test)]
#[path = "configuration_tests.rs"]
mod tests;

/// A layered, text-file-backed configuration with typed accessors for the
/// recognized Express client settings.
#[derive(Debug, Clone)]
pub struct ExpressConfiguration {
    /// Backing file, if any. `None` means purely in-memory.
    file: Option<PathBuf>,
    store: PropertyStore,
}

impl ExpressConfiguration {
    /// Creates an empty in-memory configuration with no parent.
    #[must_use]
    pub fn new() -> Self {
        Self {
            file: None,
            store: PropertyStore::new(),
        }
    }

    /// Creates a configuration from an optional backing file, chained to an
    /// optional parent configuration.
    ///
    /// The store is materialized exactly once, before any accessor is
    /// usable: read-through from the file if given (an absent or unreadable
    /// file starts empty), chained to a snapshot of the parent's store if
    /// given.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::FileRead`] for I/O failures other than the
    /// file being absent or unreadable.
    pub fn load(file: Option<&Path>, parent: Option<&Self>) -> Result<Self, ConfigError> {
        let parent_store = parent.map(|p| Arc::new(p.store.clone()));
        let store = PropertyStore::load(file, parent_store)?;

        Ok(Self {
            file: file.map(Path::to_path_buf),
            store,
        })
    }

    /// Creates a configuration backed by the given file, with no parent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::FileRead`] for I/O failures other than the
    /// file being absent or unreadable.
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        Self::load(Some(&path), None)
    }

    /// Creates an in-memory configuration chained to `parent`.
    #[must_use]
    pub fn with_parent(parent: &Self) -> Self {
        Self {
            file: None,
            store: PropertyStore::with_parent(Arc::new(parent.store.clone())),
        }
    }

    /// Creates the built-in defaults configuration.
    ///
    /// Seeds the settings that must always resolve somewhere in the chain:
    /// the request timeout and the default server host.
    #[must_use]
    pub fn defaults() -> Self {
        let mut config = Self::new();
        config.store.set(keys::TIMEOUT, defaults::TIMEOUT_MILLIS);
        config.store.set(keys::LIBRA_SERVER, defaults::LIBRA_SERVER);
        config
    }

    /// Creates an overlay on `parent` whose local entries are the proxy
    /// keys found in the process environment (`proxyHost`, `proxyPort`,
    /// `proxySet`).
    #[must_use]
    pub fn proxy_env_overrides(parent: &Self) -> Self {
        Self::proxy_overlay_with(|key| std::env::var(key).ok(), parent)
    }

    /// Builds the canonical chain: built-in defaults, overridden by the
    /// system config file, overridden by the user config file, overridden
    /// by the proxy environment keys. Absent files at any layer are
    /// tolerated.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::FileRead`] for genuine I/O failures while
    /// reading the system or user file.
    pub fn merged() -> Result<Self, ConfigError> {
        let defaults = Self::defaults();
        let system = Self::load(Some(&well_known::system_config_path()), Some(&defaults))?;
        let user = match well_known::user_config_path() {
            Some(path) => Self::load(Some(&path), Some(&system))?,
            None => system,
        };

        Ok(Self::proxy_env_overrides(&user))
    }

    /// Overlay constructor with an injectable environment lookup.
    fn proxy_overlay_with(lookup: impl Fn(&str) -> Option<String>, parent: &Self) -> Self {
        let mut config = Self::with_parent(parent);
        for key in [keys::PROXY_HOST, keys::PROXY_PORT, keys::PROXY_SET] {
            if let Some(value) = lookup(key) {
                config.store.set(key, value);
            }
        }
        config
    }

    /// Returns the backing file path, if any.
    #[must_use]
    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    /// Returns the underlying property store.
    ///
    /// Only the local entries are iterable through it; a merged view of the
    /// parent chain is deliberately not exposed.
    #[must_use]
    pub fn properties(&self) -> &PropertyStore {
        &self.store
    }

    /// Persists the local entries to the backing file.
    ///
    /// A configuration constructed without a file path is a guaranteed
    /// no-op here, never an error. Parent entries are never persisted.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::FileWrite`] if the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.store.save(self.file.as_deref())
    }

    /// Returns the login name, with any quoting stripped.
    #[must_use]
    pub fn rhlogin(&self) -> Option<&str> {
        self.store.get(keys::RHLOGIN).map(strip_quotes)
    }

    /// Sets the login name verbatim.
    pub fn set_rhlogin(&mut self, rhlogin: &str) {
        self.store.set(keys::RHLOGIN, rhlogin);
    }

    /// Returns the server URL, quote-stripped and carrying an `https://`
    /// scheme prefix when the stored value has no scheme.
    #[must_use]
    pub fn libra_server(&self) -> Option<String> {
        self.store
            .get(keys::LIBRA_SERVER)
            .map(|value| ensure_https(strip_quotes(value)))
    }

    /// Sets the server, stored single-quoted.
    pub fn set_libra_server(&mut self, server: &str) {
        self.store.set(keys::LIBRA_SERVER, ensure_single_quoted(server));
    }

    /// Returns the application domain, with any quoting stripped.
    #[must_use]
    pub fn libra_domain(&self) -> Option<&str> {
        self.store.get(keys::LIBRA_DOMAIN).map(strip_quotes)
    }

    /// Sets the domain, stored single-quoted.
    pub fn set_libra_domain(&mut self, domain: &str) {
        self.store.set(keys::LIBRA_DOMAIN, ensure_single_quoted(domain));
    }

    /// Returns the account password, with any quoting stripped.
    #[must_use]
    pub fn password(&self) -> Option<&str> {
        self.store.get(keys::PASSWORD).map(strip_quotes)
    }

    /// Returns the client identifier verbatim, without quote stripping.
    #[must_use]
    pub fn client_id(&self) -> Option<&str> {
        self.store.get(keys::CLIENT_ID)
    }

    /// Returns the request timeout in milliseconds.
    ///
    /// This is the one accessor that does not degrade gracefully: the value
    /// has no sensible fallback at this layer, so callers must pre-seed a
    /// default via the parent chain (see [`ExpressConfiguration::defaults`]).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingKey`] when the key is absent from the
    /// entire chain and [`ConfigError::InvalidInteger`] when the stored
    /// text is not a number.
    pub fn timeout_millis(&self) -> Result<u64, ConfigError> {
        let raw = self.store.get(keys::TIMEOUT).ok_or(ConfigError::missing(
            keys::TIMEOUT,
            "Seed a default via the parent chain or set it in the config file",
        ))?;

        raw.parse().map_err(|_| ConfigError::InvalidInteger {
            key: keys::TIMEOUT,
            value: raw.to_string(),
        })
    }

    /// Returns the SSL-cipher policy; absent or unrecognized text resolves
    /// to [`ConfigurationOptions::No`].
    #[must_use]
    pub fn disable_bad_ssl_ciphers(&self) -> ConfigurationOptions {
        ConfigurationOptions::safe_parse(
            self.store
                .get(keys::DISABLE_BAD_SSL_CIPHERS)
                .map(strip_quotes),
            ConfigurationOptions::No,
        )
    }

    /// Sets the SSL-cipher policy, stored in its canonical form.
    pub fn set_disable_bad_ssl_ciphers(&mut self, option: ConfigurationOptions) {
        self.store
            .set(keys::DISABLE_BAD_SSL_CIPHERS, option.as_str());
    }

    /// Returns the proxy host, with any quoting stripped.
    #[must_use]
    pub fn proxy_host(&self) -> Option<&str> {
        self.store.get(keys::PROXY_HOST).map(strip_quotes)
    }

    /// Returns the proxy port, with any quoting stripped.
    #[must_use]
    pub fn proxy_port(&self) -> Option<&str> {
        self.store.get(keys::PROXY_PORT).map(strip_quotes)
    }

    /// Returns whether a proxy is configured; absent or unparsable text
    /// yields `false`, never an error.
    #[must_use]
    pub fn proxy_set(&self) -> bool {
        self.store
            .get(keys::PROXY_SET)
            .map(strip_quotes)
            .is_some_and(|value| value.eq_ignore_ascii_case("true"))
    }
}

impl Default for ExpressConfiguration {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ExpressConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = self
            .file
            .as_ref()
            .map_or_else(|| "none".to_string(), |p| p.display().to_string());

        write!(
            f,
            "Configuration {{ file: {file}, local entries: {} }}",
            self.store.len()
        )
    }
}

// Helper functions

const SCHEME_SEPARATOR: &str = "://";

/// Prepends `https://` when the value carries no scheme at all. Anything
/// beyond this prefix normalization is out of scope; a value with an
/// explicit scheme passes through unchanged.
fn ensure_https(url: &str) -> String {
    if url.contains(SCHEME_SEPARATOR) {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}
