//! Three-valued settings and safe enum parsing.

use std::fmt;

/// Value of a boolean-like setting that also supports an automatic state.
///
/// Parsing is deliberately lenient: configuration files are hand-edited, so
/// unknown or absent text must degrade to a fallback instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigurationOptions {
    /// The setting is enabled.
    Yes,
    /// The setting is disabled.
    No,
    /// The implementation decides.
    Auto,
}

impl ConfigurationOptions {
    /// Parses a value case-insensitively, resolving to `fallback` when the
    /// input is absent or matches no option. Never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use express_conf::ConfigurationOptions;
    ///
    /// let no = ConfigurationOptions::No;
    /// assert_eq!(ConfigurationOptions::safe_parse(Some("yEs"), no), ConfigurationOptions::Yes);
    /// assert_eq!(ConfigurationOptions::safe_parse(Some("bogus"), no), no);
    /// assert_eq!(ConfigurationOptions::safe_parse(None, no), no);
    /// ```
    #[must_use]
    pub fn safe_parse(value: Option<&str>, fallback: Self) -> Self {
        let Some(value) = value else {
            return fallback;
        };

        match value.to_ascii_uppercase().as_str() {
            "YES" => Self::Yes,
            "NO" => Self::No,
            "AUTO" => Self::Auto,
            _ => fallback,
        }
    }

    /// Returns the canonical stored form of this option.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "YES",
            Self::No => "NO",
            Self::Auto => "AUTO",
        }
    }
}

impl fmt::Display for ConfigurationOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
