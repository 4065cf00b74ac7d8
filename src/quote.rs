//! Quote normalization for hand-edited property values.
//!
//! Configuration files in the wild carry values like `'example.com'` or
//! `"mydomain"`. These helpers strip such wrapping on read and enforce
//! single-quote wrapping on write for the fields that require it.

use std::sync::LazyLock;

use regex::Regex;

/// Matches zero or more leading quotes, a captured run of non-quote
/// characters, and zero or more trailing quotes.
static QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"['"]*([^'"]+)['"]*"#).expect("quote pattern is valid"));

/// Strips matching leading and trailing quote characters from a value.
///
/// The grammar is deliberately tolerant: the first run of non-quote
/// characters is returned, and input that contains no such run (for example
/// a string made entirely of quotes) passes through verbatim. This function
/// never fails; callers propagate absence with [`Option::map`].
///
/// # Examples
///
/// ```
/// use express_conf::quote::strip_quotes;
///
/// assert_eq!(strip_quotes("'example.com'"), "example.com");
/// assert_eq!(strip_quotes("\"mydomain\""), "mydomain");
/// assert_eq!(strip_quotes("plain"), "plain");
/// ```
#[must_use]
pub fn strip_quotes(value: &str) -> &str {
    QUOTED
        .captures(value)
        .and_then(|captures| captures.get(1))
        .map_or(value, |group| group.as_str())
}

/// Wraps a value in single quotes, stripping any existing quoting first.
///
/// Used by setters for fields that must be stored single-quoted regardless
/// of how the value arrives. An empty input yields `''`.
#[must_use]
pub fn ensure_single_quoted(value: &str) -> String {
    format!("'{}'", strip_quotes(value))
}
