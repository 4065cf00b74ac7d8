//! Recognized setting keys.
//!
//! These strings must match existing configuration files verbatim; they are
//! the on-disk interop surface and must never be renamed.

/// Login name for the platform account.
pub const RHLOGIN: &str = "default_rhlogin";

/// Server the client connects to.
pub const LIBRA_SERVER: &str = "libra_server";

/// Application domain (namespace).
pub const LIBRA_DOMAIN: &str = "libra_domain";

/// Account password.
pub const PASSWORD: &str = "rhpassword";

/// Client identifier reported to the server.
pub const CLIENT_ID: &str = "client_id";

/// Request timeout in milliseconds.
pub const TIMEOUT: &str = "timeout";

/// Policy for disabling known-bad SSL ciphers.
pub const DISABLE_BAD_SSL_CIPHERS: &str = "disable_bad_sslciphers";

/// Proxy host, sourced from the process environment overlay.
pub const PROXY_HOST: &str = "proxyHost";

/// Proxy port, sourced from the process environment overlay.
pub const PROXY_PORT: &str = "proxyPort";

/// Proxy enable flag, sourced from the process environment overlay.
pub const PROXY_SET: &str = "proxySet";
