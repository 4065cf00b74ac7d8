//! Default values for configuration settings.
//!
//! Centralized constants to avoid magic values scattered across the codebase.
//! Defaults are stored as strings because they are seeded into the raw
//! property chain, not substituted at accessor level.

/// Default request timeout in milliseconds (3 minutes).
pub const TIMEOUT_MILLIS: &str = "180000";

/// Default server host the client connects to.
pub const LIBRA_SERVER: &str = "openshift.redhat.com";
