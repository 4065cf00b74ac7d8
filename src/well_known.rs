//! Canonical configuration file locations.

use std::path::PathBuf;

/// System-wide configuration file.
const SYSTEM_CONFIG_PATH: &str = "/etc/openshift/express.conf";

/// Directory under the user's home holding the per-user configuration.
const USER_CONFIG_DIR: &str = ".openshift";

/// File name of the per-user configuration.
const CONFIG_FILE_NAME: &str = "express.conf";

/// Returns the path of the system-wide configuration file.
#[must_use]
pub fn system_config_path() -> PathBuf {
    PathBuf::from(SYSTEM_CONFIG_PATH)
}

/// Returns the path of the per-user configuration file, or `None` when no
/// home directory can be resolved.
#[must_use]
pub fn user_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(USER_CONFIG_DIR).join(CONFIG_FILE_NAME))
}
