//! express-conf: Layered properties-file configuration
//!
//! A library for loading key/value settings from properties-style text
//! files, with parent-chain fallback for absent keys, quote normalization
//! for hand-edited values, and typed accessors for the fixed set of
//! recognized Express client settings.

pub mod configuration;
pub mod defaults;
pub mod error;
pub mod keys;
pub mod options;
pub mod quote;
pub mod store;
pub mod well_known;

pub use configuration::ExpressConfiguration;
pub use error::ConfigError;
pub use options::ConfigurationOptions;
pub use store::PropertyStore;
