//! Configuration loading and live selection config
//!
//! Configuration is merged from defaults, an optional TOML file and
//! `HYPERDRIVE_`-prefixed environment variables. The selection portion is
//! additionally held behind a live handle so the running selector can pick
//! up validated updates without a restart; invalid updates are rejected
//! and the prior values stay in force.

/// Figment-based configuration loader
pub mod loader;
/// Typed configuration structures
pub mod types;

pub use loader::ConfigLoader;
pub use types::{
    HyperDriveConfig, LoggingConfig, SelectionConfig, SelectionConfigHandle, SelectionWeights,
};
