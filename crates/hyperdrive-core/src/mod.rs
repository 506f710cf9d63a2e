//! HyperDrive Orchestration Runtime
//!
//! Tracks pluggable backend providers per capability category, keeps
//! exactly one current provider active per category, and reroutes to
//! alternatives under failure, for replication or for load distribution
//! using selectable ranking strategies fed by live performance telemetry.
//!
//! Components, leaves first:
//!
//! - [`registry::ProviderRegistry`] - registered handles, current
//!   pointers, candidate lists
//! - [`monitor::PerformanceMonitor`] - telemetry snapshots and the switch
//!   audit trail
//! - [`selector::Selector`] - strategy registry reducing a candidate pool
//!   to one provider
//! - [`switcher::ProviderSwitcher`] - guarded, audited transitions of the
//!   current pointers
//! - [`configurator::ProviderConfigurator`] - candidate list CRUD and
//!   feature flags
//! - [`orchestrator::HyperDrive`] - the facade composing all of the above

/// Candidate list CRUD and feature flags
pub mod configurator;
/// Configuration loading and live selection config
pub mod config;
/// Runtime constants
pub mod constants;
/// Structured logging initialization
pub mod logging;
/// Metrics emission for selections and switches
pub mod metrics;
/// Telemetry snapshots and switch audit trail
pub mod monitor;
/// Facade composing the orchestration components
pub mod orchestrator;
/// Provider handles, current pointers and candidate lists
pub mod registry;
/// Selection strategies
pub mod selector;
/// Guarded provider switching
pub mod switcher;

// Re-export the facade types most callers need
pub use config::{ConfigLoader, HyperDriveConfig, SelectionConfig, SelectionConfigHandle};
pub use orchestrator::{HyperDrive, HyperDriveDeps};
