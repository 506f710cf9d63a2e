//! HyperDrive Domain Layer
//!
//! Core types shared by every other layer of the HyperDrive runtime:
//! provider categories and identities, performance metrics value objects,
//! selection strategy identifiers, the uniform operation outcome envelope,
//! the error taxonomy, and the port contracts implemented by external
//! collaborators (provider adapters and the ranking engine).
//!
//! This crate is deliberately free of runtime machinery - no locks, no
//! maps, no I/O. Everything stateful lives in `hyperdrive-core`.

/// Aggregate configuration value objects (candidate lists, flags)
pub mod configuration;
/// Error taxonomy and result alias
pub mod error;
/// Performance metrics and switch audit value objects
pub mod metrics;
/// Operation outcome envelope returned across the public boundary
pub mod outcome;
/// Boundary contracts implemented by external collaborators
pub mod ports;
/// Provider categories, identities and candidate list names
pub mod provider;
/// Selection strategy identifiers
pub mod strategy;

// Re-export commonly used types for convenience
pub use configuration::{HyperDriveConfiguration, ProviderLists};
pub use error::{Error, Result};
pub use metrics::{ProviderMetrics, SwitchRecord, SwitchStatus};
pub use outcome::OperationOutcome;
pub use ports::{
    KeyManagerProvider, MapProvider, NetworkProvider, NftProvider, OperationContext,
    ProviderAdapter, RankingEngine, SearchProvider, StorageProvider,
};
pub use provider::{CandidateList, ProviderCategory, ProviderIdentity};
pub use strategy::StrategyKind;
