//! Domain Port Interfaces
//!
//! Boundary contracts between the orchestration core and its external
//! collaborators. The core defines the interfaces; adapters and engines
//! on the outside implement them:
//!
//! - **provider** - opaque provider adapter handles, one marker trait per
//!   capability category
//! - **ranking** - the external ranking engine consulted by the
//!   intelligent selection strategy

/// Provider adapter handle contracts
pub mod provider;
/// External ranking engine contract
pub mod ranking;

// Re-export commonly used port traits for convenience
pub use provider::{
    KeyManagerProvider, MapProvider, NetworkProvider, NftProvider, ProviderAdapter,
    SearchProvider, StorageProvider,
};
pub use ranking::{OperationContext, RankingEngine};
