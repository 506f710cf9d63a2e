//! Provider categories, identities and candidate list names

use serde::{Deserialize, Serialize};
use std::fmt;

/// Capability categories a provider can implement
///
/// This is a closed set: every registered provider belongs to exactly one
/// of these six categories, and each category has exactly one current
/// provider at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProviderCategory {
    /// Storage engines (databases, distributed file systems)
    Storage,
    /// Network overlays and transports
    Network,
    /// Key management services
    KeyManager,
    /// Search indexes
    Search,
    /// NFT services
    Nft,
    /// Map services
    Map,
}

impl ProviderCategory {
    /// All categories, in declaration order
    pub const ALL: [ProviderCategory; 6] = [
        ProviderCategory::Storage,
        ProviderCategory::Network,
        ProviderCategory::KeyManager,
        ProviderCategory::Search,
        ProviderCategory::Nft,
        ProviderCategory::Map,
    ];

    /// Stable string form used in logs, metrics labels and config keys
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Storage => "storage",
            Self::Network => "network",
            Self::KeyManager => "key-manager",
            Self::Search => "search",
            Self::Nft => "nft",
            Self::Map => "map",
        }
    }
}

impl fmt::Display for ProviderCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of a concrete provider implementation: category plus type tag
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProviderIdentity {
    /// Capability category the provider implements
    pub category: ProviderCategory,
    /// Type tag identifying the concrete implementation (e.g. `"ipfs"`)
    pub kind: String,
}

impl ProviderIdentity {
    /// Create a new provider identity
    pub fn new(category: ProviderCategory, kind: impl Into<String>) -> Self {
        Self {
            category,
            kind: kind.into(),
        }
    }
}

impl fmt::Display for ProviderIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.category, self.kind)
    }
}

/// Named candidate pools consumed by the selector
///
/// Lists are scoped globally rather than per category: each holds provider
/// type tags usable across the switch operations that consume it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CandidateList {
    /// Providers eligible as failover targets
    FailOver,
    /// Providers receiving redundant writes
    Replication,
    /// Providers participating in request distribution
    LoadBalance,
}

impl CandidateList {
    /// Stable string form used in logs and result messages
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FailOver => "auto-failover",
            Self::Replication => "auto-replication",
            Self::LoadBalance => "auto-load-balance",
        }
    }
}

impl fmt::Display for CandidateList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
