//! Candidate list CRUD and feature flags
//!
//! Shapes the candidate pools the selector draws from and holds the three
//! independent feature flags. List membership operations are idempotent:
//! adding an existing member and removing an absent one are both no-op
//! successes, reported as such in the outcome message.

use crate::registry::ProviderRegistry;
use hyperdrive_domain::configuration::{HyperDriveConfiguration, ProviderLists};
use hyperdrive_domain::provider::CandidateList;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::info;

/// Manages candidate lists and feature flags
pub struct ProviderConfigurator {
    registry: Arc<ProviderRegistry>,
    auto_fail_over_enabled: AtomicBool,
    auto_replication_enabled: AtomicBool,
    auto_load_balance_enabled: AtomicBool,
}

impl ProviderConfigurator {
    /// Create a configurator; all three flags start enabled
    pub fn new(registry: Arc<ProviderRegistry>) -> Self {
        Self {
            registry,
            auto_fail_over_enabled: AtomicBool::new(true),
            auto_replication_enabled: AtomicBool::new(true),
            auto_load_balance_enabled: AtomicBool::new(true),
        }
    }

    /// Add a provider to a candidate list
    ///
    /// Returns `true` when the list changed, `false` when the provider was
    /// already a member (a no-op success, never an error).
    pub fn add_to_list(&self, list: CandidateList, kind: &str) -> bool {
        let added = self.registry.add_to_list(list, kind);
        if added {
            info!("Provider {} added to {} list", kind, list);
        }
        added
    }

    /// Remove a provider from a candidate list
    ///
    /// Returns `true` when the list changed, `false` when the provider was
    /// not a member (a no-op success, never an error).
    pub fn remove_from_list(&self, list: CandidateList, kind: &str) -> bool {
        let removed = self.registry.remove_from_list(list, kind);
        if removed {
            info!("Provider {} removed from {} list", kind, list);
        }
        removed
    }

    /// All three lists plus the flags, as one value
    pub fn lists(&self) -> ProviderLists {
        ProviderLists {
            auto_fail_over_list: self.registry.list(CandidateList::FailOver),
            auto_replication_list: self.registry.list(CandidateList::Replication),
            auto_load_balance_list: self.registry.list(CandidateList::LoadBalance),
            is_auto_fail_over_enabled: self.is_auto_fail_over_enabled(),
            is_auto_replication_enabled: self.is_auto_replication_enabled(),
            is_auto_load_balance_enabled: self.is_auto_load_balance_enabled(),
        }
    }

    /// Replace all lists and flags in one call
    ///
    /// Input lists are deduplicated while preserving order; readers of any
    /// single list never observe it half-replaced.
    pub fn set_lists(&self, lists: ProviderLists) {
        self.registry.set_lists(
            lists.auto_fail_over_list,
            lists.auto_replication_list,
            lists.auto_load_balance_list,
        );
        self.set_auto_fail_over_enabled(lists.is_auto_fail_over_enabled);
        self.set_auto_replication_enabled(lists.is_auto_replication_enabled);
        self.set_auto_load_balance_enabled(lists.is_auto_load_balance_enabled);
        info!("Provider lists replaced");
    }

    /// Whether automatic failover is permitted to run
    pub fn is_auto_fail_over_enabled(&self) -> bool {
        self.auto_fail_over_enabled.load(Ordering::Acquire)
    }

    /// Enable or disable automatic failover
    pub fn set_auto_fail_over_enabled(&self, enabled: bool) {
        self.auto_fail_over_enabled.store(enabled, Ordering::Release);
    }

    /// Whether automatic replication is permitted to run
    pub fn is_auto_replication_enabled(&self) -> bool {
        self.auto_replication_enabled.load(Ordering::Acquire)
    }

    /// Enable or disable automatic replication
    pub fn set_auto_replication_enabled(&self, enabled: bool) {
        self.auto_replication_enabled
            .store(enabled, Ordering::Release);
    }

    /// Whether automatic load balancing is permitted to run
    pub fn is_auto_load_balance_enabled(&self) -> bool {
        self.auto_load_balance_enabled.load(Ordering::Acquire)
    }

    /// Enable or disable automatic load balancing
    pub fn set_auto_load_balance_enabled(&self, enabled: bool) {
        self.auto_load_balance_enabled
            .store(enabled, Ordering::Release);
    }

    /// Aggregate diagnostic view: lists, flags and current providers
    pub fn configuration(&self) -> HyperDriveConfiguration {
        HyperDriveConfiguration {
            current_providers: self.registry.current_providers(),
            lists: self.lists(),
        }
    }
}
