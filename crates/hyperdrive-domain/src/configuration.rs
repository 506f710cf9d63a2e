//! Aggregate configuration value objects
//!
//! Bulk views of the three candidate lists and the feature flags, used by
//! the configurator for get/set round trips and by diagnostics surfaces.

use crate::provider::ProviderCategory;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The three candidate lists plus their feature flags, as one value
///
/// This is the unit of bulk replacement: `set_lists` swaps all of it
/// atomically, and `get_lists` returns a structure that round-trips.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderLists {
    /// Providers eligible as failover targets, in priority order
    pub auto_fail_over_list: Vec<String>,
    /// Providers receiving redundant writes
    pub auto_replication_list: Vec<String>,
    /// Providers participating in request distribution
    pub auto_load_balance_list: Vec<String>,
    /// Whether automatic failover is permitted to run
    pub is_auto_fail_over_enabled: bool,
    /// Whether automatic replication is permitted to run
    pub is_auto_replication_enabled: bool,
    /// Whether automatic load balancing is permitted to run
    pub is_auto_load_balance_enabled: bool,
}

/// Complete diagnostic view: lists, flags and current providers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HyperDriveConfiguration {
    /// Current provider per category
    pub current_providers: HashMap<ProviderCategory, Option<String>>,
    /// Candidate lists and feature flags
    #[serde(flatten)]
    pub lists: ProviderLists,
}
