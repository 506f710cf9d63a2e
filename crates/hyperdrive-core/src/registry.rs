//! Provider handles, current pointers and candidate lists
//!
//! The registry exclusively owns every registered provider handle, the
//! single current pointer per category, and the three named candidate
//! lists. Reads are safe under concurrent writers; writers never expose a
//! partially updated collection.

use dashmap::DashMap;
use hyperdrive_domain::error::{Error, Result};
use hyperdrive_domain::ports::ProviderAdapter;
use hyperdrive_domain::provider::{CandidateList, ProviderCategory, ProviderIdentity};
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

/// Thread-safe provider registry
pub struct ProviderRegistry {
    /// Registered provider handles by identity
    providers: DashMap<ProviderIdentity, Arc<dyn ProviderAdapter>>,
    /// Current provider per category; an absent entry means none yet
    current: DashMap<ProviderCategory, String>,
    /// Failover candidate pool, in priority order
    fail_over: RwLock<Vec<String>>,
    /// Replication candidate pool
    replication: RwLock<Vec<String>>,
    /// Load-balance candidate pool
    load_balance: RwLock<Vec<String>>,
}

impl ProviderRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            providers: DashMap::new(),
            current: DashMap::new(),
            fail_over: RwLock::new(Vec::new()),
            replication: RwLock::new(Vec::new()),
            load_balance: RwLock::new(Vec::new()),
        }
    }

    /// Register a provider handle, overwriting any previous registration
    /// for the same identity
    pub fn register(
        &self,
        category: ProviderCategory,
        kind: impl Into<String>,
        handle: Arc<dyn ProviderAdapter>,
    ) {
        let identity = ProviderIdentity::new(category, kind);
        if self.providers.insert(identity.clone(), handle).is_some() {
            debug!("Replaced existing registration for {}", identity);
        } else {
            debug!("Registered provider {}", identity);
        }
    }

    /// Get a registered provider handle
    pub fn get(&self, category: ProviderCategory, kind: &str) -> Result<Arc<dyn ProviderAdapter>> {
        self.providers
            .get(&ProviderIdentity::new(category, kind))
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| {
                Error::not_found(format!(
                    "Provider '{kind}' is not registered for the {category} category"
                ))
            })
    }

    /// Whether a provider is registered for a category
    pub fn is_registered(&self, category: ProviderCategory, kind: &str) -> bool {
        self.providers
            .contains_key(&ProviderIdentity::new(category, kind))
    }

    /// All registered identities, optionally filtered by category
    ///
    /// Sorted by category and kind so callers see a stable order.
    pub fn list_available(&self, category: Option<ProviderCategory>) -> Vec<ProviderIdentity> {
        let mut identities: Vec<ProviderIdentity> = self
            .providers
            .iter()
            .map(|entry| entry.key().clone())
            .filter(|identity| category.is_none_or(|c| identity.category == c))
            .collect();
        identities.sort_by(|a, b| {
            a.category
                .as_str()
                .cmp(b.category.as_str())
                .then_with(|| a.kind.cmp(&b.kind))
        });
        identities
    }

    /// Registered type tags for one category, sorted
    pub fn available_kinds(&self, category: ProviderCategory) -> Vec<String> {
        self.list_available(Some(category))
            .into_iter()
            .map(|identity| identity.kind)
            .collect()
    }

    /// Current provider for a category, if one has been activated
    pub fn current(&self, category: ProviderCategory) -> Option<String> {
        self.current.get(&category).map(|entry| entry.value().clone())
    }

    /// Move the current pointer. Only the switcher calls this, after it
    /// has validated the target registration under the switch gate.
    pub(crate) fn set_current(&self, category: ProviderCategory, kind: impl Into<String>) {
        self.current.insert(category, kind.into());
    }

    /// Current provider per category, across all six categories
    pub fn current_providers(&self) -> HashMap<ProviderCategory, Option<String>> {
        ProviderCategory::ALL
            .into_iter()
            .map(|category| (category, self.current(category)))
            .collect()
    }

    /// Snapshot of one candidate list
    pub fn list(&self, list: CandidateList) -> Vec<String> {
        self.read_list(list).clone()
    }

    /// Append to a candidate list; no-op when already a member
    pub fn add_to_list(&self, list: CandidateList, kind: &str) -> bool {
        let mut guard = self.write_list(list);
        if guard.iter().any(|entry| entry == kind) {
            false
        } else {
            guard.push(kind.to_string());
            true
        }
    }

    /// Remove from a candidate list; no-op when not a member
    pub fn remove_from_list(&self, list: CandidateList, kind: &str) -> bool {
        let mut guard = self.write_list(list);
        let before = guard.len();
        guard.retain(|entry| entry != kind);
        guard.len() != before
    }

    /// Replace all three candidate lists at once
    ///
    /// All write locks are taken before any list changes, so readers see
    /// either the old or the new state of each list, never a mix mid-call.
    pub(crate) fn set_lists(
        &self,
        fail_over: Vec<String>,
        replication: Vec<String>,
        load_balance: Vec<String>,
    ) {
        let mut fail_over_guard = self.write_list(CandidateList::FailOver);
        let mut replication_guard = self.write_list(CandidateList::Replication);
        let mut load_balance_guard = self.write_list(CandidateList::LoadBalance);

        *fail_over_guard = dedup_preserving_order(fail_over);
        *replication_guard = dedup_preserving_order(replication);
        *load_balance_guard = dedup_preserving_order(load_balance);
    }

    fn list_lock(&self, list: CandidateList) -> &RwLock<Vec<String>> {
        match list {
            CandidateList::FailOver => &self.fail_over,
            CandidateList::Replication => &self.replication,
            CandidateList::LoadBalance => &self.load_balance,
        }
    }

    fn read_list(&self, list: CandidateList) -> RwLockReadGuard<'_, Vec<String>> {
        match self.list_lock(list).read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write_list(&self, list: CandidateList) -> RwLockWriteGuard<'_, Vec<String>> {
        match self.list_lock(list).write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Drop later duplicates while keeping first-seen order
fn dedup_preserving_order(entries: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    entries
        .into_iter()
        .filter(|entry| seen.insert(entry.clone()))
        .collect()
}
