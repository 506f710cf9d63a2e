//! Facade composing the orchestration components
//!
//! [`HyperDrive`] is the single public entry point outer layers talk to.
//! It delegates every operation to the registry, monitor, selector,
//! switcher and configurator without adding invariants of its own, and it
//! converts every result into the uniform [`OperationOutcome`] envelope -
//! no panic or raw error crosses this boundary.
//!
//! Construction is dependency-injection first: build one instance at
//! startup and hand it to consumers, so tests can instantiate independent
//! copies. A process-wide lazily initialized instance is also available
//! through [`HyperDrive::global`] for hosts that want the convenience.

use crate::config::{ConfigLoader, HyperDriveConfig, SelectionConfig, SelectionConfigHandle};
use crate::configurator::ProviderConfigurator;
use crate::monitor::PerformanceMonitor;
use crate::registry::ProviderRegistry;
use crate::selector::Selector;
use crate::switcher::ProviderSwitcher;
use hyperdrive_domain::configuration::{HyperDriveConfiguration, ProviderLists};
use hyperdrive_domain::metrics::{ProviderMetrics, SwitchRecord, SwitchStatus};
use hyperdrive_domain::outcome::OperationOutcome;
use hyperdrive_domain::ports::{
    KeyManagerProvider, MapProvider, NetworkProvider, NftProvider, ProviderAdapter, RankingEngine,
    SearchProvider, StorageProvider,
};
use hyperdrive_domain::provider::{CandidateList, ProviderCategory, ProviderIdentity};
use hyperdrive_domain::strategy::StrategyKind;
use once_cell::sync::OnceCell;
use std::sync::Arc;
use tracing::warn;

/// The components a [`HyperDrive`] instance is composed of
#[derive(Clone)]
pub struct HyperDriveDeps {
    /// Provider registry
    pub registry: Arc<ProviderRegistry>,
    /// Performance monitoring
    pub monitor: Arc<PerformanceMonitor>,
    /// Provider selection
    pub selector: Arc<Selector>,
    /// Guarded switching
    pub switcher: Arc<ProviderSwitcher>,
    /// List and flag management
    pub configurator: Arc<ProviderConfigurator>,
    /// Live selection configuration
    pub selection_config: SelectionConfigHandle,
}

impl HyperDriveDeps {
    /// Wire the default component set from a configuration
    pub fn with_defaults(
        config: HyperDriveConfig,
        ranking: Option<Arc<dyn RankingEngine>>,
    ) -> Self {
        let registry = Arc::new(ProviderRegistry::new());
        let monitor = Arc::new(PerformanceMonitor::new());
        let selection_config = SelectionConfigHandle::new(config.selection);
        let selector = Arc::new(Selector::new(
            Arc::clone(&registry),
            Arc::clone(&monitor),
            selection_config.clone(),
            ranking,
        ));
        let switcher = Arc::new(ProviderSwitcher::new(
            Arc::clone(&registry),
            Arc::clone(&monitor),
            Arc::clone(&selector),
        ));
        let configurator = Arc::new(ProviderConfigurator::new(Arc::clone(&registry)));

        Self {
            registry,
            monitor,
            selector,
            switcher,
            configurator,
            selection_config,
        }
    }
}

/// Process-wide instance backing [`HyperDrive::global`]
static GLOBAL: OnceCell<HyperDrive> = OnceCell::new();

/// The provider orchestration facade
pub struct HyperDrive {
    deps: HyperDriveDeps,
}

impl HyperDrive {
    /// Compose a facade from explicitly injected components
    pub fn new(deps: HyperDriveDeps) -> Self {
        Self { deps }
    }

    /// Compose a facade with the default component set
    pub fn with_defaults(
        config: HyperDriveConfig,
        ranking: Option<Arc<dyn RankingEngine>>,
    ) -> Self {
        Self::new(HyperDriveDeps::with_defaults(config, ranking))
    }

    /// The process-wide instance, created on first access
    ///
    /// Configuration is loaded from the default sources; a broken
    /// configuration falls back to defaults rather than failing startup.
    /// There is no teardown: the instance lives for the process lifetime.
    pub fn global() -> &'static HyperDrive {
        GLOBAL.get_or_init(|| {
            let config = ConfigLoader::new().load().unwrap_or_else(|error| {
                warn!("Falling back to default configuration: {error}");
                HyperDriveConfig::default()
            });
            HyperDrive::with_defaults(config, None)
        })
    }

    /// Access the composed components for advanced usage
    pub fn deps(&self) -> &HyperDriveDeps {
        &self.deps
    }

    // ------------------------------------------------------------------
    // Registration
    // ------------------------------------------------------------------

    /// Register a provider handle under its own category and type tag
    ///
    /// Re-registering the same identity overwrites the previous handle
    /// without error.
    pub fn register_provider(
        &self,
        handle: Arc<dyn ProviderAdapter>,
    ) -> OperationOutcome<ProviderIdentity> {
        let identity = ProviderIdentity::new(handle.category(), handle.kind());
        self.deps
            .registry
            .register(identity.category, identity.kind.clone(), handle);
        let message = format!("Provider {identity} registered");
        OperationOutcome::ok(identity, message)
    }

    /// Register a storage provider
    pub fn register_storage_provider(
        &self,
        handle: Arc<dyn StorageProvider>,
    ) -> OperationOutcome<ProviderIdentity> {
        self.register_provider(handle)
    }

    /// Register a network provider
    pub fn register_network_provider(
        &self,
        handle: Arc<dyn NetworkProvider>,
    ) -> OperationOutcome<ProviderIdentity> {
        self.register_provider(handle)
    }

    /// Register a key manager provider
    pub fn register_key_manager_provider(
        &self,
        handle: Arc<dyn KeyManagerProvider>,
    ) -> OperationOutcome<ProviderIdentity> {
        self.register_provider(handle)
    }

    /// Register a search provider
    pub fn register_search_provider(
        &self,
        handle: Arc<dyn SearchProvider>,
    ) -> OperationOutcome<ProviderIdentity> {
        self.register_provider(handle)
    }

    /// Register an NFT provider
    pub fn register_nft_provider(
        &self,
        handle: Arc<dyn NftProvider>,
    ) -> OperationOutcome<ProviderIdentity> {
        self.register_provider(handle)
    }

    /// Register a map provider
    pub fn register_map_provider(
        &self,
        handle: Arc<dyn MapProvider>,
    ) -> OperationOutcome<ProviderIdentity> {
        self.register_provider(handle)
    }

    /// All registered providers, optionally filtered by category
    pub fn available_providers(
        &self,
        category: Option<ProviderCategory>,
    ) -> OperationOutcome<Vec<ProviderIdentity>> {
        let identities = self.deps.registry.list_available(category);
        let message = format!("{} provider(s) registered", identities.len());
        OperationOutcome::ok(identities, message)
    }

    /// The current provider for a category, if one has been activated
    pub fn current_provider(&self, category: ProviderCategory) -> OperationOutcome<Option<String>> {
        let current = self.deps.registry.current(category);
        let message = match &current {
            Some(kind) => format!("Current {category} provider is {kind}"),
            None => format!("No current {category} provider"),
        };
        OperationOutcome::ok(current, message)
    }

    // ------------------------------------------------------------------
    // Switching
    // ------------------------------------------------------------------

    /// Switch a category's current provider to a registered alternative
    pub fn switch_provider(
        &self,
        category: ProviderCategory,
        new_kind: &str,
    ) -> OperationOutcome<SwitchRecord> {
        match self
            .deps
            .switcher
            .switch_provider(category, new_kind, "manual switch")
        {
            Ok(record) => {
                let message = switch_message(&record);
                OperationOutcome::ok(record, message)
            }
            Err(error) => OperationOutcome::err(&error),
        }
    }

    /// Switch the storage provider
    pub fn switch_storage_provider(&self, new_kind: &str) -> OperationOutcome<SwitchRecord> {
        self.switch_provider(ProviderCategory::Storage, new_kind)
    }

    /// Switch the network provider
    pub fn switch_network_provider(&self, new_kind: &str) -> OperationOutcome<SwitchRecord> {
        self.switch_provider(ProviderCategory::Network, new_kind)
    }

    /// Switch the key manager provider
    pub fn switch_key_manager_provider(&self, new_kind: &str) -> OperationOutcome<SwitchRecord> {
        self.switch_provider(ProviderCategory::KeyManager, new_kind)
    }

    /// Switch the search provider
    pub fn switch_search_provider(&self, new_kind: &str) -> OperationOutcome<SwitchRecord> {
        self.switch_provider(ProviderCategory::Search, new_kind)
    }

    /// Switch the NFT provider
    pub fn switch_nft_provider(&self, new_kind: &str) -> OperationOutcome<SwitchRecord> {
        self.switch_provider(ProviderCategory::Nft, new_kind)
    }

    /// Switch the map provider
    pub fn switch_map_provider(&self, new_kind: &str) -> OperationOutcome<SwitchRecord> {
        self.switch_provider(ProviderCategory::Map, new_kind)
    }

    /// Automatically switch a category to its best alternative
    pub async fn auto_switch(
        &self,
        category: ProviderCategory,
        reason: &str,
    ) -> OperationOutcome<SwitchRecord> {
        match self.deps.switcher.auto_switch(category, reason).await {
            Ok(record) => {
                let message = format!("{} ({})", switch_message(&record), record.reason);
                OperationOutcome::ok(record, message)
            }
            Err(error) => OperationOutcome::err(&error),
        }
    }

    /// Read-only snapshot of the switcher state
    pub fn switch_status(&self) -> OperationOutcome<SwitchStatus> {
        OperationOutcome::ok(self.deps.switcher.switch_status(), "Switch status retrieved")
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    /// Pick a provider for request distribution
    ///
    /// Honors the auto-load-balance flag: while disabled, the current
    /// storage provider is returned unchanged.
    pub async fn select_for_load_balancing(
        &self,
        strategy: StrategyKind,
    ) -> OperationOutcome<Option<String>> {
        if !self.deps.configurator.is_auto_load_balance_enabled() {
            let current = self.deps.registry.current(ProviderCategory::Storage);
            return OperationOutcome::ok(
                current,
                "Auto-load-balance is disabled; keeping the current provider",
            );
        }

        match self.deps.selector.load_balance_provider(strategy).await {
            Ok(Some(kind)) => {
                let message = format!("Selected {kind} for load balancing");
                OperationOutcome::ok(Some(kind), message)
            }
            Ok(None) => OperationOutcome::ok(None, "No load-balance candidate available"),
            Err(error) => OperationOutcome::err(&error),
        }
    }

    /// Pick the failover target for the given current provider
    pub async fn failover_provider(
        &self,
        current: Option<&str>,
    ) -> OperationOutcome<Option<String>> {
        match self.deps.selector.failover_provider(current).await {
            Ok(Some(kind)) => {
                let message = format!("Selected {kind} as failover target");
                OperationOutcome::ok(Some(kind), message)
            }
            Ok(None) => OperationOutcome::ok(None, "No failover candidate available"),
            Err(error) => OperationOutcome::err(&error),
        }
    }

    /// Pick the replication target for the given current provider
    pub async fn replication_provider(
        &self,
        current: Option<&str>,
    ) -> OperationOutcome<Option<String>> {
        match self.deps.selector.replication_provider(current).await {
            Ok(Some(kind)) => {
                let message = format!("Selected {kind} as replication target");
                OperationOutcome::ok(Some(kind), message)
            }
            Ok(None) => OperationOutcome::ok(None, "No replication candidate available"),
            Err(error) => OperationOutcome::err(&error),
        }
    }

    // ------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------

    /// Add a provider to a candidate list (idempotent)
    pub fn add_to_list(&self, list: CandidateList, kind: &str) -> OperationOutcome<bool> {
        let added = self.deps.configurator.add_to_list(list, kind);
        let message = if added {
            format!("Provider {kind} added to {list} list")
        } else {
            format!("Provider {kind} is already in {list} list")
        };
        OperationOutcome::ok(added, message)
    }

    /// Remove a provider from a candidate list (idempotent)
    pub fn remove_from_list(&self, list: CandidateList, kind: &str) -> OperationOutcome<bool> {
        let removed = self.deps.configurator.remove_from_list(list, kind);
        let message = if removed {
            format!("Provider {kind} removed from {list} list")
        } else {
            format!("Provider {kind} was not in {list} list")
        };
        OperationOutcome::ok(removed, message)
    }

    /// All candidate lists and flags
    pub fn lists(&self) -> OperationOutcome<ProviderLists> {
        OperationOutcome::ok(self.deps.configurator.lists(), "Provider lists retrieved")
    }

    /// Replace all candidate lists and flags in one call
    pub fn set_lists(&self, lists: ProviderLists) -> OperationOutcome<bool> {
        self.deps.configurator.set_lists(lists);
        OperationOutcome::ok(true, "Provider lists updated")
    }

    /// Whether automatic failover is permitted to run
    pub fn is_auto_fail_over_enabled(&self) -> bool {
        self.deps.configurator.is_auto_fail_over_enabled()
    }

    /// Enable or disable automatic failover
    pub fn set_auto_fail_over_enabled(&self, enabled: bool) -> OperationOutcome<bool> {
        self.deps.configurator.set_auto_fail_over_enabled(enabled);
        let message = format!(
            "Auto-failover {}",
            if enabled { "enabled" } else { "disabled" }
        );
        OperationOutcome::ok(enabled, message)
    }

    /// Whether automatic replication is permitted to run
    pub fn is_auto_replication_enabled(&self) -> bool {
        self.deps.configurator.is_auto_replication_enabled()
    }

    /// Enable or disable automatic replication
    pub fn set_auto_replication_enabled(&self, enabled: bool) -> OperationOutcome<bool> {
        self.deps.configurator.set_auto_replication_enabled(enabled);
        let message = format!(
            "Auto-replication {}",
            if enabled { "enabled" } else { "disabled" }
        );
        OperationOutcome::ok(enabled, message)
    }

    /// Whether automatic load balancing is permitted to run
    pub fn is_auto_load_balance_enabled(&self) -> bool {
        self.deps.configurator.is_auto_load_balance_enabled()
    }

    /// Enable or disable automatic load balancing
    pub fn set_auto_load_balance_enabled(&self, enabled: bool) -> OperationOutcome<bool> {
        self.deps.configurator.set_auto_load_balance_enabled(enabled);
        let message = format!(
            "Auto-load-balancing {}",
            if enabled { "enabled" } else { "disabled" }
        );
        OperationOutcome::ok(enabled, message)
    }

    /// Aggregate diagnostic view: lists, flags and current providers
    pub fn configuration(&self) -> OperationOutcome<HyperDriveConfiguration> {
        OperationOutcome::ok(
            self.deps.configurator.configuration(),
            "Provider configuration retrieved",
        )
    }

    /// Apply a validated selection configuration update
    ///
    /// Invalid updates are rejected and the prior configuration stays in
    /// force.
    pub fn update_selection_config(&self, config: SelectionConfig) -> OperationOutcome<bool> {
        match self.deps.selection_config.update(config) {
            Ok(()) => OperationOutcome::ok(true, "Selection configuration updated"),
            Err(error) => OperationOutcome::err(&error),
        }
    }

    // ------------------------------------------------------------------
    // Telemetry
    // ------------------------------------------------------------------

    /// Telemetry feed write contract: record the latest metrics snapshot
    /// for a provider
    pub fn ingest_metrics(&self, kind: &str, metrics: ProviderMetrics) -> OperationOutcome<bool> {
        self.deps.monitor.ingest(kind, metrics);
        OperationOutcome::ok(true, format!("Metrics recorded for {kind}"))
    }

    /// Switch audit trail, oldest first
    pub fn recent_switches(&self) -> OperationOutcome<Vec<SwitchRecord>> {
        OperationOutcome::ok(
            self.deps.monitor.recent_switches(),
            "Switch history retrieved",
        )
    }
}

/// Success message naming old and new provider
fn switch_message(record: &SwitchRecord) -> String {
    match &record.from {
        Some(old) => format!(
            "{} provider switched from {} to {}",
            record.category, old, record.to
        ),
        None => format!("{} provider set to {}", record.category, record.to),
    }
}
