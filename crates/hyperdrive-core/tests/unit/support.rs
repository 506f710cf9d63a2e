//! Shared helpers for the unit test suite

use hyperdrive_core::config::HyperDriveConfig;
use hyperdrive_core::orchestrator::{HyperDrive, HyperDriveDeps};
use hyperdrive_domain::metrics::ProviderMetrics;
use hyperdrive_domain::ports::{ProviderAdapter, StorageProvider};
use hyperdrive_domain::provider::ProviderCategory;
use std::sync::Arc;

/// Minimal provider adapter for registration tests
pub struct TestProvider {
    kind: String,
    category: ProviderCategory,
}

impl TestProvider {
    pub fn arc(category: ProviderCategory, kind: &str) -> Arc<dyn ProviderAdapter> {
        Arc::new(Self {
            kind: kind.to_string(),
            category,
        })
    }

    pub fn storage(kind: &str) -> Arc<dyn StorageProvider> {
        Arc::new(Self {
            kind: kind.to_string(),
            category: ProviderCategory::Storage,
        })
    }
}

impl ProviderAdapter for TestProvider {
    fn kind(&self) -> &str {
        &self.kind
    }

    fn category(&self) -> ProviderCategory {
        self.category
    }

    fn description(&self) -> &str {
        "test provider"
    }
}

impl StorageProvider for TestProvider {}

/// Independent component set with default configuration
pub fn deps() -> HyperDriveDeps {
    HyperDriveDeps::with_defaults(HyperDriveConfig::default(), None)
}

/// Independent facade instance with default configuration
pub fn hyperdrive() -> HyperDrive {
    HyperDrive::with_defaults(HyperDriveConfig::default(), None)
}

/// Register a batch of providers for one category
pub fn register(deps: &HyperDriveDeps, category: ProviderCategory, kinds: &[&str]) {
    for kind in kinds {
        deps.registry
            .register(category, *kind, TestProvider::arc(category, kind));
    }
}

/// Metrics snapshot with the given response time and healthy defaults
pub fn healthy_metrics(response_time_ms: f64) -> ProviderMetrics {
    ProviderMetrics {
        response_time_ms,
        throughput_mbps: 50.0,
        uptime_percent: 99.0,
        error_rate: 0.01,
        active_connections: 3,
    }
}
