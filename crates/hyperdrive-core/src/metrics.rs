//! Metrics emission for selections and switches
//!
//! Emits counters and gauges through the `metrics` facade so any exporter
//! installed by the host process picks them up. Emission is fire-and-forget
//! and never fails the operation being measured.

use hyperdrive_domain::provider::ProviderCategory;
use metrics::{counter, gauge};
use tracing::debug;

/// Emitter for orchestration metrics
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsEmitter {}

impl MetricsEmitter {
    /// Create a new emitter
    pub fn new() -> Self {
        Self {}
    }

    /// Record a provider selection
    pub fn record_selection(&self, provider: &str, strategy: &str) {
        counter!("hyperdrive_provider_selections_total", "provider" => provider.to_string(), "strategy" => strategy.to_string()).increment(1);
        debug!(
            "Recorded provider selection: {} with strategy {}",
            provider, strategy
        );
    }

    /// Record a committed provider switch
    pub fn record_switch(&self, category: ProviderCategory, from: Option<&str>, to: &str) {
        counter!("hyperdrive_provider_switches_total", "category" => category.as_str(), "to" => to.to_string()).increment(1);
        debug!(
            "Recorded provider switch: {} {} -> {}",
            category,
            from.unwrap_or("none"),
            to
        );
    }

    /// Record a rejected or failed switch attempt
    pub fn record_switch_error(&self, category: ProviderCategory, error_kind: &'static str) {
        counter!("hyperdrive_provider_switch_errors_total", "category" => category.as_str(), "error" => error_kind).increment(1);
    }

    /// Record a telemetry ingest and the provider's connection gauge
    pub fn record_ingest(&self, provider: &str, active_connections: u32) {
        counter!("hyperdrive_telemetry_updates_total", "provider" => provider.to_string())
            .increment(1);
        gauge!("hyperdrive_provider_active_connections", "provider" => provider.to_string())
            .set(f64::from(active_connections));
    }
}
