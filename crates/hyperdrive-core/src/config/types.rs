//! Typed configuration structures

use crate::constants::*;
use arc_swap::ArcSwap;
use hyperdrive_domain::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level configuration for the orchestration runtime
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HyperDriveConfig {
    /// Selection strategy configuration
    pub selection: SelectionConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Configuration consumed by the selector
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Strategy name the `auto` strategy resolves to
    pub default_strategy: String,
    /// Weights for the performance strategy score
    pub weights: SelectionWeights,
    /// Cost table for the cost-based strategy, keyed by provider type tag
    ///
    /// Unknown types fall back to a fixed nominal cost.
    pub provider_costs: HashMap<String, f64>,
    /// How long the intelligent strategy waits on the ranking engine, in
    /// milliseconds, before falling back to performance selection
    pub ranking_timeout_ms: u64,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            default_strategy: DEFAULT_STRATEGY.to_string(),
            weights: SelectionWeights::default(),
            provider_costs: HashMap::new(),
            ranking_timeout_ms: DEFAULT_RANKING_TIMEOUT_MS,
        }
    }
}

impl SelectionConfig {
    /// Check the values a bad config file or env override could corrupt
    pub fn validate(&self) -> Result<()> {
        let w = &self.weights;
        for (name, value) in [
            ("latency", w.latency),
            ("throughput", w.throughput),
            ("reliability", w.reliability),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::configuration(format!(
                    "Selection weight '{name}' must be a non-negative finite number, got {value}"
                )));
            }
        }
        if w.latency + w.throughput + w.reliability <= 0.0 {
            return Err(Error::configuration(
                "Selection weights must not all be zero",
            ));
        }
        for (kind, cost) in &self.provider_costs {
            if !cost.is_finite() || *cost < 0.0 {
                return Err(Error::configuration(format!(
                    "Cost for provider '{kind}' must be a non-negative finite number, got {cost}"
                )));
            }
        }
        if self.ranking_timeout_ms == 0 {
            return Err(Error::configuration(
                "ranking_timeout_ms must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Cost of a provider type, falling back to the nominal default
    pub fn cost_of(&self, kind: &str) -> f64 {
        self.provider_costs
            .get(kind)
            .copied()
            .unwrap_or(DEFAULT_PROVIDER_COST)
    }
}

/// Weights applied to the performance strategy score components
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionWeights {
    /// Weight of the latency score
    pub latency: f64,
    /// Weight of the throughput score
    pub throughput: f64,
    /// Weight of the reliability score
    pub reliability: f64,
}

impl Default for SelectionWeights {
    fn default() -> Self {
        Self {
            latency: DEFAULT_LATENCY_WEIGHT,
            throughput: DEFAULT_THROUGHPUT_WEIGHT,
            reliability: DEFAULT_RELIABILITY_WEIGHT,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (trace, debug, info, warn, error)
    pub level: String,
    /// Emit JSON-formatted log lines
    pub json_format: bool,
    /// Optional file to also write logs to (daily rotation)
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            file_output: None,
        }
    }
}

/// Live handle to the selection configuration
///
/// The selector reads through this handle on every call; updates swap the
/// whole value atomically after validation. A rejected update leaves the
/// prior configuration in force, which is the contract for a flaky
/// configuration source.
#[derive(Clone)]
pub struct SelectionConfigHandle {
    inner: Arc<ArcSwap<SelectionConfig>>,
}

impl SelectionConfigHandle {
    /// Create a handle over an initial configuration
    pub fn new(config: SelectionConfig) -> Self {
        Self {
            inner: Arc::new(ArcSwap::from_pointee(config)),
        }
    }

    /// Snapshot of the current configuration
    pub fn current(&self) -> Arc<SelectionConfig> {
        self.inner.load_full()
    }

    /// Validate and apply an update; invalid updates are rejected and the
    /// prior configuration stays in force
    pub fn update(&self, config: SelectionConfig) -> Result<()> {
        config.validate()?;
        self.inner.store(Arc::new(config));
        Ok(())
    }
}

impl Default for SelectionConfigHandle {
    fn default() -> Self {
        Self::new(SelectionConfig::default())
    }
}
