//! Cost-based and geographic strategies

use super::{SelectionInputs, SelectionStrategy};
use crate::constants::TIE_BREAK_LATENCY_MS;
use async_trait::async_trait;
use hyperdrive_domain::error::{Error, Result};

/// Route to the cheapest candidate per the configured cost table
///
/// Provider types missing from the table carry a fixed nominal cost.
/// Equal costs are broken by lower reported response time.
pub struct CostBasedStrategy {}

impl CostBasedStrategy {
    /// Create the strategy
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for CostBasedStrategy {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SelectionStrategy for CostBasedStrategy {
    async fn select(&self, candidates: &[String], inputs: &SelectionInputs<'_>) -> Result<String> {
        // (candidate, cost, tie-break latency) of the cheapest so far
        let mut best: Option<(&String, f64, f64)> = None;

        for kind in candidates {
            let cost = inputs.config.cost_of(kind);
            let latency = inputs
                .snapshot
                .get(kind)
                .map_or(TIE_BREAK_LATENCY_MS, |metrics| metrics.response_time_ms);

            let better = match best {
                None => true,
                Some((_, best_cost, best_latency)) => {
                    cost < best_cost || (cost == best_cost && latency < best_latency)
                }
            };
            if better {
                best = Some((kind, cost, latency));
            }
        }

        best.map(|(kind, _, _)| kind.clone())
            .ok_or_else(|| Error::internal("Empty candidate pool reached a strategy"))
    }
}

/// Geographic routing placeholder
///
/// Returns the first candidate. Not geo-aware: the telemetry feed does
/// not carry location data yet, so there is nothing to rank by.
pub struct GeographicStrategy {}

impl GeographicStrategy {
    /// Create the strategy
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for GeographicStrategy {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SelectionStrategy for GeographicStrategy {
    async fn select(&self, candidates: &[String], _inputs: &SelectionInputs<'_>) -> Result<String> {
        candidates
            .first()
            .cloned()
            .ok_or_else(|| Error::internal("Empty candidate pool reached a strategy"))
    }
}
