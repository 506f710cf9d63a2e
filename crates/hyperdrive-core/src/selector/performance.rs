//! Performance-score and least-connections strategies

use super::{SelectionInputs, SelectionStrategy};
use crate::constants::{LATENCY_SCORE_CEILING_MS, THROUGHPUT_SCORE_SCALE_MBPS};
use async_trait::async_trait;
use hyperdrive_domain::error::{Error, Result};

/// Weighted performance score over latency, throughput and reliability
///
/// Providers absent from the metrics snapshot are excluded from scoring;
/// when nothing has reported at all, the first candidate is returned.
/// Equal scores are broken by lower response time.
pub struct PerformanceStrategy {}

impl PerformanceStrategy {
    /// Create the strategy
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for PerformanceStrategy {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SelectionStrategy for PerformanceStrategy {
    async fn select(&self, candidates: &[String], inputs: &SelectionInputs<'_>) -> Result<String> {
        let weights = inputs.config.weights;

        // (candidate, score, response time) of the best scored so far
        let mut best: Option<(&String, f64, f64)> = None;

        for kind in candidates {
            let Some(metrics) = inputs.snapshot.get(kind) else {
                continue;
            };

            let latency_score =
                (LATENCY_SCORE_CEILING_MS - metrics.response_time_ms).max(0.0)
                    / LATENCY_SCORE_CEILING_MS;
            let throughput_score = (metrics.throughput_mbps / THROUGHPUT_SCORE_SCALE_MBPS)
                * (metrics.uptime_percent / 100.0);
            let reliability_score =
                (metrics.uptime_percent / 100.0) * (1.0 - metrics.error_rate);

            let score = latency_score * weights.latency
                + throughput_score * weights.throughput
                + reliability_score * weights.reliability;

            let better = match best {
                None => true,
                Some((_, best_score, best_latency)) => {
                    score > best_score
                        || (score == best_score && metrics.response_time_ms < best_latency)
                }
            };
            if better {
                best = Some((kind, score, metrics.response_time_ms));
            }
        }

        match best {
            Some((kind, _, _)) => Ok(kind.clone()),
            None => candidates
                .first()
                .cloned()
                .ok_or_else(|| Error::internal("Empty candidate pool reached a strategy")),
        }
    }
}

/// Route to the candidate with the fewest active connections
///
/// Providers that have never reported count as zero connections; ties go
/// to the earliest candidate in list order.
pub struct LeastConnectionsStrategy {}

impl LeastConnectionsStrategy {
    /// Create the strategy
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for LeastConnectionsStrategy {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SelectionStrategy for LeastConnectionsStrategy {
    async fn select(&self, candidates: &[String], inputs: &SelectionInputs<'_>) -> Result<String> {
        candidates
            .iter()
            .min_by_key(|kind| {
                inputs
                    .snapshot
                    .get(*kind)
                    .map_or(0, |metrics| metrics.active_connections)
            })
            .cloned()
            .ok_or_else(|| Error::internal("Empty candidate pool reached a strategy"))
    }
}
