//! Round-robin rotation strategies

use super::{SelectionInputs, SelectionStrategy};
use async_trait::async_trait;
use hyperdrive_domain::error::{Error, Result};
use rand::Rng;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Plain round-robin rotation
///
/// The cursor is shared across every category and call site that reaches
/// this strategy instance, not scoped per category: interleaved calls for
/// different categories advance the same rotation. Independent selector
/// instances rotate independently.
pub struct RoundRobinStrategy {
    /// Monotonic cursor, incremented once per call
    cursor: AtomicUsize,
}

impl RoundRobinStrategy {
    /// Create a strategy with the cursor at zero
    pub fn new() -> Self {
        Self {
            cursor: AtomicUsize::new(0),
        }
    }
}

impl Default for RoundRobinStrategy {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SelectionStrategy for RoundRobinStrategy {
    async fn select(&self, candidates: &[String], _inputs: &SelectionInputs<'_>) -> Result<String> {
        let index = self.cursor.fetch_add(1, Ordering::SeqCst) % candidates.len();
        candidates
            .get(index)
            .cloned()
            .ok_or_else(|| Error::internal("Round-robin index out of bounds"))
    }
}

/// Weighted round-robin via a cumulative-weight random draw
///
/// weight(p) = uptime_percent/100 x (1 - error_rate). Providers that have
/// never reported metrics carry zero weight; when the total weight is
/// zero the first candidate is returned instead of drawing.
pub struct WeightedRoundRobinStrategy {}

impl WeightedRoundRobinStrategy {
    /// Create the strategy
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for WeightedRoundRobinStrategy {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SelectionStrategy for WeightedRoundRobinStrategy {
    async fn select(&self, candidates: &[String], inputs: &SelectionInputs<'_>) -> Result<String> {
        let weights: Vec<f64> = candidates
            .iter()
            .map(|kind| {
                inputs.snapshot.get(kind).map_or(0.0, |metrics| {
                    (metrics.uptime_percent / 100.0) * (1.0 - metrics.error_rate)
                })
            })
            .collect();

        let total: f64 = weights.iter().sum();
        let first = candidates
            .first()
            .cloned()
            .ok_or_else(|| Error::internal("Empty candidate pool reached a strategy"))?;
        if total <= 0.0 {
            return Ok(first);
        }

        let draw = rand::rng().random_range(0.0..total);
        let mut cumulative = 0.0;
        for (kind, weight) in candidates.iter().zip(weights) {
            cumulative += weight;
            if draw < cumulative {
                return Ok(kind.clone());
            }
        }

        // Floating point accumulation can leave the draw just past the last
        // cumulative bound.
        Ok(candidates[candidates.len() - 1].clone())
    }
}
