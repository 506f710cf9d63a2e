//! Ranking-engine-backed strategy
//!
//! Delegates ordering to the external ranking engine, the one point where
//! selection waits on an external collaborator. The wait carries an
//! explicit timeout; a slow, failing or absent engine degrades to
//! performance selection instead of blocking or erroring.

use super::performance::PerformanceStrategy;
use super::{SelectionInputs, SelectionStrategy};
use async_trait::async_trait;
use hyperdrive_domain::error::{Error, Result};
use hyperdrive_domain::ports::RankingEngine;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Strategy delegating to the external ranking engine
pub struct IntelligentStrategy {
    ranking: Option<Arc<dyn RankingEngine>>,
    fallback: Arc<PerformanceStrategy>,
}

impl IntelligentStrategy {
    /// Create the strategy; without an engine every call degrades to the
    /// performance fallback
    pub fn new(ranking: Option<Arc<dyn RankingEngine>>, fallback: Arc<PerformanceStrategy>) -> Self {
        Self { ranking, fallback }
    }
}

#[async_trait]
impl SelectionStrategy for IntelligentStrategy {
    async fn select(&self, candidates: &[String], inputs: &SelectionInputs<'_>) -> Result<String> {
        let Some(engine) = &self.ranking else {
            debug!("No ranking engine wired; using performance selection");
            return self.fallback.select(candidates, inputs).await;
        };

        let timeout = Duration::from_millis(inputs.config.ranking_timeout_ms);
        match tokio::time::timeout(timeout, engine.rank(inputs.context, candidates)).await {
            Ok(Ok(ranked)) => {
                let first = ranked
                    .into_iter()
                    .find(|kind| candidates.contains(kind));
                match first {
                    Some(kind) => Ok(kind),
                    // Empty (or entirely off-pool) ranking: take the first
                    // candidate rather than treating it as a failure.
                    None => candidates
                        .first()
                        .cloned()
                        .ok_or_else(|| Error::internal("Empty candidate pool reached a strategy")),
                }
            }
            Ok(Err(error)) => {
                warn!("Ranking engine failed: {error}; using performance selection");
                self.fallback.select(candidates, inputs).await
            }
            Err(_) => {
                warn!(
                    "Ranking engine timed out after {}ms; using performance selection",
                    inputs.config.ranking_timeout_ms
                );
                self.fallback.select(candidates, inputs).await
            }
        }
    }
}
