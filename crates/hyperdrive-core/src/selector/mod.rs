//! Selection strategies
//!
//! The selector reduces a candidate pool plus a metrics snapshot to one
//! chosen provider. Strategies live in a registry keyed by
//! [`StrategyKind`]; swapping or extending an entry never touches a
//! central dispatcher. The `auto` kind resolves to the configured default
//! strategy at call time, falling back to whatever concrete strategy was
//! last resolved when the configuration is missing or unparseable.

/// Cost-based and geographic strategies
pub mod cost;
/// Ranking-engine-backed strategy
pub mod intelligent;
/// Performance-score and least-connections strategies
pub mod performance;
/// Round-robin rotation strategies
pub mod rotation;

pub use cost::{CostBasedStrategy, GeographicStrategy};
pub use intelligent::IntelligentStrategy;
pub use performance::{LeastConnectionsStrategy, PerformanceStrategy};
pub use rotation::{RoundRobinStrategy, WeightedRoundRobinStrategy};

use crate::config::{SelectionConfig, SelectionConfigHandle};
use crate::metrics::MetricsEmitter;
use crate::monitor::PerformanceMonitor;
use crate::registry::ProviderRegistry;
use arc_swap::ArcSwap;
use async_trait::async_trait;
use hyperdrive_domain::error::{Error, Result};
use hyperdrive_domain::metrics::ProviderMetrics;
use hyperdrive_domain::ports::{OperationContext, RankingEngine};
use hyperdrive_domain::provider::{CandidateList, ProviderCategory};
use hyperdrive_domain::strategy::StrategyKind;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Everything a strategy may consult while choosing
pub struct SelectionInputs<'a> {
    /// Point-in-time metrics per provider; absent entries mean the
    /// provider has never reported
    pub snapshot: &'a HashMap<String, ProviderMetrics>,
    /// Selection configuration (weights, cost table, timeouts)
    pub config: &'a SelectionConfig,
    /// What the caller is selecting for
    pub context: &'a OperationContext,
}

/// Common interface every selection strategy implements
///
/// Implementations are called with a non-empty candidate pool; the empty
/// pool fallback happens in [`Selector::select`] before dispatch.
#[async_trait]
pub trait SelectionStrategy: Send + Sync {
    /// Choose exactly one provider from the candidates
    async fn select(&self, candidates: &[String], inputs: &SelectionInputs<'_>) -> Result<String>;
}

/// Strategy registry plus the shared state selection needs
pub struct Selector {
    registry: Arc<ProviderRegistry>,
    monitor: Arc<PerformanceMonitor>,
    config: SelectionConfigHandle,
    strategies: HashMap<StrategyKind, Arc<dyn SelectionStrategy>>,
    /// Concrete strategy the last `auto` resolution landed on
    last_resolved: ArcSwap<StrategyKind>,
    emitter: MetricsEmitter,
}

impl Selector {
    /// Create a selector with the full default strategy set
    ///
    /// `ranking` wires the intelligent strategy to its external engine;
    /// without one, intelligent selection degrades to performance
    /// selection.
    pub fn new(
        registry: Arc<ProviderRegistry>,
        monitor: Arc<PerformanceMonitor>,
        config: SelectionConfigHandle,
        ranking: Option<Arc<dyn RankingEngine>>,
    ) -> Self {
        let performance = Arc::new(PerformanceStrategy::new());

        let mut strategies: HashMap<StrategyKind, Arc<dyn SelectionStrategy>> = HashMap::new();
        strategies.insert(StrategyKind::RoundRobin, Arc::new(RoundRobinStrategy::new()));
        strategies.insert(
            StrategyKind::WeightedRoundRobin,
            Arc::new(WeightedRoundRobinStrategy::new()),
        );
        strategies.insert(
            StrategyKind::LeastConnections,
            Arc::new(LeastConnectionsStrategy::new()),
        );
        strategies.insert(StrategyKind::Geographic, Arc::new(GeographicStrategy::new()));
        strategies.insert(StrategyKind::CostBased, Arc::new(CostBasedStrategy::new()));
        strategies.insert(
            StrategyKind::Performance,
            Arc::clone(&performance) as Arc<dyn SelectionStrategy>,
        );
        strategies.insert(
            StrategyKind::Intelligent,
            Arc::new(IntelligentStrategy::new(ranking, performance)),
        );

        let initial = match config.current().default_strategy.parse::<StrategyKind>() {
            Ok(kind) if kind != StrategyKind::Auto => kind,
            _ => StrategyKind::Performance,
        };

        Self {
            registry,
            monitor,
            config,
            strategies,
            last_resolved: ArcSwap::from_pointee(initial),
            emitter: MetricsEmitter::new(),
        }
    }

    /// Replace or add the implementation behind a strategy kind
    pub fn register_strategy(&mut self, kind: StrategyKind, strategy: Arc<dyn SelectionStrategy>) {
        self.strategies.insert(kind, strategy);
    }

    /// Resolve `auto` to a concrete strategy using the configured default,
    /// remembering the result for the next time resolution fails
    fn resolve(&self, requested: StrategyKind) -> StrategyKind {
        let resolved = if requested == StrategyKind::Auto {
            match self.config.current().default_strategy.parse::<StrategyKind>() {
                Ok(kind) if kind != StrategyKind::Auto => kind,
                _ => *self.last_resolved.load_full(),
            }
        } else {
            requested
        };
        self.last_resolved.store(Arc::new(resolved));
        resolved
    }

    /// Choose one provider from the candidates
    ///
    /// An empty candidate pool is not an error: the caller gets `current`
    /// back (which may itself be `None` when nothing was ever activated).
    pub async fn select(
        &self,
        requested: StrategyKind,
        candidates: &[String],
        current: Option<String>,
        context: &OperationContext,
    ) -> Result<Option<String>> {
        if candidates.is_empty() {
            return Ok(current);
        }

        let resolved = self.resolve(requested);
        let strategy = self.strategies.get(&resolved).ok_or_else(|| {
            Error::internal(format!("No implementation registered for strategy {resolved}"))
        })?;

        let snapshot = self.monitor.snapshot();
        let config = self.config.current();
        let inputs = SelectionInputs {
            snapshot: &snapshot,
            config: &config,
            context,
        };

        let chosen = strategy.select(candidates, &inputs).await?;
        self.emitter.record_selection(&chosen, resolved.as_str());
        debug!(
            strategy = resolved.as_str(),
            chosen = chosen.as_str(),
            operation = context.operation.as_str(),
            "Provider selected"
        );
        Ok(Some(chosen))
    }

    /// Failover target: performance selection over the failover list,
    /// excluding the provider being failed away from
    pub async fn failover_provider(&self, current: Option<&str>) -> Result<Option<String>> {
        let candidates: Vec<String> = self
            .registry
            .list(CandidateList::FailOver)
            .into_iter()
            .filter(|kind| Some(kind.as_str()) != current)
            .collect();
        let context = OperationContext::new("failover");
        self.select(
            StrategyKind::Performance,
            &candidates,
            current.map(str::to_string),
            &context,
        )
        .await
    }

    /// Replication target: cost-based selection over the replication list,
    /// excluding the provider already being written to
    pub async fn replication_provider(&self, current: Option<&str>) -> Result<Option<String>> {
        let candidates: Vec<String> = self
            .registry
            .list(CandidateList::Replication)
            .into_iter()
            .filter(|kind| Some(kind.as_str()) != current)
            .collect();
        let context = OperationContext::new("replication");
        self.select(
            StrategyKind::CostBased,
            &candidates,
            current.map(str::to_string),
            &context,
        )
        .await
    }

    /// Load-balance target: the requested strategy over the load-balance
    /// list, with the storage current provider as the empty-pool fallback
    pub async fn load_balance_provider(&self, strategy: StrategyKind) -> Result<Option<String>> {
        let candidates = self.registry.list(CandidateList::LoadBalance);
        let current = self.registry.current(ProviderCategory::Storage);
        let context =
            OperationContext::new("load-balance").with_category(ProviderCategory::Storage);
        self.select(strategy, &candidates, current, &context).await
    }
}
