//! Unit tests for the selector front door and its helper selections

use crate::support::{deps, healthy_metrics, register};
use hyperdrive_core::config::SelectionConfig;
use hyperdrive_domain::metrics::ProviderMetrics;
use hyperdrive_domain::ports::OperationContext;
use hyperdrive_domain::provider::{CandidateList, ProviderCategory};
use hyperdrive_domain::strategy::StrategyKind;

#[tokio::test]
async fn empty_candidate_pool_returns_the_current_provider() {
    let deps = deps();
    let context = OperationContext::new("test");

    let chosen = deps
        .selector
        .select(
            StrategyKind::Performance,
            &[],
            Some("incumbent".to_string()),
            &context,
        )
        .await
        .unwrap();
    assert_eq!(chosen, Some("incumbent".to_string()));

    let nothing = deps
        .selector
        .select(StrategyKind::Performance, &[], None, &context)
        .await
        .unwrap();
    assert_eq!(nothing, None);
}

#[tokio::test]
async fn auto_resolves_to_the_configured_default_strategy() {
    let deps = deps();
    let mut config = SelectionConfig::default();
    config.default_strategy = "round-robin".to_string();
    deps.selection_config.update(config).unwrap();

    let pool = vec!["a".to_string(), "b".to_string(), "c".to_string()];
    let context = OperationContext::new("test");

    // Round-robin starts at the first candidate and rotates
    let first = deps
        .selector
        .select(StrategyKind::Auto, &pool, None, &context)
        .await
        .unwrap();
    let second = deps
        .selector
        .select(StrategyKind::Auto, &pool, None, &context)
        .await
        .unwrap();
    assert_eq!(first, Some("a".to_string()));
    assert_eq!(second, Some("b".to_string()));
}

#[tokio::test]
async fn unparseable_default_falls_back_to_the_last_resolved_strategy() {
    let deps = deps();
    let mut config = SelectionConfig::default();
    config.default_strategy = "round-robin".to_string();
    deps.selection_config.update(config).unwrap();

    let pool = vec!["a".to_string(), "b".to_string(), "c".to_string()];
    let context = OperationContext::new("test");

    let first = deps
        .selector
        .select(StrategyKind::Auto, &pool, None, &context)
        .await
        .unwrap();
    assert_eq!(first, Some("a".to_string()));

    // The strategy name is only interpreted at resolution time, so a
    // nonsense value passes config validation and must not break auto.
    let mut broken = SelectionConfig::default();
    broken.default_strategy = "gibberish".to_string();
    deps.selection_config.update(broken).unwrap();

    let second = deps
        .selector
        .select(StrategyKind::Auto, &pool, None, &context)
        .await
        .unwrap();
    assert_eq!(second, Some("b".to_string()), "rotation should continue");
}

#[tokio::test]
async fn failover_selection_excludes_the_current_provider() {
    let deps = deps();
    register(
        &deps,
        ProviderCategory::Storage,
        &["primary", "standby-slow", "standby-fast"],
    );
    deps.registry.add_to_list(CandidateList::FailOver, "primary");
    deps.registry
        .add_to_list(CandidateList::FailOver, "standby-slow");
    deps.registry
        .add_to_list(CandidateList::FailOver, "standby-fast");

    deps.monitor.ingest("primary", healthy_metrics(10.0));
    deps.monitor.ingest("standby-slow", healthy_metrics(700.0));
    deps.monitor.ingest("standby-fast", healthy_metrics(40.0));

    let target = deps
        .selector
        .failover_provider(Some("primary"))
        .await
        .unwrap();
    assert_eq!(target, Some("standby-fast".to_string()));
}

#[tokio::test]
async fn failover_with_empty_list_returns_the_current_provider() {
    let deps = deps();
    let target = deps
        .selector
        .failover_provider(Some("primary"))
        .await
        .unwrap();
    assert_eq!(target, Some("primary".to_string()));
}

#[tokio::test]
async fn replication_selection_is_cost_based() {
    let deps = deps();
    deps.registry
        .add_to_list(CandidateList::Replication, "pricey");
    deps.registry
        .add_to_list(CandidateList::Replication, "bargain");

    let mut config = SelectionConfig::default();
    config.provider_costs.insert("pricey".to_string(), 9.0);
    config.provider_costs.insert("bargain".to_string(), 0.1);
    deps.selection_config.update(config).unwrap();

    let target = deps.selector.replication_provider(None).await.unwrap();
    assert_eq!(target, Some("bargain".to_string()));
}

#[tokio::test]
async fn replication_excludes_the_provider_already_written_to() {
    let deps = deps();
    deps.registry
        .add_to_list(CandidateList::Replication, "only-member");

    let target = deps
        .selector
        .replication_provider(Some("only-member"))
        .await
        .unwrap();
    // The only candidate is excluded, so the fallback is the current one
    assert_eq!(target, Some("only-member".to_string()));
}

#[tokio::test]
async fn load_balance_with_empty_list_falls_back_to_storage_current() {
    let deps = deps();
    register(&deps, ProviderCategory::Storage, &["mongo"]);
    deps.switcher
        .switch_provider(ProviderCategory::Storage, "mongo", "bootstrap")
        .unwrap();

    let chosen = deps
        .selector
        .load_balance_provider(StrategyKind::RoundRobin)
        .await
        .unwrap();
    assert_eq!(chosen, Some("mongo".to_string()));
}

#[tokio::test]
async fn least_connections_treats_missing_metrics_as_zero() {
    let deps = deps();
    deps.registry
        .add_to_list(CandidateList::LoadBalance, "loaded");
    deps.registry
        .add_to_list(CandidateList::LoadBalance, "unreported");

    deps.monitor.ingest(
        "loaded",
        ProviderMetrics {
            active_connections: 25,
            ..Default::default()
        },
    );

    let chosen = deps
        .selector
        .load_balance_provider(StrategyKind::LeastConnections)
        .await
        .unwrap();
    assert_eq!(chosen, Some("unreported".to_string()));
}
