//! Unit tests for the facade surface
//!
//! Every public operation reports through the outcome envelope; these
//! tests exercise the surface the way an API layer would.

use crate::support::{TestProvider, hyperdrive};
use hyperdrive_core::config::SelectionConfig;
use hyperdrive_domain::configuration::ProviderLists;
use hyperdrive_domain::metrics::ProviderMetrics;
use hyperdrive_domain::provider::{CandidateList, ProviderCategory};
use hyperdrive_domain::strategy::StrategyKind;

#[test]
fn register_and_list_through_the_envelope() {
    let hd = hyperdrive();

    let outcome = hd.register_storage_provider(TestProvider::storage("ipfs"));
    assert!(!outcome.is_error);
    assert_eq!(outcome.result.unwrap().kind, "ipfs");

    hd.register_provider(TestProvider::arc(ProviderCategory::Network, "libp2p"));

    let all = hd.available_providers(None);
    assert_eq!(all.result.unwrap().len(), 2);

    let storage_only = hd.available_providers(Some(ProviderCategory::Storage));
    assert_eq!(storage_only.result.unwrap().len(), 1);
}

#[test]
fn switch_failure_is_reported_not_raised() {
    let hd = hyperdrive();

    let outcome = hd.switch_storage_provider("never-registered");
    assert!(outcome.is_error);
    assert!(outcome.message.contains("not registered"));
    assert!(outcome.result.is_none());

    // Nothing was activated
    assert_eq!(hd.current_provider(ProviderCategory::Storage).result, Some(None));
}

#[test]
fn successful_switch_names_old_and_new_provider() {
    let hd = hyperdrive();
    hd.register_storage_provider(TestProvider::storage("mongo"));
    hd.register_storage_provider(TestProvider::storage("ipfs"));

    let first = hd.switch_storage_provider("mongo");
    assert!(!first.is_error);
    assert!(first.message.contains("set to mongo"));

    let second = hd.switch_storage_provider("ipfs");
    assert!(!second.is_error);
    assert!(second.message.contains("from mongo to ipfs"));
}

#[tokio::test]
async fn auto_switch_message_carries_the_reason() {
    let hd = hyperdrive();
    hd.register_storage_provider(TestProvider::storage("mongo"));
    hd.register_storage_provider(TestProvider::storage("ipfs"));
    hd.switch_storage_provider("mongo");

    let outcome = hd
        .auto_switch(ProviderCategory::Storage, "primary unreachable")
        .await;
    assert!(!outcome.is_error);
    assert!(outcome.message.contains("primary unreachable"));
    assert_eq!(outcome.result.unwrap().to, "ipfs");
}

#[test]
fn list_membership_is_idempotent_through_the_facade() {
    let hd = hyperdrive();

    assert_eq!(
        hd.add_to_list(CandidateList::FailOver, "ipfs").result,
        Some(true)
    );
    let repeat = hd.add_to_list(CandidateList::FailOver, "ipfs");
    assert!(!repeat.is_error);
    assert_eq!(repeat.result, Some(false));
    assert!(repeat.message.contains("already"));

    assert_eq!(
        hd.lists().result.unwrap().auto_fail_over_list,
        vec!["ipfs"]
    );

    let absent = hd.remove_from_list(CandidateList::Replication, "ghost");
    assert!(!absent.is_error);
    assert_eq!(absent.result, Some(false));
}

#[test]
fn set_lists_then_get_lists_round_trips() {
    let hd = hyperdrive();

    let lists = ProviderLists {
        auto_fail_over_list: vec!["ipfs".into(), "mongo".into()],
        auto_replication_list: vec!["holo".into()],
        auto_load_balance_list: vec!["ipfs".into(), "holo".into()],
        is_auto_fail_over_enabled: true,
        is_auto_replication_enabled: false,
        is_auto_load_balance_enabled: true,
    };

    assert!(!hd.set_lists(lists.clone()).is_error);
    assert_eq!(hd.lists().result.unwrap(), lists);
}

#[tokio::test]
async fn load_balance_honors_the_feature_flag() {
    let hd = hyperdrive();
    hd.register_storage_provider(TestProvider::storage("mongo"));
    hd.switch_storage_provider("mongo");
    hd.add_to_list(CandidateList::LoadBalance, "elsewhere");

    hd.set_auto_load_balance_enabled(false);
    let outcome = hd.select_for_load_balancing(StrategyKind::RoundRobin).await;
    assert!(!outcome.is_error);
    assert_eq!(outcome.result, Some(Some("mongo".to_string())));
    assert!(outcome.message.contains("disabled"));
}

#[tokio::test]
async fn facade_selection_helpers_report_their_targets() {
    let hd = hyperdrive();
    hd.add_to_list(CandidateList::FailOver, "standby");
    hd.add_to_list(CandidateList::Replication, "mirror");
    hd.ingest_metrics(
        "standby",
        ProviderMetrics {
            response_time_ms: 30.0,
            throughput_mbps: 60.0,
            uptime_percent: 99.9,
            error_rate: 0.001,
            active_connections: 1,
        },
    );

    let failover = hd.failover_provider(Some("primary")).await;
    assert_eq!(failover.result, Some(Some("standby".to_string())));

    let replication = hd.replication_provider(Some("primary")).await;
    assert_eq!(replication.result, Some(Some("mirror".to_string())));
}

#[test]
fn configuration_aggregates_lists_flags_and_current_providers() {
    let hd = hyperdrive();
    hd.register_storage_provider(TestProvider::storage("mongo"));
    hd.switch_storage_provider("mongo");
    hd.add_to_list(CandidateList::FailOver, "mongo");
    hd.set_auto_replication_enabled(false);

    let config = hd.configuration().result.unwrap();
    assert_eq!(
        config.current_providers[&ProviderCategory::Storage].as_deref(),
        Some("mongo")
    );
    assert_eq!(config.lists.auto_fail_over_list, vec!["mongo"]);
    assert!(!config.lists.is_auto_replication_enabled);
}

#[test]
fn invalid_selection_config_update_is_rejected_with_detail() {
    let hd = hyperdrive();

    let mut bad = SelectionConfig::default();
    bad.ranking_timeout_ms = 0;

    let outcome = hd.update_selection_config(bad);
    assert!(outcome.is_error);
    assert!(outcome.message.contains("ranking_timeout_ms"));

    // Prior configuration still in force
    assert_eq!(
        hd.deps().selection_config.current().ranking_timeout_ms,
        SelectionConfig::default().ranking_timeout_ms
    );
}

#[test]
fn switch_history_is_reported_oldest_first() {
    let hd = hyperdrive();
    hd.register_storage_provider(TestProvider::storage("mongo"));
    hd.register_storage_provider(TestProvider::storage("ipfs"));

    hd.switch_storage_provider("mongo");
    hd.switch_storage_provider("ipfs");

    let history = hd.recent_switches().result.unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].to, "mongo");
    assert_eq!(history[1].to, "ipfs");
}

#[test]
fn global_instance_is_created_once() {
    let first = hyperdrive_core::orchestrator::HyperDrive::global();
    let second = hyperdrive_core::orchestrator::HyperDrive::global();
    assert!(std::ptr::eq(first, second));
}
