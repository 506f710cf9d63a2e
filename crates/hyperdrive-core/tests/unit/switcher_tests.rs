//! Unit tests for guarded switching
//!
//! Covers pointer integrity under concurrent switch attempts, validation
//! failures, auto-switch candidate handling and status snapshots.

use crate::support::{deps, healthy_metrics, register};
use hyperdrive_domain::error::Error;
use hyperdrive_domain::provider::ProviderCategory;
use std::sync::{Arc, Barrier};

#[test]
fn switch_moves_the_pointer_and_reports_old_and_new() {
    let deps = deps();
    register(&deps, ProviderCategory::Storage, &["mongo", "ipfs"]);

    let first = deps
        .switcher
        .switch_provider(ProviderCategory::Storage, "mongo", "bootstrap")
        .unwrap();
    assert_eq!(first.from, None);
    assert_eq!(first.to, "mongo");

    let second = deps
        .switcher
        .switch_provider(ProviderCategory::Storage, "ipfs", "manual switch")
        .unwrap();
    assert_eq!(second.from.as_deref(), Some("mongo"));
    assert_eq!(second.to, "ipfs");
    assert_eq!(
        deps.registry.current(ProviderCategory::Storage).as_deref(),
        Some("ipfs")
    );
}

#[test]
fn switching_to_an_unregistered_type_leaves_the_pointer_unchanged() {
    let deps = deps();
    register(&deps, ProviderCategory::Storage, &["mongo"]);
    deps.switcher
        .switch_provider(ProviderCategory::Storage, "mongo", "bootstrap")
        .unwrap();

    let result = deps
        .switcher
        .switch_provider(ProviderCategory::Storage, "ghost", "manual switch");
    assert!(matches!(result, Err(Error::Validation { .. })));
    assert_eq!(
        deps.registry.current(ProviderCategory::Storage).as_deref(),
        Some("mongo")
    );

    // The gate was released on the error path
    let retry = deps
        .switcher
        .switch_provider(ProviderCategory::Storage, "mongo", "manual switch");
    assert!(retry.is_ok());
}

#[test]
fn concurrent_switches_never_corrupt_the_pointer() {
    let deps = deps();
    register(&deps, ProviderCategory::Storage, &["a", "b"]);

    let barrier = Arc::new(Barrier::new(2));
    let mut workers = Vec::new();
    for target in ["a", "b"] {
        let switcher = Arc::clone(&deps.switcher);
        let barrier = Arc::clone(&barrier);
        workers.push(std::thread::spawn(move || {
            barrier.wait();
            switcher.switch_provider(ProviderCategory::Storage, target, "race")
        }));
    }
    let results: Vec<_> = workers
        .into_iter()
        .map(|worker| worker.join().unwrap())
        .collect();

    // Every attempt either succeeded or was turned away at the gate
    let mut successes = Vec::new();
    for result in results {
        match result {
            Ok(record) => successes.push(record),
            Err(Error::Concurrency { .. }) => {}
            Err(other) => panic!("unexpected error: {other}"),
        }
    }
    assert!(!successes.is_empty());

    // The final pointer is exactly one of the requested targets, and it
    // matches a switch that actually reported success
    let current = deps.registry.current(ProviderCategory::Storage).unwrap();
    assert!(current == "a" || current == "b");
    assert!(successes.iter().any(|record| record.to == current));

    // The gate never outlives a switch call
    assert!(!deps.switcher.switch_status().is_switching);
}

#[tokio::test]
async fn auto_switch_with_no_alternative_mutates_nothing() {
    let deps = deps();
    register(&deps, ProviderCategory::Search, &["solo"]);
    deps.switcher
        .switch_provider(ProviderCategory::Search, "solo", "bootstrap")
        .unwrap();

    let result = deps.switcher.auto_switch(ProviderCategory::Search, "probe").await;
    assert!(matches!(result, Err(Error::NotFound { .. })));
    assert_eq!(
        deps.registry.current(ProviderCategory::Search).as_deref(),
        Some("solo")
    );
}

#[tokio::test]
async fn auto_switch_picks_the_best_performing_alternative() {
    let deps = deps();
    register(
        &deps,
        ProviderCategory::Storage,
        &["current", "sluggish", "snappy"],
    );
    deps.switcher
        .switch_provider(ProviderCategory::Storage, "current", "bootstrap")
        .unwrap();

    deps.monitor.ingest("sluggish", healthy_metrics(900.0));
    deps.monitor.ingest("snappy", healthy_metrics(25.0));

    let record = deps
        .switcher
        .auto_switch(ProviderCategory::Storage, "performance degradation")
        .await
        .unwrap();
    assert_eq!(record.to, "snappy");
    assert_eq!(record.reason, "performance degradation");
    assert_eq!(
        deps.registry.current(ProviderCategory::Storage).as_deref(),
        Some("snappy")
    );
}

#[test]
fn switch_status_snapshots_all_categories_and_the_last_switch() {
    let deps = deps();
    register(&deps, ProviderCategory::Map, &["osm"]);
    deps.switcher
        .switch_provider(ProviderCategory::Map, "osm", "bootstrap")
        .unwrap();

    let status = deps.switcher.switch_status();
    assert!(!status.is_switching);
    assert_eq!(status.current_providers.len(), 6);
    assert_eq!(
        status.current_providers[&ProviderCategory::Map].as_deref(),
        Some("osm")
    );
    assert!(status.current_providers[&ProviderCategory::Storage].is_none());
    assert_eq!(status.last_switch.unwrap().to, "osm");
}

#[test]
fn switches_for_different_categories_share_the_single_gate() {
    // Sequentially they both succeed; the shared gate only rejects
    // overlapping attempts, regardless of category.
    let deps = deps();
    register(&deps, ProviderCategory::Storage, &["mongo"]);
    register(&deps, ProviderCategory::Network, &["libp2p"]);

    assert!(
        deps.switcher
            .switch_provider(ProviderCategory::Storage, "mongo", "bootstrap")
            .is_ok()
    );
    assert!(
        deps.switcher
            .switch_provider(ProviderCategory::Network, "libp2p", "bootstrap")
            .is_ok()
    );
}
