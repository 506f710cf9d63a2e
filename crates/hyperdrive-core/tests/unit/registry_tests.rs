//! Unit tests for the provider registry
//!
//! Covers handle identity, idempotent registration and safety of
//! concurrent readers and writers.

use crate::support::TestProvider;
use hyperdrive_core::registry::ProviderRegistry;
use hyperdrive_domain::error::Error;
use hyperdrive_domain::provider::{CandidateList, ProviderCategory};
use std::sync::Arc;

#[test]
fn registered_handle_is_returned_by_identity() {
    let registry = ProviderRegistry::new();
    let handle = TestProvider::arc(ProviderCategory::Nft, "ethereum");
    registry.register(ProviderCategory::Nft, "ethereum", Arc::clone(&handle));

    let fetched = registry.get(ProviderCategory::Nft, "ethereum").unwrap();
    assert!(Arc::ptr_eq(&handle, &fetched));
    assert!(registry.is_registered(ProviderCategory::Nft, "ethereum"));
}

#[test]
fn unregistered_pair_returns_not_found_never_panics() {
    let registry = ProviderRegistry::new();
    registry.register(
        ProviderCategory::Nft,
        "ethereum",
        TestProvider::arc(ProviderCategory::Nft, "ethereum"),
    );

    // Same kind under a different category is still unregistered
    let result = registry.get(ProviderCategory::Storage, "ethereum");
    assert!(matches!(result, Err(Error::NotFound { .. })));
}

#[test]
fn current_pointer_starts_at_none_for_every_category() {
    let registry = ProviderRegistry::new();
    for (category, current) in registry.current_providers() {
        assert!(current.is_none(), "{category} should start with no current");
    }
}

#[test]
fn concurrent_registration_and_reads_are_safe() {
    let registry = Arc::new(ProviderRegistry::new());

    let mut workers = Vec::new();
    for worker in 0..8 {
        let registry = Arc::clone(&registry);
        workers.push(std::thread::spawn(move || {
            for index in 0..50 {
                let kind = format!("provider-{worker}-{index}");
                registry.register(
                    ProviderCategory::Storage,
                    kind.clone(),
                    TestProvider::arc(ProviderCategory::Storage, &kind),
                );
                // Readers must never observe a partially updated registry
                let _ = registry.list_available(Some(ProviderCategory::Storage));
                assert!(registry.is_registered(ProviderCategory::Storage, &kind));
            }
        }));
    }
    for worker in workers {
        worker.join().unwrap();
    }

    assert_eq!(
        registry.available_kinds(ProviderCategory::Storage).len(),
        8 * 50
    );
}

#[test]
fn concurrent_list_mutation_keeps_lists_consistent() {
    let registry = Arc::new(ProviderRegistry::new());

    let mut workers = Vec::new();
    for worker in 0..4 {
        let registry = Arc::clone(&registry);
        workers.push(std::thread::spawn(move || {
            for index in 0..50 {
                let kind = format!("p{}", (worker * 50 + index) % 10);
                // Mixed adds and removes of a small shared key space
                if index % 3 == 0 {
                    registry.remove_from_list(CandidateList::LoadBalance, &kind);
                } else {
                    registry.add_to_list(CandidateList::LoadBalance, &kind);
                }
            }
        }));
    }
    for worker in workers {
        worker.join().unwrap();
    }

    // Whatever interleaving happened, the dedup invariant holds
    let list = registry.list(CandidateList::LoadBalance);
    let unique: std::collections::HashSet<_> = list.iter().collect();
    assert_eq!(unique.len(), list.len());
}
