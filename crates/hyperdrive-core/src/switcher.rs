//! Guarded provider switching
//!
//! A switch moves one category's current pointer to a different registered
//! provider. All switches, for every category, contend on one global gate:
//! a second request arriving while a switch is in flight fails immediately
//! with a concurrency error instead of queueing. The gate is intentionally
//! global across categories; narrowing it to per-category gates changes
//! observable behavior and needs explicit sign-off.

use crate::metrics::MetricsEmitter;
use crate::monitor::PerformanceMonitor;
use crate::registry::ProviderRegistry;
use crate::selector::Selector;
use chrono::Utc;
use hyperdrive_domain::error::{Error, Result};
use hyperdrive_domain::metrics::{SwitchRecord, SwitchStatus};
use hyperdrive_domain::ports::OperationContext;
use hyperdrive_domain::provider::ProviderCategory;
use hyperdrive_domain::strategy::StrategyKind;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::info;

/// Releases the switch gate when the switch attempt ends, on every path
struct SwitchGuard<'a> {
    gate: &'a AtomicBool,
}

impl Drop for SwitchGuard<'_> {
    fn drop(&mut self) {
        self.gate.store(false, Ordering::Release);
    }
}

/// Performs guarded, audited transitions of the current pointers
pub struct ProviderSwitcher {
    registry: Arc<ProviderRegistry>,
    monitor: Arc<PerformanceMonitor>,
    selector: Arc<Selector>,
    /// Idle (false) / Switching (true), shared by all six categories
    switching: AtomicBool,
    emitter: MetricsEmitter,
}

impl ProviderSwitcher {
    /// Create a switcher over the shared components
    pub fn new(
        registry: Arc<ProviderRegistry>,
        monitor: Arc<PerformanceMonitor>,
        selector: Arc<Selector>,
    ) -> Self {
        Self {
            registry,
            monitor,
            selector,
            switching: AtomicBool::new(false),
            emitter: MetricsEmitter::new(),
        }
    }

    /// Claim the gate, or fail fast when a switch is already in flight
    fn try_acquire(&self) -> Result<SwitchGuard<'_>> {
        match self
            .switching
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
        {
            Ok(_) => Ok(SwitchGuard {
                gate: &self.switching,
            }),
            Err(_) => Err(Error::concurrency(
                "A provider switch is already in progress",
            )),
        }
    }

    /// Switch a category's current provider to `new_kind`
    ///
    /// The pointer only moves after the target is confirmed registered for
    /// the category. Audit logging after the pointer update is best-effort
    /// and cannot fail the switch or roll it back.
    pub fn switch_provider(
        &self,
        category: ProviderCategory,
        new_kind: &str,
        reason: &str,
    ) -> Result<SwitchRecord> {
        let _guard = self.try_acquire().map_err(|error| {
            self.emitter.record_switch_error(category, error.kind());
            error
        })?;

        if !self.registry.is_registered(category, new_kind) {
            self.emitter.record_switch_error(category, "validation");
            return Err(Error::validation(format!(
                "Provider '{new_kind}' is not registered for the {category} category; register it before switching"
            )));
        }

        let old = self.registry.current(category);
        self.registry.set_current(category, new_kind);

        let record = SwitchRecord {
            category,
            from: old,
            to: new_kind.to_string(),
            reason: reason.to_string(),
            timestamp: Utc::now(),
        };

        // Audit trail is best-effort; the pointer update above stands
        // regardless of what happens in here.
        self.monitor.record_switch(record.clone());
        info!(
            category = category.as_str(),
            from = record.from.as_deref().unwrap_or("none"),
            to = new_kind,
            reason = reason,
            "Provider switched"
        );

        Ok(record)
    }

    /// Pick the best alternative for a category and switch to it
    ///
    /// Candidates are every registered provider of the category except the
    /// current one, ranked by performance selection. No alternative at all
    /// is a not-found error and mutates nothing.
    pub async fn auto_switch(
        &self,
        category: ProviderCategory,
        reason: &str,
    ) -> Result<SwitchRecord> {
        let current = self.registry.current(category);
        let candidates: Vec<String> = self
            .registry
            .available_kinds(category)
            .into_iter()
            .filter(|kind| Some(kind.as_str()) != current.as_deref())
            .collect();

        if candidates.is_empty() {
            self.emitter.record_switch_error(category, "not_found");
            return Err(Error::not_found(format!(
                "No alternative provider available for the {category} category"
            )));
        }

        let context = OperationContext::new("auto-switch").with_category(category);
        let target = self
            .selector
            .select(StrategyKind::Performance, &candidates, None, &context)
            .await?
            .ok_or_else(|| {
                Error::internal("Performance selection returned nothing for a non-empty pool")
            })?;

        self.switch_provider(category, &target, reason)
    }

    /// Read-only snapshot of the switcher state
    ///
    /// Taken without the gate; a concurrent switch may race this read,
    /// which is acceptable for diagnostics.
    pub fn switch_status(&self) -> SwitchStatus {
        SwitchStatus {
            is_switching: self.switching.load(Ordering::Acquire),
            current_providers: self.registry.current_providers(),
            last_switch: self.monitor.last_switch(),
        }
    }
}
