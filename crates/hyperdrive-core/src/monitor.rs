//! Telemetry snapshots and switch audit trail
//!
//! Holds the latest performance snapshot per provider, populated by an
//! external telemetry feed, and a bounded audit trail of provider
//! switches. The audit path is best-effort: nothing in here is allowed to
//! fail a switch that already committed.

use crate::constants::{SWITCH_HISTORY_MAX_ENTRIES, SWITCH_HISTORY_RETENTION_HOURS};
use crate::metrics::MetricsEmitter;
use chrono::{Duration, Utc};
use dashmap::DashMap;
use hyperdrive_domain::metrics::{ProviderMetrics, SwitchRecord};
use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard};
use tracing::info;

/// Performance monitoring state for all providers
pub struct PerformanceMonitor {
    /// Latest reported metrics per provider type tag
    metrics: DashMap<String, ProviderMetrics>,
    /// Recent switches, newest at the back
    switches: Mutex<VecDeque<SwitchRecord>>,
    /// Counter/gauge emission
    emitter: MetricsEmitter,
}

impl PerformanceMonitor {
    /// Create a monitor with no reported metrics
    pub fn new() -> Self {
        Self {
            metrics: DashMap::new(),
            switches: Mutex::new(VecDeque::new()),
            emitter: MetricsEmitter::new(),
        }
    }

    /// Telemetry feed write contract: store the latest snapshot for a
    /// provider, replacing any previous one
    pub fn ingest(&self, kind: impl Into<String>, metrics: ProviderMetrics) {
        let kind = kind.into();
        self.emitter.record_ingest(&kind, metrics.active_connections);
        self.metrics.insert(kind, metrics);
    }

    /// Latest metrics for a provider; `None` when it has never reported
    pub fn metrics_for(&self, kind: &str) -> Option<ProviderMetrics> {
        self.metrics.get(kind).map(|entry| *entry.value())
    }

    /// Point-in-time copy of every reported snapshot
    pub fn snapshot(&self) -> HashMap<String, ProviderMetrics> {
        self.metrics
            .iter()
            .map(|entry| (entry.key().clone(), *entry.value()))
            .collect()
    }

    /// Open connections for a provider, zero when unreported
    pub fn active_connections(&self, kind: &str) -> u32 {
        self.metrics_for(kind)
            .map_or(0, |metrics| metrics.active_connections)
    }

    /// Best-effort audit hook called after a switch commits
    ///
    /// Appends to the bounded history and logs; this must never propagate
    /// a failure to the caller of a switch.
    pub fn record_switch(&self, record: SwitchRecord) {
        info!(
            category = record.category.as_str(),
            from = record.from.as_deref().unwrap_or("none"),
            to = record.to.as_str(),
            reason = record.reason.as_str(),
            "Provider switch recorded"
        );
        self.emitter
            .record_switch(record.category, record.from.as_deref(), &record.to);

        let mut switches = self.switch_history();
        switches.push_back(record);

        let cutoff = Utc::now() - Duration::hours(SWITCH_HISTORY_RETENTION_HOURS);
        while let Some(front) = switches.front() {
            if front.timestamp < cutoff || switches.len() > SWITCH_HISTORY_MAX_ENTRIES {
                switches.pop_front();
            } else {
                break;
            }
        }
    }

    /// Retained switch records, oldest first
    pub fn recent_switches(&self) -> Vec<SwitchRecord> {
        self.switch_history().iter().cloned().collect()
    }

    /// The most recent committed switch, if any
    pub fn last_switch(&self) -> Option<SwitchRecord> {
        self.switch_history().back().cloned()
    }

    /// Forget everything reported for one provider
    pub fn reset(&self, kind: &str) {
        self.metrics.remove(kind);
    }

    /// Forget all reported metrics and the switch history
    pub fn reset_all(&self) {
        self.metrics.clear();
        self.switch_history().clear();
    }

    fn switch_history(&self) -> MutexGuard<'_, VecDeque<SwitchRecord>> {
        match self.switches.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Default for PerformanceMonitor {
    fn default() -> Self {
        Self::new()
    }
}
