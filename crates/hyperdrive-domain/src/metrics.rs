//! Performance metrics and switch audit value objects

use crate::provider::ProviderCategory;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Latest performance snapshot for a single provider
///
/// Populated by an external telemetry feed; the orchestration core only
/// reads these values. A provider that has never reported has no entry,
/// and every consumer treats the absence as a defined fallback rather
/// than an error.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ProviderMetrics {
    /// Average response time in milliseconds
    pub response_time_ms: f64,
    /// Sustained throughput in megabits per second
    pub throughput_mbps: f64,
    /// Uptime percentage over the observation window (0-100)
    pub uptime_percent: f64,
    /// Failed request fraction (0-1)
    pub error_rate: f64,
    /// Currently open connections
    pub active_connections: u32,
}

/// Audit record of a single provider switch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchRecord {
    /// Category whose current pointer changed
    pub category: ProviderCategory,
    /// Previous provider, when one was active
    pub from: Option<String>,
    /// Provider the pointer now points at
    pub to: String,
    /// Why the switch happened (manual request, failover, rebalance, ...)
    pub reason: String,
    /// When the switch committed
    pub timestamp: DateTime<Utc>,
}

/// Read-only snapshot of the switcher state
///
/// Assembled without taking the switch gate, so it may lag a concurrent
/// switch by a moment; that is acceptable for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwitchStatus {
    /// Whether a switch is in flight right now
    pub is_switching: bool,
    /// Current provider per category (`None` where nothing was activated yet)
    pub current_providers: HashMap<ProviderCategory, Option<String>>,
    /// The most recent committed switch, if any
    pub last_switch: Option<SwitchRecord>,
}
