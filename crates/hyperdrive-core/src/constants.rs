//! Runtime constants
//!
//! Defaults and tuning knobs for the orchestration core. Anything an
//! operator is expected to change lives in configuration instead.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "HYPERDRIVE";

/// Environment variable consulted for the log filter
pub const LOG_ENV_VAR: &str = "HYPERDRIVE_LOG";

/// Strategy the `auto` strategy resolves to when nothing is configured
pub const DEFAULT_STRATEGY: &str = "performance";

// ============================================================================
// SELECTION CONSTANTS
// ============================================================================

/// Default weight of the latency score in performance selection
pub const DEFAULT_LATENCY_WEIGHT: f64 = 0.5;

/// Default weight of the throughput score in performance selection
pub const DEFAULT_THROUGHPUT_WEIGHT: f64 = 0.3;

/// Default weight of the reliability score in performance selection
pub const DEFAULT_RELIABILITY_WEIGHT: f64 = 0.2;

/// Response time at or above which the latency score bottoms out at zero
pub const LATENCY_SCORE_CEILING_MS: f64 = 1_000.0;

/// Throughput normalization scale in Mbps
pub const THROUGHPUT_SCORE_SCALE_MBPS: f64 = 100.0;

/// Cost assumed for provider types missing from the configured cost table
pub const DEFAULT_PROVIDER_COST: f64 = 1.0;

/// Response time assumed for unreported providers when breaking cost ties
pub const TIE_BREAK_LATENCY_MS: f64 = 100.0;

/// How long the intelligent strategy waits on the ranking engine
pub const DEFAULT_RANKING_TIMEOUT_MS: u64 = 2_000;

// ============================================================================
// AUDIT CONSTANTS
// ============================================================================

/// Switch audit records older than this are pruned
pub const SWITCH_HISTORY_RETENTION_HOURS: i64 = 24;

/// Hard cap on retained switch audit records
pub const SWITCH_HISTORY_MAX_ENTRIES: usize = 1_000;
