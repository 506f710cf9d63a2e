//! Selection strategy identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Algorithms that reduce a candidate pool plus a metrics snapshot to one
/// chosen provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    /// Resolve to the configured default strategy at call time
    Auto,
    /// Rotate through candidates via a shared monotonic cursor
    RoundRobin,
    /// Cumulative-weight random draw, weighted by uptime and error rate
    WeightedRoundRobin,
    /// Pick the candidate with the fewest active connections
    LeastConnections,
    /// Placeholder policy: first candidate (not geo-aware yet)
    Geographic,
    /// Pick the cheapest candidate from the configured cost table
    CostBased,
    /// Weighted latency/throughput/reliability score, pick the maximum
    Performance,
    /// Delegate ranking to the external ranking engine
    Intelligent,
}

impl StrategyKind {
    /// Stable string form used in config files, logs and metrics labels
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::RoundRobin => "round-robin",
            Self::WeightedRoundRobin => "weighted-round-robin",
            Self::LeastConnections => "least-connections",
            Self::Geographic => "geographic",
            Self::CostBased => "cost-based",
            Self::Performance => "performance",
            Self::Intelligent => "intelligent",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = crate::error::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        // Accept both kebab-case (config files) and the bare lowercase
        // forms operators tend to type.
        match value.trim().to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "round-robin" | "roundrobin" => Ok(Self::RoundRobin),
            "weighted-round-robin" | "weightedroundrobin" => Ok(Self::WeightedRoundRobin),
            "least-connections" | "leastconnections" => Ok(Self::LeastConnections),
            "geographic" => Ok(Self::Geographic),
            "cost-based" | "costbased" => Ok(Self::CostBased),
            "performance" => Ok(Self::Performance),
            "intelligent" => Ok(Self::Intelligent),
            other => Err(crate::error::Error::configuration(format!(
                "Unknown selection strategy: {other}"
            ))),
        }
    }
}
