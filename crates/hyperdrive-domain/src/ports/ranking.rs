//! External ranking engine contract
//!
//! The intelligent selection strategy delegates ordering to an external
//! collaborator. The core hands over the operation context plus the
//! candidate pool and takes the first recommendation; an empty or failed
//! ranking falls back to the strategies defined in the selector.

use crate::error::Result;
use crate::provider::ProviderCategory;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Context describing the operation a ranking is requested for
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OperationContext {
    /// What the caller is about to do (e.g. `"load-balance"`, `"failover"`)
    pub operation: String,
    /// Category the operation targets, when known
    pub category: Option<ProviderCategory>,
}

impl OperationContext {
    /// Create a context for a named operation
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            category: None,
        }
    }

    /// Attach the target category
    pub fn with_category(mut self, category: ProviderCategory) -> Self {
        self.category = Some(category);
        self
    }
}

/// Ranks candidate providers for an operation
#[async_trait]
pub trait RankingEngine: Send + Sync {
    /// Return the candidates ordered best-first
    ///
    /// Implementations may return fewer entries than they were given;
    /// entries not present in `candidates` are ignored by the caller.
    async fn rank(
        &self,
        context: &OperationContext,
        candidates: &[String],
    ) -> Result<Vec<String>>;
}
