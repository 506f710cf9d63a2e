//! Operation outcome envelope returned across the public boundary
//!
//! Every operation exposed by the orchestrator facade reports through this
//! envelope instead of raising: outer layers (API handlers, CLIs, admin
//! surfaces) get a uniform `{value, is_error, message, detail}` shape and
//! never see a panic or a raw error type.

use crate::error::Error;
use serde::{Deserialize, Serialize};

/// Uniform result envelope for facade operations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationOutcome<T> {
    /// The value produced on success
    pub result: Option<T>,
    /// Whether the operation failed
    pub is_error: bool,
    /// Human-readable summary of what happened
    pub message: String,
    /// Underlying failure chain, when one exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl<T> OperationOutcome<T> {
    /// Successful outcome carrying a value and a summary message
    pub fn ok(result: T, message: impl Into<String>) -> Self {
        Self {
            result: Some(result),
            is_error: false,
            message: message.into(),
            detail: None,
        }
    }

    /// Failed outcome derived from an error, with the source chain
    /// flattened into `detail`
    pub fn err(error: &Error) -> Self {
        Self {
            result: None,
            is_error: true,
            message: error.to_string(),
            detail: source_chain(error),
        }
    }

    /// Convert a result into an envelope, using `message` on success
    pub fn from_result(result: crate::error::Result<T>, message: impl Into<String>) -> Self {
        match result {
            Ok(value) => Self::ok(value, message),
            Err(error) => Self::err(&error),
        }
    }
}

impl<T> From<crate::error::Result<T>> for OperationOutcome<T> {
    fn from(result: crate::error::Result<T>) -> Self {
        Self::from_result(result, "ok")
    }
}

/// Flatten the `std::error::Error` source chain into one string
fn source_chain(error: &Error) -> Option<String> {
    let mut parts = Vec::new();
    let mut current = std::error::Error::source(error);
    while let Some(cause) = current {
        parts.push(cause.to_string());
        current = cause.source();
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(": "))
    }
}
