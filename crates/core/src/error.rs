//! Domain error model.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::violation::Violations;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic failures that a request handler can map
/// to a response. Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The payload parsed but broke one or more validation rules.
    ///
    /// Handlers recover from this by redisplaying the submitted input.
    #[error("validation failed: {0}")]
    ValidationFailed(Violations),

    /// A requested item does not exist.
    #[error("not found")]
    NotFound,

    /// Input text could not be bound to the expected type (e.g. non-numeric
    /// price). Reported before any validation rule runs.
    #[error("malformed input: {}", describe_failures(.0))]
    MalformedInput(Vec<BindingFailure>),
}

impl DomainError {
    pub fn validation_failed(violations: impl Into<Violations>) -> Self {
        Self::ValidationFailed(violations.into())
    }

    pub fn malformed(field: impl Into<String>, rejected_value: impl Into<String>) -> Self {
        Self::MalformedInput(vec![BindingFailure::new(field, rejected_value)])
    }
}

/// A field whose submitted text could not be converted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingFailure {
    pub field: String,
    pub rejected_value: String,
}

impl BindingFailure {
    /// Message-resolution code for conversion failures.
    pub const CODE: &'static str = "typeMismatch";

    pub fn new(field: impl Into<String>, rejected_value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            rejected_value: rejected_value.into(),
        }
    }
}

fn describe_failures(failures: &[BindingFailure]) -> String {
    failures
        .iter()
        .map(|f| format!("{}={:?}", f.field, f.rejected_value))
        .collect::<Vec<_>>()
        .join(", ")
}
