//! Operation and aggregate failure types.
//!
//! An [`OpError`] is the rejection reason of a single operation. Aggregation
//! treats reasons as opaque: they are selected and surfaced, never
//! transformed. [`AggregateError`] is the failure shape of an aggregate
//! outcome.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Classification of an operation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The operation did not complete in time
    Timeout,
    /// The backing resource was unreachable
    Unavailable,
    /// The operation was given unusable input
    Invalid,
    /// Internal failure in the operation itself
    Internal,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FailureKind::Timeout => "timeout",
            FailureKind::Unavailable => "unavailable",
            FailureKind::Invalid => "invalid",
            FailureKind::Internal => "internal",
        };
        write!(f, "{}", name)
    }
}

/// The rejection reason of a single operation.
///
/// # Examples
///
/// ```
/// use op_types::{FailureKind, OpError};
///
/// let err = OpError::unavailable("server unreachable");
/// assert_eq!(err.kind, FailureKind::Unavailable);
/// assert_eq!(err.to_string(), "unavailable: server unreachable");
/// ```
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[error("{kind}: {message}")]
pub struct OpError {
    /// Failure classification
    pub kind: FailureKind,
    /// Human-readable failure message
    pub message: String,
}

impl OpError {
    /// Creates a new error with the given kind and message.
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Creates a timeout error.
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Timeout, message)
    }

    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Unavailable, message)
    }

    /// Creates an invalid-input error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Invalid, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Internal, message)
    }
}

/// Failure of an aggregate outcome.
///
/// Carries the reason(s) selected by the aggregation policy. Reasons are
/// surfaced exactly as the operations reported them.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregateError {
    /// The first rejection observed, in arrival order.
    #[error("operation rejected: {0}")]
    Rejected(OpError),

    /// Every operation in the set rejected; reasons are index-aligned.
    #[error("all {} operations rejected", .0.len())]
    AllRejected(Vec<OpError>),

    /// The operation set was empty and the policy requires at least one
    /// operation to observe.
    #[error("empty operation set")]
    Empty,
}
