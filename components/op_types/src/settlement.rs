//! Settlement records.
//!
//! A [`Settlement`] captures the terminal state of one operation: fulfilled
//! with a value or rejected with a reason. Records are immutable once
//! written; observing a settlement twice yields the identical record.

use crate::{OpError, OpValue};
use serde::{Deserialize, Serialize};

/// The terminal record of one operation.
///
/// Serialized with an internal `status` tag, so a fulfilled record reads
/// `{"status": "fulfilled", "value": ...}` and a rejected one
/// `{"status": "rejected", "reason": ...}`.
///
/// # Examples
///
/// ```
/// use op_types::{OpValue, Settlement};
///
/// let record = Settlement::fulfilled(OpValue::Int(1));
/// assert!(record.is_fulfilled());
/// assert_eq!(record.value(), Some(&OpValue::Int(1)));
/// assert_eq!(record.reason(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Settlement {
    /// The operation completed with a value.
    Fulfilled {
        /// The fulfillment value
        value: OpValue,
    },
    /// The operation failed with a reason.
    Rejected {
        /// The rejection reason
        reason: OpError,
    },
}

impl Settlement {
    /// Creates a fulfilled record.
    pub fn fulfilled(value: OpValue) -> Self {
        Settlement::Fulfilled { value }
    }

    /// Creates a rejected record.
    pub fn rejected(reason: OpError) -> Self {
        Settlement::Rejected { reason }
    }

    /// Returns true if this record is a fulfillment.
    pub fn is_fulfilled(&self) -> bool {
        matches!(self, Settlement::Fulfilled { .. })
    }

    /// Returns true if this record is a rejection.
    pub fn is_rejected(&self) -> bool {
        matches!(self, Settlement::Rejected { .. })
    }

    /// Returns the fulfillment value, if any.
    pub fn value(&self) -> Option<&OpValue> {
        match self {
            Settlement::Fulfilled { value } => Some(value),
            Settlement::Rejected { .. } => None,
        }
    }

    /// Returns the rejection reason, if any.
    pub fn reason(&self) -> Option<&OpError> {
        match self {
            Settlement::Fulfilled { .. } => None,
            Settlement::Rejected { reason } => Some(reason),
        }
    }
}
