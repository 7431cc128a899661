//! Core types for concurrent-operation aggregation.
//!
//! This crate provides the foundational types shared by the aggregation
//! runtime and its callers:
//!
//! - [`OpValue`] - Payload values operations fulfill with
//! - [`OpError`] / [`FailureKind`] - Rejection reasons
//! - [`Settlement`] - Tagged terminal-state records
//! - [`AggregateError`] - Failure shapes of aggregate outcomes
//!
//! # Examples
//!
//! ```
//! use op_types::{OpError, OpValue, Settlement};
//!
//! let fulfilled = Settlement::fulfilled(OpValue::Text("data".to_string()));
//! assert!(fulfilled.is_fulfilled());
//!
//! let rejected = Settlement::rejected(OpError::timeout("no response"));
//! assert!(rejected.is_rejected());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod settlement;
mod value;

pub use error::{AggregateError, FailureKind, OpError};
pub use settlement::Settlement;
pub use value::OpValue;
