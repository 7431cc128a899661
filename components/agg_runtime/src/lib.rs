//! Aggregation runtime for concurrent operations.
//!
//! This crate provides the machinery for observing sets of concurrent
//! asynchronous operations and combining their terminal outcomes:
//!
//! - [`Operation`] - Single-shot cells recording one operation's terminal state
//! - [`Outcome`] - Single-assignment slots carrying an aggregate outcome
//! - [`aggregate`] - The four aggregation policies
//! - [`EventLoop`] - Deterministic cooperative scheduler with a virtual clock
//! - [`source`] - Timer-backed and thread-backed operation sources
//!
//! # Overview
//!
//! Operations settle exactly once; the policies register completion
//! observers, never run work themselves, and deliver exactly one aggregate
//! outcome. Completion notifications arriving after the outcome is decided
//! are dropped.
//!
//! # Examples
//!
//! ```
//! use agg_runtime::{aggregate, source, EventLoop};
//! use op_types::{OpError, OpValue};
//!
//! let mut event_loop = EventLoop::new();
//! let ops = vec![
//!     source::fulfill_after(&mut event_loop, 100, OpValue::from("A")),
//!     source::reject_after(&mut event_loop, 50, OpError::timeout("B")),
//!     source::fulfill_after(&mut event_loop, 200, OpValue::from("C")),
//! ];
//!
//! let outcome = aggregate::first_fulfilled(&ops);
//! event_loop.run_until_idle();
//!
//! // The rejection at t=50 does not decide the outcome; the earliest
//! // fulfillment does.
//! assert_eq!(outcome.get().unwrap(), Ok(OpValue::from("A")));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod aggregate;
pub mod event_loop;
pub mod operation;
pub mod outcome;
pub mod source;

// Re-export main types at crate root
pub use aggregate::{AggregateResult, EmptySetBehavior};
pub use event_loop::{EventLoop, Task};
pub use operation::{OpState, Operation};
pub use outcome::Outcome;
