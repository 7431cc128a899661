//! Operation sources.
//!
//! Operations are created by collaborators, not by the aggregation
//! policies. The sources here cover the two ways a completion can arrive:
//! a virtual-clock timer on the event loop (deterministic, used by the
//! scenario runner and tests) and a spawned host thread (real time,
//! demonstrating host-owned parallel completion).

use crate::event_loop::{EventLoop, Task};
use crate::operation::Operation;
use op_types::{OpError, OpValue, Settlement};
use std::time::Duration;

/// Creates an operation settled with `settlement` after `delay` ticks.
pub fn settle_after(event_loop: &mut EventLoop, delay: u64, settlement: Settlement) -> Operation {
    let op = Operation::new();
    let handle = op.clone();
    event_loop.schedule_after(
        delay,
        Task::new(move || {
            handle.settle(settlement);
        }),
    );
    op
}

/// Creates an operation that fulfills with `value` after `delay` ticks.
///
/// # Examples
///
/// ```
/// use agg_runtime::{source, EventLoop};
/// use op_types::OpValue;
///
/// let mut event_loop = EventLoop::new();
/// let op = source::fulfill_after(&mut event_loop, 100, OpValue::from("data"));
/// assert!(!op.is_settled());
///
/// event_loop.run_until_idle();
/// assert!(op.is_settled());
/// ```
pub fn fulfill_after(event_loop: &mut EventLoop, delay: u64, value: OpValue) -> Operation {
    settle_after(event_loop, delay, Settlement::fulfilled(value))
}

/// Creates an operation that rejects with `error` after `delay` ticks.
pub fn reject_after(event_loop: &mut EventLoop, delay: u64, error: OpError) -> Operation {
    settle_after(event_loop, delay, Settlement::rejected(error))
}

/// Creates an operation settled from a spawned host thread after a
/// real-time delay.
///
/// The thread owns the completion; the returned handle only observes it.
pub fn settle_from_thread(delay: Duration, settlement: Settlement) -> Operation {
    let op = Operation::new();
    let handle = op.clone();
    std::thread::spawn(move || {
        std::thread::sleep(delay);
        handle.settle(settlement);
    });
    op
}
