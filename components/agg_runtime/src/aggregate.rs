//! Aggregation policies over sets of operations.
//!
//! Each policy observes every operation in an index-addressed set and
//! delivers one aggregate outcome into an [`Outcome`] slot:
//!
//! - [`all_fulfilled`] - every value, or the first observed rejection
//! - [`first_settled`] - whichever operation settles first, either way
//! - [`first_fulfilled`] - the first fulfillment, or every rejection
//! - [`all_settled`] - every settlement record, never a failure
//!
//! "First" is decided by arrival order of completion notifications, not by
//! index. Result sequences are index-aligned regardless of arrival order.
//! The policies only register observers and read recorded settlements;
//! operations are never mutated, restarted, or retried, and notifications
//! arriving after the outcome is decided are dropped.
//!
//! The registration sweep runs in index order, so operations that are
//! already settled when aggregation begins are observed lowest-index
//! first. Together with the event loop firing same-instant timers in
//! scheduling order, simultaneous completion resolves to the lowest index.

use crate::operation::Operation;
use crate::outcome::Outcome;
use op_types::{AggregateError, OpError, OpValue, Settlement};
use parking_lot::Mutex;
use std::sync::Arc;

/// Result alias for fallible aggregate outcomes.
pub type AggregateResult<T> = Result<T, AggregateError>;

/// Behavior of a first-wins policy over an empty operation set.
///
/// With nothing to observe there is no "first"; whether that means
/// hanging forever or failing fast is a configuration choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptySetBehavior {
    /// The outcome is never delivered.
    NeverDeliver,
    /// The outcome is rejected immediately with [`AggregateError::Empty`].
    RejectImmediately,
}

/// Progress of an all-fulfilled aggregation.
struct AllFulfilledProgress {
    values: Vec<Option<OpValue>>,
    remaining: usize,
}

/// Aggregates to an index-aligned sequence of values.
///
/// Delivers `Ok` with one value per operation once every operation
/// fulfills. Delivers `Err` with the reason of the first rejection
/// observed, in arrival order; fulfillments and rejections arriving after
/// that are discarded. An empty set delivers `Ok` with an empty sequence
/// immediately.
///
/// # Examples
///
/// ```
/// use agg_runtime::{aggregate, Operation};
/// use op_types::OpValue;
///
/// let ops = vec![Operation::new(), Operation::new()];
/// let outcome = aggregate::all_fulfilled(&ops);
///
/// ops[1].fulfill(OpValue::from("b"));
/// ops[0].fulfill(OpValue::from("a"));
///
/// // Values are index-aligned even though completion order was reversed.
/// let values = outcome.get().unwrap().unwrap();
/// assert_eq!(values, vec![OpValue::from("a"), OpValue::from("b")]);
/// ```
pub fn all_fulfilled(ops: &[Operation]) -> Outcome<AggregateResult<Vec<OpValue>>> {
    let outcome = Outcome::new();
    if ops.is_empty() {
        outcome.deliver(Ok(Vec::new()));
        return outcome;
    }

    let progress = Arc::new(Mutex::new(AllFulfilledProgress {
        values: vec![None; ops.len()],
        remaining: ops.len(),
    }));

    for (index, op) in ops.iter().enumerate() {
        let outcome = outcome.clone();
        let progress = Arc::clone(&progress);
        op.on_settled(move |settlement| {
            if outcome.is_delivered() {
                // The outcome was decided earlier; drop the notification.
                return;
            }
            match settlement {
                Settlement::Fulfilled { value } => {
                    let completed = {
                        let mut progress = progress.lock();
                        progress.values[index] = Some(value.clone());
                        progress.remaining -= 1;
                        if progress.remaining == 0 {
                            Some(progress.values.drain(..).flatten().collect::<Vec<_>>())
                        } else {
                            None
                        }
                    };
                    if let Some(values) = completed {
                        outcome.deliver(Ok(values));
                    }
                }
                Settlement::Rejected { reason } => {
                    outcome.deliver(Err(AggregateError::Rejected(reason.clone())));
                }
            }
        });
    }

    outcome
}

/// Aggregates to the outcome of the earliest-settling operation.
///
/// Delivers `Ok` with its value if that operation fulfilled, `Err` with
/// its reason if it rejected. Every other operation's eventual outcome is
/// discarded. An empty set never delivers; use [`first_settled_with`] to
/// reject immediately instead.
pub fn first_settled(ops: &[Operation]) -> Outcome<AggregateResult<OpValue>> {
    first_settled_with(ops, EmptySetBehavior::NeverDeliver)
}

/// [`first_settled`] with an explicit empty-set behavior.
pub fn first_settled_with(
    ops: &[Operation],
    empty: EmptySetBehavior,
) -> Outcome<AggregateResult<OpValue>> {
    let outcome = Outcome::new();
    if ops.is_empty() {
        if empty == EmptySetBehavior::RejectImmediately {
            outcome.deliver(Err(AggregateError::Empty));
        }
        return outcome;
    }

    for op in ops {
        let outcome = outcome.clone();
        op.on_settled(move |settlement| {
            if outcome.is_delivered() {
                return;
            }
            let result = match settlement {
                Settlement::Fulfilled { value } => Ok(value.clone()),
                Settlement::Rejected { reason } => Err(AggregateError::Rejected(reason.clone())),
            };
            outcome.deliver(result);
        });
    }

    outcome
}

/// Progress of a first-fulfilled aggregation.
struct FirstFulfilledProgress {
    reasons: Vec<Option<OpError>>,
    remaining: usize,
}

/// Aggregates to the value of the earliest fulfillment.
///
/// Rejections arriving before the first fulfillment do not decide the
/// outcome. Only if every operation rejects does the outcome become an
/// aggregate failure carrying all rejection reasons, index-aligned. An
/// empty set rejects immediately with [`AggregateError::Empty`]; use
/// [`first_fulfilled_with`] to never deliver instead.
pub fn first_fulfilled(ops: &[Operation]) -> Outcome<AggregateResult<OpValue>> {
    first_fulfilled_with(ops, EmptySetBehavior::RejectImmediately)
}

/// [`first_fulfilled`] with an explicit empty-set behavior.
pub fn first_fulfilled_with(
    ops: &[Operation],
    empty: EmptySetBehavior,
) -> Outcome<AggregateResult<OpValue>> {
    let outcome = Outcome::new();
    if ops.is_empty() {
        if empty == EmptySetBehavior::RejectImmediately {
            outcome.deliver(Err(AggregateError::Empty));
        }
        return outcome;
    }

    let progress = Arc::new(Mutex::new(FirstFulfilledProgress {
        reasons: vec![None; ops.len()],
        remaining: ops.len(),
    }));

    for (index, op) in ops.iter().enumerate() {
        let outcome = outcome.clone();
        let progress = Arc::clone(&progress);
        op.on_settled(move |settlement| {
            if outcome.is_delivered() {
                return;
            }
            match settlement {
                Settlement::Fulfilled { value } => {
                    outcome.deliver(Ok(value.clone()));
                }
                Settlement::Rejected { reason } => {
                    let exhausted = {
                        let mut progress = progress.lock();
                        progress.reasons[index] = Some(reason.clone());
                        progress.remaining -= 1;
                        if progress.remaining == 0 {
                            Some(progress.reasons.drain(..).flatten().collect::<Vec<_>>())
                        } else {
                            None
                        }
                    };
                    if let Some(reasons) = exhausted {
                        outcome.deliver(Err(AggregateError::AllRejected(reasons)));
                    }
                }
            }
        });
    }

    outcome
}

/// Progress of an all-settled aggregation.
struct AllSettledProgress {
    records: Vec<Option<Settlement>>,
    remaining: usize,
}

/// Aggregates to an index-aligned sequence of settlement records.
///
/// Always delivers a success: one record per operation, tagged fulfilled
/// or rejected according to that operation's actual terminal state. An
/// empty set delivers an empty sequence immediately.
pub fn all_settled(ops: &[Operation]) -> Outcome<Vec<Settlement>> {
    let outcome = Outcome::new();
    if ops.is_empty() {
        outcome.deliver(Vec::new());
        return outcome;
    }

    let progress = Arc::new(Mutex::new(AllSettledProgress {
        records: vec![None; ops.len()],
        remaining: ops.len(),
    }));

    for (index, op) in ops.iter().enumerate() {
        let outcome = outcome.clone();
        let progress = Arc::clone(&progress);
        op.on_settled(move |settlement| {
            let completed = {
                let mut progress = progress.lock();
                progress.records[index] = Some(settlement.clone());
                progress.remaining -= 1;
                if progress.remaining == 0 {
                    Some(progress.records.drain(..).flatten().collect::<Vec<_>>())
                } else {
                    None
                }
            };
            if let Some(records) = completed {
                outcome.deliver(records);
            }
        });
    }

    outcome
}
