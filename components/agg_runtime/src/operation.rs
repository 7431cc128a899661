//! Single-shot operation cells.
//!
//! An [`Operation`] records the terminal state of one unit of asynchronous
//! work. It starts pending and settles exactly once, either fulfilled with
//! a value or rejected with an error. The settle methods are guarded by a
//! single-assignment invariant: the first settlement wins and every later
//! attempt is discarded without effect.

use op_types::{OpError, OpValue, Settlement};
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// The state of an operation.
///
/// Operations move from `Pending` to exactly one of the terminal states.
/// Once terminal, the state never changes again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpState {
    /// The initial state; the operation has not yet completed.
    Pending,
    /// The operation completed with a value.
    Fulfilled,
    /// The operation failed with an error.
    Rejected,
}

/// A single-shot completion observer.
type Observer = Box<dyn FnOnce(&Settlement) + Send>;

struct OperationInner {
    state: OpState,
    settlement: Option<Settlement>,
    observers: Vec<Observer>,
}

/// Handle to a single asynchronous operation.
///
/// Cloning yields another handle to the same underlying cell; a settlement
/// through any handle is visible through every handle. Handles are
/// `Send + Sync`, so an operation may be settled from a host thread while
/// observers were registered elsewhere.
///
/// # Examples
///
/// ```
/// use agg_runtime::{OpState, Operation};
/// use op_types::OpValue;
///
/// let op = Operation::new();
/// assert_eq!(op.state(), OpState::Pending);
///
/// op.fulfill(OpValue::Int(42));
/// assert_eq!(op.state(), OpState::Fulfilled);
///
/// // A second settlement is discarded.
/// assert!(!op.fulfill(OpValue::Int(7)));
/// assert_eq!(op.settlement().unwrap().value(), Some(&OpValue::Int(42)));
/// ```
#[derive(Clone)]
pub struct Operation {
    inner: Arc<Mutex<OperationInner>>,
}

impl Operation {
    /// Creates a new pending operation.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(OperationInner {
                state: OpState::Pending,
                settlement: None,
                observers: Vec::new(),
            })),
        }
    }

    /// Creates an operation already fulfilled with `value`.
    pub fn fulfilled(value: OpValue) -> Self {
        let op = Self::new();
        op.fulfill(value);
        op
    }

    /// Creates an operation already rejected with `error`.
    pub fn rejected(error: OpError) -> Self {
        let op = Self::new();
        op.reject(error);
        op
    }

    /// Returns the current state of the operation.
    pub fn state(&self) -> OpState {
        self.inner.lock().state
    }

    /// Returns true once the operation has reached a terminal state.
    pub fn is_settled(&self) -> bool {
        self.state() != OpState::Pending
    }

    /// Returns the recorded settlement, if the operation has settled.
    ///
    /// Reading the settlement is idempotent: the same record is returned
    /// on every call and nothing is re-executed.
    pub fn settlement(&self) -> Option<Settlement> {
        self.inner.lock().settlement.clone()
    }

    /// Fulfills the operation with `value`.
    ///
    /// Returns true if this call settled the operation, false if it was
    /// already terminal and the value was discarded.
    pub fn fulfill(&self, value: OpValue) -> bool {
        self.settle(Settlement::fulfilled(value))
    }

    /// Rejects the operation with `error`.
    ///
    /// Returns true if this call settled the operation, false if it was
    /// already terminal and the error was discarded.
    pub fn reject(&self, error: OpError) -> bool {
        self.settle(Settlement::rejected(error))
    }

    /// Settles the operation with the given record.
    ///
    /// The first settlement wins. Observers registered before settlement
    /// run in registration order, outside the cell lock, with a reference
    /// to the recorded settlement.
    pub fn settle(&self, settlement: Settlement) -> bool {
        let observers = {
            let mut inner = self.inner.lock();
            if inner.state != OpState::Pending {
                None
            } else {
                inner.state = if settlement.is_fulfilled() {
                    OpState::Fulfilled
                } else {
                    OpState::Rejected
                };
                inner.settlement = Some(settlement.clone());
                Some(std::mem::take(&mut inner.observers))
            }
        };

        match observers {
            None => {
                tracing::debug!("settlement after terminal state discarded");
                false
            }
            Some(observers) => {
                tracing::debug!(observers = observers.len(), "operation settled");
                for observer in observers {
                    observer(&settlement);
                }
                true
            }
        }
    }

    /// Registers a single-shot completion observer.
    ///
    /// If the operation is still pending, the observer runs when it
    /// settles. If it has already settled, the observer runs immediately
    /// with the recorded settlement.
    pub fn on_settled<F>(&self, observer: F)
    where
        F: FnOnce(&Settlement) + Send + 'static,
    {
        let recorded = {
            let mut inner = self.inner.lock();
            match inner.settlement.clone() {
                None => {
                    inner.observers.push(Box::new(observer));
                    return;
                }
                Some(settlement) => settlement,
            }
        };
        observer(&recorded);
    }

    /// Derives a new operation settled by applying `f` to this operation's
    /// settlement.
    ///
    /// # Examples
    ///
    /// ```
    /// use agg_runtime::Operation;
    /// use op_types::{OpValue, Settlement};
    ///
    /// let op = Operation::new();
    /// let doubled = op.chain(|s| match s.value() {
    ///     Some(OpValue::Int(n)) => Settlement::fulfilled(OpValue::Int(n * 2)),
    ///     _ => s.clone(),
    /// });
    ///
    /// op.fulfill(OpValue::Int(21));
    /// assert_eq!(doubled.settlement().unwrap().value(), Some(&OpValue::Int(42)));
    /// ```
    pub fn chain<F>(&self, f: F) -> Operation
    where
        F: FnOnce(&Settlement) -> Settlement + Send + 'static,
    {
        let derived = Operation::new();
        let handle = derived.clone();
        self.on_settled(move |settlement| {
            handle.settle(f(settlement));
        });
        derived
    }
}

impl Default for Operation {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operation")
            .field("state", &self.state())
            .finish()
    }
}
