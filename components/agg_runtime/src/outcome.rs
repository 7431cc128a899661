//! Aggregate outcome slots.
//!
//! An [`Outcome`] is a single-assignment, observable slot. Aggregation
//! policies deliver exactly one value into it; delivery attempts after the
//! outcome is decided are dropped. Callers either poll with [`Outcome::get`]
//! or register a delivery observer.

use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// A single-shot delivery observer.
type DeliveryObserver<T> = Box<dyn FnOnce(&T) + Send>;

struct OutcomeInner<T> {
    value: Option<T>,
    observers: Vec<DeliveryObserver<T>>,
}

/// Single-assignment slot carrying an aggregate outcome.
///
/// Cloning yields another handle to the same slot.
///
/// # Examples
///
/// ```
/// use agg_runtime::Outcome;
///
/// let outcome: Outcome<i32> = Outcome::new();
/// assert!(!outcome.is_delivered());
///
/// assert!(outcome.deliver(1));
/// assert!(!outcome.deliver(2)); // already decided, dropped
/// assert_eq!(outcome.get(), Some(1));
/// ```
pub struct Outcome<T> {
    inner: Arc<Mutex<OutcomeInner<T>>>,
}

impl<T> Clone for Outcome<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone + Send + 'static> Outcome<T> {
    /// Creates a new undelivered slot.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(OutcomeInner {
                value: None,
                observers: Vec::new(),
            })),
        }
    }

    /// Returns true once the outcome has been delivered.
    pub fn is_delivered(&self) -> bool {
        self.inner.lock().value.is_some()
    }

    /// Returns a copy of the delivered outcome, if any.
    pub fn get(&self) -> Option<T> {
        self.inner.lock().value.clone()
    }

    /// Delivers the outcome.
    ///
    /// The first delivery wins and returns true; any later delivery is
    /// dropped without effect and returns false.
    pub fn deliver(&self, value: T) -> bool {
        let observers = {
            let mut inner = self.inner.lock();
            if inner.value.is_some() {
                None
            } else {
                inner.value = Some(value.clone());
                Some(std::mem::take(&mut inner.observers))
            }
        };

        match observers {
            None => {
                tracing::debug!("delivery after outcome was decided discarded");
                false
            }
            Some(observers) => {
                tracing::debug!(observers = observers.len(), "aggregate outcome delivered");
                for observer in observers {
                    observer(&value);
                }
                true
            }
        }
    }

    /// Registers a single-shot delivery observer.
    ///
    /// Runs when the outcome is delivered, or immediately if it already
    /// has been.
    pub fn on_delivered<F>(&self, observer: F)
    where
        F: FnOnce(&T) + Send + 'static,
    {
        let delivered = {
            let mut inner = self.inner.lock();
            match inner.value.clone() {
                None => {
                    inner.observers.push(Box::new(observer));
                    return;
                }
                Some(value) => value,
            }
        };
        observer(&delivered);
    }
}

impl<T: Clone + Send + 'static> Default for Outcome<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let delivered = self.inner.lock().value.is_some();
        f.debug_struct("Outcome")
            .field("delivered", &delivered)
            .finish()
    }
}
