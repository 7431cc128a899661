//! Deterministic cooperative event loop.
//!
//! The loop owns a FIFO queue of immediate tasks and a timer queue driven
//! by a virtual clock measured in ticks. Timers due at the same instant
//! fire in scheduling order, which keeps runs fully deterministic: a set
//! of operations scheduled in index order settles in index order whenever
//! their deadlines collide.
//!
//! The loop never blocks. Driving it is explicit: [`EventLoop::run_until_idle`]
//! processes everything, [`EventLoop::advance_to`] stops the clock at a
//! chosen instant.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};
use std::fmt;

/// A unit of work executed by the event loop.
pub struct Task {
    callback: Box<dyn FnOnce() + Send>,
}

impl Task {
    /// Creates a new task from a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self {
            callback: Box::new(f),
        }
    }

    /// Executes the task, consuming it.
    pub fn run(self) {
        (self.callback)()
    }
}

impl fmt::Debug for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Task {{ ... }}")
    }
}

/// A scheduled timer. Ordered so the earliest `(due, seq)` pops first.
#[derive(Debug)]
struct TimerEntry {
    due: u64,
    seq: u64,
    task: Task,
}

impl PartialEq for TimerEntry {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl Eq for TimerEntry {}

impl PartialOrd for TimerEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimerEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap; reverse the comparison so the earliest
        // deadline (and, within a deadline, the earliest scheduling) wins.
        other
            .due
            .cmp(&self.due)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Cooperative single-threaded event loop with a virtual clock.
///
/// # Examples
///
/// ```
/// use agg_runtime::{EventLoop, Task};
///
/// let mut event_loop = EventLoop::new();
/// event_loop.schedule_after(10, Task::new(|| {}));
/// event_loop.run_until_idle();
/// assert_eq!(event_loop.now(), 10);
/// ```
#[derive(Debug, Default)]
pub struct EventLoop {
    tasks: VecDeque<Task>,
    timers: BinaryHeap<TimerEntry>,
    now: u64,
    next_seq: u64,
}

impl EventLoop {
    /// Creates a new event loop with an empty queue and the clock at zero.
    pub fn new() -> Self {
        Self {
            tasks: VecDeque::new(),
            timers: BinaryHeap::new(),
            now: 0,
            next_seq: 0,
        }
    }

    /// Returns the current virtual time in ticks.
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Adds a task to run on the next turn, before any clock advance.
    pub fn enqueue_task(&mut self, task: Task) {
        self.tasks.push_back(task);
    }

    /// Schedules a task to fire at the given instant.
    ///
    /// A deadline in the past is clamped to the current instant.
    pub fn schedule_at(&mut self, due: u64, task: Task) {
        let due = due.max(self.now);
        let seq = self.next_seq;
        self.next_seq += 1;
        self.timers.push(TimerEntry { due, seq, task });
    }

    /// Schedules a task to fire `delay` ticks from now.
    pub fn schedule_after(&mut self, delay: u64, task: Task) {
        let due = self.now + delay;
        self.schedule_at(due, task);
    }

    /// Returns true when no tasks or timers remain.
    pub fn is_idle(&self) -> bool {
        self.tasks.is_empty() && self.timers.is_empty()
    }

    /// Returns the number of timers that have not yet fired.
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Processes one turn: runs one queued task, or promotes the next
    /// same-instant timer batch onto the task queue after advancing the
    /// clock. Returns false once the loop is idle.
    pub fn process_one_turn(&mut self) -> bool {
        if let Some(task) = self.tasks.pop_front() {
            task.run();
            return true;
        }

        let due = match self.timers.peek() {
            Some(entry) => entry.due,
            None => return false,
        };
        if due > self.now {
            tracing::trace!(from = self.now, to = due, "advancing virtual clock");
            self.now = due;
        }
        self.promote_due_batch(due);
        true
    }

    /// Runs until no tasks or timers remain.
    pub fn run_until_idle(&mut self) {
        while self.process_one_turn() {}
    }

    /// Fires everything due at or before `instant`, then pins the clock
    /// there. Timers due later stay queued.
    pub fn advance_to(&mut self, instant: u64) {
        loop {
            while let Some(task) = self.tasks.pop_front() {
                task.run();
            }
            match self.timers.peek() {
                Some(entry) if entry.due <= instant => {
                    let due = entry.due;
                    if due > self.now {
                        tracing::trace!(from = self.now, to = due, "advancing virtual clock");
                        self.now = due;
                    }
                    self.promote_due_batch(due);
                }
                _ => break,
            }
        }
        if instant > self.now {
            self.now = instant;
        }
    }

    /// Moves every timer due exactly at `due` onto the task queue, in
    /// scheduling order.
    fn promote_due_batch(&mut self, due: u64) {
        while self.timers.peek().is_some_and(|entry| entry.due == due) {
            if let Some(entry) = self.timers.pop() {
                self.tasks.push_back(entry.task);
            }
        }
    }
}
