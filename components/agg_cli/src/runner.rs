//! Scenario execution.
//!
//! The runner builds one operation set from a scenario, registers every
//! requested policy against it, drives the event loop to idle, and reads
//! each outcome slot into a serializable report. All policies observe the
//! same completion stream, the way the original promise-utilities
//! demonstration aggregates one promise array several ways.

use crate::cli::PolicyArg;
use crate::scenario::Scenario;
use agg_runtime::{aggregate, source, EmptySetBehavior, EventLoop, Operation};
use op_types::{AggregateError, OpValue, Settlement};
use serde::Serialize;
use std::fmt;

/// Outcome of one policy over a scenario.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OutcomeReport {
    /// Index-aligned values (all-fulfilled success)
    Values {
        /// One value per operation
        values: Vec<OpValue>,
    },
    /// A single winning value (first-settled / first-fulfilled success)
    Value {
        /// The winning value
        value: OpValue,
    },
    /// Index-aligned settlement records (all-settled)
    Records {
        /// One record per operation
        records: Vec<Settlement>,
    },
    /// An aggregate failure
    Failure {
        /// The failure selected by the policy
        error: AggregateError,
    },
    /// The policy never delivered (first-settled over an empty set)
    Undelivered,
}

/// Report for one policy run.
#[derive(Debug, Clone, Serialize)]
pub struct PolicyReport {
    /// Policy name
    pub policy: String,
    /// The aggregate outcome
    #[serde(flatten)]
    pub outcome: OutcomeReport,
}

/// Full report for a scenario run.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Scenario name
    pub scenario: String,
    /// Number of operations in the set
    pub operations: usize,
    /// One entry per policy, in report order
    pub policies: Vec<PolicyReport>,
}

/// Runs scenarios and collects aggregation reports.
///
/// # Examples
///
/// ```
/// use agg_cli::{Runner, Scenario};
///
/// let report = Runner::new().run(&Scenario::demo(), None);
/// assert_eq!(report.policies.len(), 4);
/// ```
pub struct Runner {
    first_settled_empty: EmptySetBehavior,
    first_fulfilled_empty: EmptySetBehavior,
}

impl Runner {
    /// Creates a runner with the default empty-set behaviors.
    pub fn new() -> Self {
        Self {
            first_settled_empty: EmptySetBehavior::NeverDeliver,
            first_fulfilled_empty: EmptySetBehavior::RejectImmediately,
        }
    }

    /// Makes first-settled aggregation reject immediately on an empty set
    /// instead of never delivering.
    pub fn with_reject_on_empty(mut self, enabled: bool) -> Self {
        self.first_settled_empty = if enabled {
            EmptySetBehavior::RejectImmediately
        } else {
            EmptySetBehavior::NeverDeliver
        };
        self
    }

    /// Runs the scenario under the selected policy, or all four.
    pub fn run(&self, scenario: &Scenario, policy: Option<PolicyArg>) -> Report {
        let mut event_loop = EventLoop::new();
        let ops: Vec<Operation> = scenario
            .operations
            .iter()
            .map(|spec| source::settle_after(&mut event_loop, spec.delay, spec.settlement.clone()))
            .collect();

        tracing::info!(
            scenario = %scenario.name,
            operations = ops.len(),
            "running scenario"
        );

        let selected: Vec<PolicyArg> = match policy {
            Some(p) => vec![p],
            None => PolicyArg::all().to_vec(),
        };

        // Register every policy before driving the loop so they all
        // observe the same completion stream.
        let pending: Vec<(PolicyArg, OutcomeReader)> = selected
            .iter()
            .map(|&p| (p, self.register(p, &ops)))
            .collect();

        event_loop.run_until_idle();

        let policies = pending
            .into_iter()
            .map(|(p, read)| PolicyReport {
                policy: p.name().to_string(),
                outcome: read(),
            })
            .collect();

        Report {
            scenario: scenario.name.clone(),
            operations: scenario.operations.len(),
            policies,
        }
    }

    fn register(&self, policy: PolicyArg, ops: &[Operation]) -> OutcomeReader {
        match policy {
            PolicyArg::AllFulfilled => {
                let outcome = aggregate::all_fulfilled(ops);
                Box::new(move || match outcome.get() {
                    Some(Ok(values)) => OutcomeReport::Values { values },
                    Some(Err(error)) => OutcomeReport::Failure { error },
                    None => OutcomeReport::Undelivered,
                })
            }
            PolicyArg::FirstSettled => {
                let outcome = aggregate::first_settled_with(ops, self.first_settled_empty);
                Box::new(move || match outcome.get() {
                    Some(Ok(value)) => OutcomeReport::Value { value },
                    Some(Err(error)) => OutcomeReport::Failure { error },
                    None => OutcomeReport::Undelivered,
                })
            }
            PolicyArg::FirstFulfilled => {
                let outcome = aggregate::first_fulfilled_with(ops, self.first_fulfilled_empty);
                Box::new(move || match outcome.get() {
                    Some(Ok(value)) => OutcomeReport::Value { value },
                    Some(Err(error)) => OutcomeReport::Failure { error },
                    None => OutcomeReport::Undelivered,
                })
            }
            PolicyArg::AllSettled => {
                let outcome = aggregate::all_settled(ops);
                Box::new(move || match outcome.get() {
                    Some(records) => OutcomeReport::Records { records },
                    None => OutcomeReport::Undelivered,
                })
            }
        }
    }
}

impl Default for Runner {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads a policy's outcome slot after the loop has been driven.
type OutcomeReader = Box<dyn FnOnce() -> OutcomeReport>;

impl fmt::Display for OutcomeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutcomeReport::Values { values } => {
                let rendered: Vec<String> = values.iter().map(|v| v.to_string()).collect();
                write!(f, "values: [{}]", rendered.join(", "))
            }
            OutcomeReport::Value { value } => write!(f, "value: {}", value),
            OutcomeReport::Records { records } => {
                let rendered: Vec<String> = records
                    .iter()
                    .map(|r| match r {
                        Settlement::Fulfilled { value } => format!("fulfilled({})", value),
                        Settlement::Rejected { reason } => format!("rejected({})", reason),
                    })
                    .collect();
                write!(f, "records: [{}]", rendered.join(", "))
            }
            OutcomeReport::Failure { error } => write!(f, "failed: {}", error),
            OutcomeReport::Undelivered => write!(f, "undelivered"),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Scenario: {} ({} operations)",
            self.scenario, self.operations
        )?;
        for entry in &self.policies {
            writeln!(f, "  {:<16} -> {}", entry.policy, entry.outcome)?;
        }
        Ok(())
    }
}
