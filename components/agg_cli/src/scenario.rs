//! Scenario definitions.
//!
//! A scenario is an index-ordered list of operation specs: how long each
//! operation takes on the virtual clock and the terminal record it settles
//! with. Scenarios are stored as JSON; the settlement shares the tagged
//! settlement-record representation, so a spec reads
//! `{"delay": 100, "status": "fulfilled", "value": "A"}`.

use crate::error::CliResult;
use op_types::{OpError, OpValue, Settlement};
use serde::{Deserialize, Serialize};

/// One operation in a scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationSpec {
    /// Ticks until the operation settles
    pub delay: u64,
    /// The terminal record the operation settles with
    #[serde(flatten)]
    pub settlement: Settlement,
}

/// A named, index-ordered set of operations to aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Display name for reports
    #[serde(default = "default_name")]
    pub name: String,
    /// The operation set, in index order
    pub operations: Vec<OperationSpec>,
}

fn default_name() -> String {
    "scenario".to_string()
}

impl Scenario {
    /// Parses a scenario from JSON text.
    pub fn from_json(text: &str) -> CliResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Loads a scenario from a JSON file.
    pub fn load(path: &str) -> CliResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// The built-in demo: three staggered operations, one rejecting.
    ///
    /// Mirrors the classic promise-utilities demonstration: the slowest
    /// operation succeeds, the fastest succeeds sooner, and one fails in
    /// between, so every policy produces a different story.
    pub fn demo() -> Self {
        Self {
            name: "demo".to_string(),
            operations: vec![
                OperationSpec {
                    delay: 1200,
                    settlement: Settlement::fulfilled(OpValue::from("Task 1")),
                },
                OperationSpec {
                    delay: 800,
                    settlement: Settlement::fulfilled(OpValue::from("Task 2")),
                },
                OperationSpec {
                    delay: 1000,
                    settlement: Settlement::rejected(OpError::unavailable("Task 3 failed")),
                },
            ],
        }
    }
}
