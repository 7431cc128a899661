//! Command-line argument definitions.

use clap::{Parser, ValueEnum};

/// Command-line arguments for the converge scenario runner.
#[derive(Debug, Parser)]
#[command(
    name = "converge",
    version,
    about = "Runs concurrent-operation aggregation scenarios"
)]
pub struct Cli {
    /// Path to a JSON scenario file
    #[arg(long, conflicts_with = "demo")]
    pub scenario: Option<String>,

    /// Run the built-in demo scenario
    #[arg(long)]
    pub demo: bool,

    /// Aggregation policy to apply; omitted runs all four
    #[arg(long, value_enum)]
    pub policy: Option<PolicyArg>,

    /// Reject immediately instead of never delivering when first-settled
    /// aggregation is given an empty operation set
    #[arg(long)]
    pub reject_empty: bool,

    /// Emit a JSON report instead of human-readable text
    #[arg(long)]
    pub json: bool,
}

/// Aggregation policy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Every value, or the first observed rejection
    AllFulfilled,
    /// Whichever operation settles first, success or failure
    FirstSettled,
    /// The first fulfillment, or every rejection
    FirstFulfilled,
    /// Every settlement record, never a failure
    AllSettled,
}

impl PolicyArg {
    /// All policies, in report order.
    pub fn all() -> [PolicyArg; 4] {
        [
            PolicyArg::AllFulfilled,
            PolicyArg::FirstSettled,
            PolicyArg::FirstFulfilled,
            PolicyArg::AllSettled,
        ]
    }

    /// The policy's report name.
    pub fn name(self) -> &'static str {
        match self {
            PolicyArg::AllFulfilled => "all-fulfilled",
            PolicyArg::FirstSettled => "first-settled",
            PolicyArg::FirstFulfilled => "first-fulfilled",
            PolicyArg::AllSettled => "all-settled",
        }
    }
}
