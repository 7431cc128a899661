//! Integration test suite for the Converge aggregation runtime
//!
//! This crate provides integration tests that verify components work
//! together correctly across component boundaries.

/// Re-export components for test convenience
pub mod components {
    pub use agg_cli;
    pub use agg_runtime;
    pub use op_types;
}
