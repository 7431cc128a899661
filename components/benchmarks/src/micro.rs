//! Micro-benchmarks for the aggregation runtime.
//!
//! These benchmarks time aggregation over synthetic operation sets to
//! establish baseline throughput for each policy and for the raw
//! settle/observe machinery.

use crate::runner::{Benchmark, BenchmarkResult, BenchmarkSuite};
use agg_cli::{OperationSpec, PolicyArg, Scenario};
use agg_runtime::{aggregate, Operation};
use op_types::{OpError, OpValue, Settlement};
use std::time::Instant;

/// Builds a synthetic scenario of `operations` operations with spread-out
/// deadlines; every `reject_every`-th operation rejects.
pub fn synthetic_scenario(operations: usize, reject_every: usize) -> Scenario {
    let specs = (0..operations)
        .map(|i| {
            let delay = ((i * 37) % 1000) as u64;
            let settlement = if reject_every > 0 && i % reject_every == reject_every - 1 {
                Settlement::rejected(OpError::timeout(format!("op {} timed out", i)))
            } else {
                Settlement::fulfilled(OpValue::Int(i as i64))
            };
            OperationSpec { delay, settlement }
        })
        .collect();

    Scenario {
        name: format!("synthetic-{}", operations),
        operations: specs,
    }
}

/// Creates one benchmark per policy over the same synthetic scenario.
pub fn create_benchmarks(operations: usize) -> Vec<Benchmark> {
    let all_fulfill = synthetic_scenario(operations, 0);
    let mixed = synthetic_scenario(operations, 10);

    vec![
        Benchmark {
            name: "all_fulfilled".to_string(),
            description: format!("{} fulfilling operations, index-aligned values", operations),
            scenario: all_fulfill.clone(),
            policy: Some(PolicyArg::AllFulfilled),
        },
        Benchmark {
            name: "first_settled".to_string(),
            description: format!("{} operations, earliest settlement wins", operations),
            scenario: mixed.clone(),
            policy: Some(PolicyArg::FirstSettled),
        },
        Benchmark {
            name: "first_fulfilled".to_string(),
            description: format!("{} operations, earliest fulfillment wins", operations),
            scenario: mixed.clone(),
            policy: Some(PolicyArg::FirstFulfilled),
        },
        Benchmark {
            name: "all_settled".to_string(),
            description: format!("{} operations, every settlement recorded", operations),
            scenario: mixed,
            policy: Some(PolicyArg::AllSettled),
        },
        Benchmark {
            name: "all_policies".to_string(),
            description: format!("{} operations observed by all four policies", operations),
            scenario: all_fulfill,
            policy: None,
        },
    ]
}

/// Times raw settle/observe throughput without the event loop: N
/// pre-created operations aggregated, then settled directly.
pub fn settle_throughput(operations: usize) -> BenchmarkResult {
    let ops: Vec<Operation> = (0..operations).map(|_| Operation::new()).collect();
    let outcome = aggregate::all_settled(&ops);

    let start = Instant::now();
    for (i, op) in ops.iter().enumerate() {
        op.fulfill(OpValue::Int(i as i64));
    }
    let duration = start.elapsed();

    debug_assert!(outcome.is_delivered());

    BenchmarkResult {
        name: "settle_throughput".to_string(),
        description: format!("{} direct settlements through one observer each", operations),
        duration_ms: duration.as_secs_f64() * 1000.0,
        ops_per_sec: if duration.as_secs_f64() > 0.0 {
            operations as f64 / duration.as_secs_f64()
        } else {
            0.0
        },
    }
}

/// Runs the full micro-benchmark set at the default size.
pub fn run_all() -> Vec<BenchmarkResult> {
    let mut suite = BenchmarkSuite::new("micro".to_string());
    for bench in create_benchmarks(10_000) {
        suite.add(bench);
    }

    let mut results = suite.run();
    results.push(settle_throughput(100_000));
    results
}
