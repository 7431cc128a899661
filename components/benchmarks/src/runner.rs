//! Benchmark runner and result types.

use agg_cli::{PolicyArg, Runner, Scenario};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// A single benchmark: a synthetic scenario aggregated under a policy.
#[derive(Debug, Clone)]
pub struct Benchmark {
    /// Name of the benchmark
    pub name: String,
    /// Description of what the benchmark measures
    pub description: String,
    /// The scenario to aggregate
    pub scenario: Scenario,
    /// Policy to apply; `None` runs all four
    pub policy: Option<PolicyArg>,
}

/// Result of running a benchmark.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// Name of the benchmark
    pub name: String,
    /// Description of the benchmark
    pub description: String,
    /// Duration in milliseconds
    pub duration_ms: f64,
    /// Observed operations settled per second
    pub ops_per_sec: f64,
}

impl Benchmark {
    /// Runs the benchmark once.
    pub fn run(&self) -> BenchmarkResult {
        let runner = Runner::new();
        let operations = self.scenario.operations.len();

        let start = Instant::now();
        let _report = runner.run(&self.scenario, self.policy);
        let duration = start.elapsed();

        let duration_ms = duration.as_secs_f64() * 1000.0;
        let ops_per_sec = if duration.as_secs_f64() > 0.0 {
            operations as f64 / duration.as_secs_f64()
        } else {
            0.0
        };

        BenchmarkResult {
            name: self.name.clone(),
            description: self.description.clone(),
            duration_ms,
            ops_per_sec,
        }
    }

    /// Runs the benchmark `iterations` times and averages the timings.
    pub fn run_multiple(&self, iterations: usize) -> BenchmarkResult {
        let mut total_ms = 0.0;
        let mut total_ops = 0.0;
        let mut last = self.run();

        total_ms += last.duration_ms;
        total_ops += last.ops_per_sec;
        for _ in 1..iterations {
            last = self.run();
            total_ms += last.duration_ms;
            total_ops += last.ops_per_sec;
        }

        let runs = iterations.max(1) as f64;
        last.duration_ms = total_ms / runs;
        last.ops_per_sec = total_ops / runs;
        last
    }
}

/// Suite of benchmarks run together.
#[derive(Debug, Clone, Default)]
pub struct BenchmarkSuite {
    /// Name of the suite
    pub name: String,
    /// The benchmarks in run order
    pub benchmarks: Vec<Benchmark>,
}

impl BenchmarkSuite {
    /// Creates an empty suite.
    pub fn new(name: String) -> Self {
        Self {
            name,
            benchmarks: Vec::new(),
        }
    }

    /// Adds a benchmark to the suite.
    pub fn add(&mut self, benchmark: Benchmark) {
        self.benchmarks.push(benchmark);
    }

    /// Runs every benchmark in the suite.
    pub fn run(&self) -> Vec<BenchmarkResult> {
        self.benchmarks.iter().map(|b| b.run()).collect()
    }
}
