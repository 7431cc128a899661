//! Benchmark infrastructure for the Converge aggregation runtime.
//!
//! This crate provides benchmarking tools to measure aggregation
//! throughput. It includes:
//!
//! - Micro-benchmarks for each aggregation policy
//! - A raw settle/observe throughput benchmark
//! - A benchmark runner with timing and result formatting
//!
//! # Examples
//!
//! ```rust,no_run
//! use benchmarks::micro;
//!
//! let results = micro::run_all();
//! for result in results {
//!     println!("{}: {:.2}ms", result.name, result.duration_ms);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod micro;
pub mod runner;

pub use runner::{Benchmark, BenchmarkResult, BenchmarkSuite};
