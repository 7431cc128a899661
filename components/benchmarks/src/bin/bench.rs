//! Converge Benchmark CLI
//!
//! Command-line interface for running aggregation benchmarks.

use benchmarks::micro;
use std::process;

fn print_usage() {
    println!("Converge Benchmark Tool");
    println!();
    println!("Usage:");
    println!("  converge-bench micro            Run micro-benchmarks");
    println!("  converge-bench --json micro     Output results as JSON");
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let mut json_output = false;
    let mut suite_name = "";

    // Parse arguments
    for arg in &args[1..] {
        match arg.as_str() {
            "--json" => {
                json_output = true;
            }
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            suite => {
                suite_name = suite;
            }
        }
    }

    if suite_name.is_empty() {
        eprintln!("Error: No benchmark suite specified");
        print_usage();
        process::exit(1);
    }

    let results = match suite_name {
        "micro" => {
            if !json_output {
                println!("Running micro-benchmarks...\n");
            }
            micro::run_all()
        }
        other => {
            eprintln!("Error: Unknown benchmark suite '{}'", other);
            print_usage();
            process::exit(1);
        }
    };

    if json_output {
        match serde_json::to_string_pretty(&results) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: could not render results: {}", e);
                process::exit(1);
            }
        }
    } else {
        for result in &results {
            println!(
                "{:<20} {:>10.3}ms {:>14.0} ops/sec   {}",
                result.name, result.duration_ms, result.ops_per_sec, result.description
            );
        }
    }
}
