//! Converge CLI
//!
//! Entry point for the scenario runner. Parses CLI arguments, loads the
//! requested scenario, and prints the aggregation report.

use agg_cli::{Cli, CliError, Runner, Scenario};
use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let scenario = if let Some(path) = &cli.scenario {
        match Scenario::load(path) {
            Ok(scenario) => scenario,
            Err(CliError::Io(e)) => {
                eprintln!("Error: could not read scenario file: {}", e);
                std::process::exit(1);
            }
            Err(CliError::Json(e)) => {
                eprintln!("Error: invalid scenario: {}", e);
                std::process::exit(1);
            }
        }
    } else if cli.demo {
        Scenario::demo()
    } else {
        // Default: show usage
        println!("Converge v0.1.0");
        println!();
        println!("Usage:");
        println!("  converge --demo                  Run the built-in demo scenario");
        println!("  converge --scenario <FILE>       Run a JSON scenario file");
        println!("  converge --policy <POLICY>       Restrict to one aggregation policy");
        println!("  converge --json                  Emit a JSON report");
        println!();
        println!("Run 'converge --help' for all options.");
        return;
    };

    let runner = Runner::new().with_reject_on_empty(cli.reject_empty);
    let report = runner.run(&scenario, cli.policy);

    if cli.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: could not render report: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        print!("{}", report);
    }
}
