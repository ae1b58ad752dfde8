//! Batch kata runner binary.
//!
//! Usage: `kata_batch <requests.json> [report.json]`
//!
//! Reads a JSON array of kata requests, evaluates them in parallel and
//! writes the report (default `kata_report.json`). Set `RUST_LOG=info` for
//! progress logging.

use std::process;

use kata_solver::runner::{load_requests, BatchRunner, RunnerConfig};

fn main() {
    env_logger::init();

    println!("=== Kata Batch Runner ===\n");

    let mut args = std::env::args().skip(1);
    let Some(input_path) = args.next() else {
        eprintln!("Usage: kata_batch <requests.json> [report.json]");
        process::exit(2);
    };
    let output_path = args.next().unwrap_or_else(|| "kata_report.json".to_string());

    let requests = match load_requests(&input_path) {
        Ok(requests) => {
            println!("Loaded {} requests from: {}", requests.len(), input_path);
            requests
        }
        Err(e) => {
            eprintln!("Could not load {}: {}", input_path, e);
            process::exit(1);
        }
    };

    let config = RunnerConfig::default();
    let runner = match BatchRunner::new(config.clone()) {
        Ok(runner) => runner,
        Err(e) => {
            eprintln!("Invalid runner configuration: {}", e);
            process::exit(1);
        }
    };

    let report = match runner.run(&requests) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Batch aborted: {}", e);
            process::exit(1);
        }
    };
    report.print_summary();

    match report.save_json(&output_path, config.pretty) {
        Ok(()) => println!("Saved report to: {}", output_path),
        Err(e) => {
            eprintln!("Could not save {}: {}", output_path, e);
            process::exit(1);
        }
    }

    if report.failed > 0 {
        process::exit(1);
    }
}
