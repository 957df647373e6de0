//! Whole-board survey CLI.
//!
//! Runs a Warnsdorff tour from every start square of the board and writes
//! one JSON record per tour as JSONL, with a summary on stderr.
//!
//! Usage:
//!   cargo run --release --bin survey -- [OPTIONS]
//!
//! Options:
//!   --size N        Board dimension (default: 8)
//!   --threads N     Number of parallel threads (default: 4)
//!   --output FILE   Output file path (default: stdout)
//!   --quiet         Suppress summary output

use std::env;
use std::fs::File;
use std::io::{self, BufWriter};
use std::process;
use std::time::Instant;

use destrier::survey::{survey_board, write_jsonl, SurveyConfig, SurveySummary};

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut config = SurveyConfig::default();
    let mut output_path: Option<String> = None;
    let mut quiet = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--size" => {
                i += 1;
                config.board_dimension = args[i].parse().expect("invalid --size value");
            }
            "--threads" => {
                i += 1;
                config.threads = args[i].parse().expect("invalid --threads value");
            }
            "--output" => {
                i += 1;
                output_path = Some(args[i].clone());
            }
            "--quiet" => {
                quiet = true;
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    let started = Instant::now();
    let records = match survey_board(&config) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    match output_path {
        Some(path) => {
            let file = File::create(&path).expect("failed to create output file");
            let mut out = BufWriter::new(file);
            write_jsonl(&records, &mut out).expect("failed to write records");
        }
        None => {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            write_jsonl(&records, &mut out).expect("failed to write records");
        }
    }

    if !quiet {
        let summary = SurveySummary::from_records(&records);
        eprintln!(
            "surveyed {} starts on a {}x{} board in {:.2?}: {} complete, {} closed, visited {}..{}",
            summary.tours,
            config.board_dimension,
            config.board_dimension,
            started.elapsed(),
            summary.complete,
            summary.closed,
            summary.min_visited,
            summary.max_visited
        );
    }
}

fn print_usage() {
    eprintln!("Usage: survey [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --size N        Board dimension (default: 8)");
    eprintln!("  --threads N     Number of parallel threads (default: 4)");
    eprintln!("  --output FILE   Output file path (default: stdout)");
    eprintln!("  --quiet         Suppress summary output");
    eprintln!("  --help          Show this help");
}
