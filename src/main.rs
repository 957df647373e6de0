//! Destrier -- a knight's tour engine driven by Warnsdorff's heuristic.
//!
//! Runs a single tour and prints the final board to stdout, one row per
//! line with tab-separated step numbers. Squares the heuristic never
//! reached print as -1.
//!
//! Usage:
//!   destrier [OPTIONS]
//!
//! Options:
//!   --size N      Board dimension (default: 8)
//!   --start X,Y   Start square (default: 0,0)

use std::env;
use std::io::{self, Write};
use std::process;

use destrier::config::TourConfig;
use destrier::tour::run_tour;

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut config = TourConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--size" => {
                i += 1;
                config.board_dimension = args[i].parse().expect("invalid --size value");
            }
            "--start" => {
                i += 1;
                config.start_square = args[i].parse().expect("invalid --start value");
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

    let state = match run_tour(&config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let squares = config.board_dimension * config.board_dimension;
    let outcome = if state.is_closed() {
        "closed tour"
    } else if state.is_complete() {
        "open tour"
    } else {
        "dead end"
    };
    eprintln!(
        "visited {} of {} squares ({})",
        state.visited_count(),
        squares,
        outcome
    );

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    write!(out, "{}", state.board()).unwrap();
    out.flush().unwrap();
}

fn print_usage() {
    eprintln!("Usage: destrier [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --size N      Board dimension (default: 8)");
    eprintln!("  --start X,Y   Start square (default: 0,0)");
    eprintln!("  --help        Show this help");
}
