//! Whole-board tour survey.
//!
//! Runs one Warnsdorff tour from every start square of a board and records
//! the outcome of each, optionally fanning the starts out over a rayon
//! thread pool. Records serialize to JSONL for downstream analysis. The
//! heuristic is deterministic, so results are identical across thread
//! counts and runs.

use std::io::Write;

use serde::Serialize;

use crate::board::Square;
use crate::config::{ConfigError, TourConfig, DEFAULT_BOARD_DIM};
use crate::tour::run_tour;

/// Configuration for a whole-board survey.
#[derive(Debug, Clone)]
pub struct SurveyConfig {
    /// Board dimension for every tour.
    pub board_dimension: i32,
    /// Number of parallel threads (1 = run on the calling thread).
    pub threads: usize,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        SurveyConfig {
            board_dimension: DEFAULT_BOARD_DIM,
            threads: 4,
        }
    }
}

/// The recorded outcome of a single tour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TourRecord {
    /// Board dimension.
    pub n: i32,
    /// Start square as (x, y).
    pub start: (i32, i32),
    /// Final square as (x, y).
    pub end: (i32, i32),
    /// Number of squares stamped before the tour reached its terminal
    /// position.
    pub visited: i32,
    /// Total squares on the board.
    pub squares: i32,
    /// Whether every square was visited.
    pub complete: bool,
    /// Whether the tour is closed: complete, with the final square one
    /// knight's move from the start.
    pub closed: bool,
}

/// Runs a single tour and records its outcome.
pub fn record_tour(config: &TourConfig) -> Result<TourRecord, ConfigError> {
    let state = run_tour(config)?;
    let n = config.board_dimension;
    Ok(TourRecord {
        n,
        start: (config.start_square.x, config.start_square.y),
        end: (state.position().x, state.position().y),
        visited: state.visited_count(),
        squares: n * n,
        complete: state.is_complete(),
        closed: state.is_closed(),
    })
}

/// Surveys every start square of the board.
///
/// Records come back in row-major start order regardless of thread count.
pub fn survey_board(config: &SurveyConfig) -> Result<Vec<TourRecord>, ConfigError> {
    let n = config.board_dimension;
    if n <= 0 {
        return Err(ConfigError::InvalidDimension(n));
    }

    let starts: Vec<Square> = (0..n)
        .flat_map(|x| (0..n).map(move |y| Square::new(x, y)))
        .collect();

    if config.threads > 1 {
        survey_parallel(n, &starts, config.threads)
    } else {
        starts
            .iter()
            .map(|&start| record_tour(&TourConfig::new(n, start)))
            .collect()
    }
}

/// Parallel survey: tours run concurrently on a dedicated rayon pool.
fn survey_parallel(
    n: i32,
    starts: &[Square],
    threads: usize,
) -> Result<Vec<TourRecord>, ConfigError> {
    use rayon::prelude::*;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .expect("failed to build rayon thread pool");

    pool.install(|| {
        starts
            .par_iter()
            .map(|&start| record_tour(&TourConfig::new(n, start)))
            .collect()
    })
}

/// Aggregate statistics over a survey.
#[derive(Debug, Clone, Serialize)]
pub struct SurveySummary {
    /// Number of tours run.
    pub tours: usize,
    /// Tours that visited every square.
    pub complete: usize,
    /// Tours that ended a knight's move from their start.
    pub closed: usize,
    /// Fewest squares visited by any tour.
    pub min_visited: i32,
    /// Most squares visited by any tour.
    pub max_visited: i32,
}

impl SurveySummary {
    /// Computes summary statistics for a set of records.
    pub fn from_records(records: &[TourRecord]) -> SurveySummary {
        SurveySummary {
            tours: records.len(),
            complete: records.iter().filter(|r| r.complete).count(),
            closed: records.iter().filter(|r| r.closed).count(),
            min_visited: records.iter().map(|r| r.visited).min().unwrap_or(0),
            max_visited: records.iter().map(|r| r.visited).max().unwrap_or(0),
        }
    }
}

/// Writes the records as JSONL: one JSON object per line.
pub fn write_jsonl<W: Write>(records: &[TourRecord], out: &mut W) -> std::io::Result<()> {
    for record in records {
        serde_json::to_writer(&mut *out, record)?;
        writeln!(out)?;
    }
    Ok(())
}
