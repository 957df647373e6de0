//! Tour driving.
//!
//! Composes the tour state with the Warnsdorff step selector and drives
//! the loop to its terminal position.

pub mod state;
pub mod step;

pub use state::TourState;
pub use step::take_next_step;

use crate::config::{ConfigError, TourConfig};

/// Drives the state until no legal move remains.
///
/// The loop is additionally bounded by the cell count: no square is ever
/// stamped twice, so a tour can never take more than n*n steps.
pub fn run(state: &mut TourState) {
    let n = state.board().dimension();
    let cells = n * n;
    while state.visited_count() < cells && take_next_step(state) {}
}

/// Builds a state from the configuration and runs it to its terminal
/// position.
pub fn run_tour(config: &TourConfig) -> Result<TourState, ConfigError> {
    let mut state = TourState::new(config)?;
    run(&mut state);
    Ok(state)
}
