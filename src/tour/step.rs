//! Warnsdorff step selection.
//!
//! The knight always proceeds to the candidate square from which it would
//! have the fewest onward moves. Ties go to the earliest entry in the
//! knight-move table.

use crate::movegen::{onward_mobility, KNIGHT_MOVES, MOVE_COUNT};

use super::state::TourState;

/// Attempts one step under Warnsdorff's rule.
///
/// Evaluates all eight candidates from the current position and advances
/// to the one with minimal onward mobility. Returns `false` when no legal
/// candidate exists; the state is left unchanged.
pub fn take_next_step(state: &mut TourState) -> bool {
    let mut min_moves = MOVE_COUNT;
    let mut min_index: Option<usize> = None;

    for (i, offset) in KNIGHT_MOVES.iter().enumerate() {
        let candidate = offset.applied_to(state.position());
        let mobility = onward_mobility(state.board(), candidate);
        // Strict comparison: the first offset achieving the minimum wins,
        // and invalid candidates (reported as MOVE_COUNT) never win.
        if mobility < min_moves {
            min_moves = mobility;
            min_index = Some(i);
        }
    }

    match min_index {
        Some(i) => {
            state.advance(KNIGHT_MOVES[i]);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Square;
    use crate::config::TourConfig;

    #[test]
    fn first_step_from_corner_takes_first_minimal_candidate() {
        // From (0, 0) only (2, 1) and (1, 2) are on the board, both with
        // onward mobility 5; the tie goes to (2, 1), the earlier table
        // entry.
        let mut state = TourState::new(&TourConfig::default()).unwrap();
        assert!(take_next_step(&mut state));
        assert_eq!(state.position(), Square::new(2, 1));
        assert_eq!(state.visited_count(), 2);
        assert_eq!(state.board().visit_order(Square::new(2, 1)), Some(2));
    }

    #[test]
    fn no_candidate_leaves_state_unchanged() {
        // On a 1x1 board every candidate is off the board.
        let mut state = TourState::new(&TourConfig::new(1, Square::new(0, 0))).unwrap();
        assert!(!take_next_step(&mut state));
        assert_eq!(state.position(), Square::new(0, 0));
        assert_eq!(state.visited_count(), 1);
    }

    #[test]
    fn steps_never_revisit_squares() {
        let mut state = TourState::new(&TourConfig::default()).unwrap();
        let mut seen = vec![state.position()];
        while take_next_step(&mut state) {
            assert!(!seen.contains(&state.position()));
            seen.push(state.position());
        }
        assert_eq!(seen.len() as i32, state.visited_count());
    }
}
