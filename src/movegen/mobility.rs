//! Onward-mobility counting.
//!
//! Warnsdorff's rule ranks candidate squares by how many further moves the
//! knight would have from each of them.

use crate::board::{Board, Square};

use super::offsets::{KNIGHT_MOVES, MOVE_COUNT};

/// Counts the legal onward moves from the candidate square.
///
/// An off-board or already-visited candidate reports the maximal count
/// `MOVE_COUNT`, so it loses every minimisation in the step selector
/// without a separate validity branch there.
pub fn onward_mobility(board: &Board, candidate: Square) -> usize {
    if !board.is_on_board(candidate) || !board.is_free(candidate) {
        return MOVE_COUNT;
    }

    KNIGHT_MOVES
        .iter()
        .filter(|offset| {
            let next = offset.applied_to(candidate);
            board.is_on_board(next) && board.is_free(next)
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_of_fresh_board_has_two_moves() {
        let board = Board::new(8);
        assert_eq!(onward_mobility(&board, Square::new(0, 0)), 2);
    }

    #[test]
    fn center_of_fresh_board_has_eight_moves() {
        let board = Board::new(8);
        assert_eq!(onward_mobility(&board, Square::new(4, 4)), 8);
    }

    #[test]
    fn off_board_candidate_reports_sentinel() {
        let board = Board::new(8);
        assert_eq!(onward_mobility(&board, Square::new(-1, 0)), MOVE_COUNT);
        assert_eq!(onward_mobility(&board, Square::new(0, 8)), MOVE_COUNT);
    }

    #[test]
    fn occupied_candidate_reports_sentinel() {
        let mut board = Board::new(8);
        board.stamp(Square::new(4, 4), 1);
        assert_eq!(onward_mobility(&board, Square::new(4, 4)), MOVE_COUNT);
    }

    #[test]
    fn visited_neighbors_reduce_mobility() {
        let mut board = Board::new(8);
        // Occupy two of the center square's eight targets.
        board.stamp(Square::new(5, 2), 1);
        board.stamp(Square::new(6, 3), 2);
        assert_eq!(onward_mobility(&board, Square::new(4, 4)), 6);
    }
}
