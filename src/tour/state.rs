//! Tour state: board, knight position, and step counter.

use crate::board::{Board, Square};
use crate::config::{ConfigError, TourConfig};
use crate::movegen::{MoveOffset, KNIGHT_MOVES};

/// The complete state of a tour in progress.
///
/// Owned by a single driver; every successful step stamps exactly one new
/// cell and advances the counter.
#[derive(Debug, Clone)]
pub struct TourState {
    board: Board,
    start: Square,
    position: Square,
    /// The step number the next stamped square will receive. Starts at 1
    /// and is consumed by the initial placement, so a fresh state holds 2.
    step: i32,
}

impl TourState {
    /// Validates the configuration, allocates the board, and stamps the
    /// start square as step 1.
    pub fn new(config: &TourConfig) -> Result<TourState, ConfigError> {
        config.validate()?;
        let mut board = Board::new(config.board_dimension);
        board.stamp(config.start_square, 1);
        Ok(TourState {
            board,
            start: config.start_square,
            position: config.start_square,
            step: 2,
        })
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Consumes the state, yielding the board.
    pub fn into_board(self) -> Board {
        self.board
    }

    /// Returns the knight's current square.
    pub fn position(&self) -> Square {
        self.position
    }

    /// Returns the start square.
    pub fn start(&self) -> Square {
        self.start
    }

    /// Returns how many squares have been stamped so far.
    pub fn visited_count(&self) -> i32 {
        self.step - 1
    }

    /// Moves the knight by the given offset and stamps the new square.
    ///
    /// The caller (the step selector) guarantees the target is on the
    /// board and free.
    pub(super) fn advance(&mut self, offset: MoveOffset) {
        self.position = offset.applied_to(self.position);
        self.board.stamp(self.position, self.step);
        self.step += 1;
    }

    /// Returns whether every square on the board has been visited.
    pub fn is_complete(&self) -> bool {
        let n = self.board.dimension();
        self.visited_count() == n * n
    }

    /// Returns whether the tour is closed: complete, with the final square
    /// one knight's move from the start.
    pub fn is_closed(&self) -> bool {
        self.is_complete()
            && KNIGHT_MOVES
                .iter()
                .any(|offset| offset.applied_to(self.position) == self.start)
    }
}
