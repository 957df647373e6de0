//! Knight-move generation.
//!
//! The fixed knight-move table and the onward-mobility counter the step
//! selector ranks candidate squares with.

pub mod mobility;
pub mod offsets;

pub use mobility::onward_mobility;
pub use offsets::{MoveOffset, KNIGHT_MOVES, MOVE_COUNT};
