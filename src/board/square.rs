//! Board coordinates.
//!
//! A square is a signed (x, y) pair so that displaced candidates falling
//! outside the board remain representable; `Board::is_on_board` decides
//! validity.

use std::fmt;
use std::str::FromStr;

/// A board coordinate. `x` is the row, `y` the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub x: i32,
    pub y: i32,
}

impl Square {
    /// Creates a square from row and column coordinates.
    pub const fn new(x: i32, y: i32) -> Square {
        Square { x, y }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Error from parsing a square out of an `X,Y` argument string.
#[derive(Debug, thiserror::Error)]
#[error("expected a square as 'X,Y', got '{0}'")]
pub struct ParseSquareError(String);

impl FromStr for Square {
    type Err = ParseSquareError;

    /// Parses `"X,Y"` (e.g. `"3,4"`) into a square.
    fn from_str(s: &str) -> Result<Square, ParseSquareError> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| ParseSquareError(s.to_string()))?;
        let x = x
            .trim()
            .parse()
            .map_err(|_| ParseSquareError(s.to_string()))?;
        let y = y
            .trim()
            .parse()
            .map_err(|_| ParseSquareError(s.to_string()))?;
        Ok(Square { x, y })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_square() {
        assert_eq!("3,4".parse::<Square>().unwrap(), Square::new(3, 4));
        assert_eq!("0, 0".parse::<Square>().unwrap(), Square::new(0, 0));
        assert_eq!("-1,2".parse::<Square>().unwrap(), Square::new(-1, 2));
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert!("".parse::<Square>().is_err());
        assert!("3".parse::<Square>().is_err());
        assert!("3,".parse::<Square>().is_err());
        assert!("a,b".parse::<Square>().is_err());
        assert!("1,2,3".parse::<Square>().is_err());
    }

    #[test]
    fn display_format() {
        assert_eq!(Square::new(2, 5).to_string(), "(2, 5)");
    }
}
