//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of squares on the board.
pub const BOARD_SIZE: usize = 9;

/// A player's mark.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Mark {
    /// Mark X (moves first).
    #[display("X")]
    X,
    /// Mark O (moves second).
    #[display("O")]
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Square holds a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark in this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Squares are stored in row-major order, index 0 is the top-left corner
/// and index 8 the bottom-right one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub const fn new() -> Self {
        Self {
            squares: [Square::Empty; BOARD_SIZE],
        }
    }

    /// Builds a board from raw squares.
    pub const fn from_squares(squares: [Square; BOARD_SIZE]) -> Self {
        Self { squares }
    }

    /// Gets the square at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// True when `index` is on the board and holds a mark.
    pub fn is_occupied(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Occupied(_)))
    }

    /// Returns a copy of this board with `mark` placed at `index`.
    ///
    /// Returns `None` if `index` is out of range or already occupied, so a
    /// played square can never be overwritten.
    #[instrument(level = "trace", skip(self))]
    pub fn with_mark(&self, index: usize, mark: Mark) -> Option<Self> {
        match self.get(index)? {
            Square::Occupied(_) => None,
            Square::Empty => {
                let mut next = *self;
                next.squares[index] = Square::Occupied(mark);
                Some(next)
            }
        }
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; BOARD_SIZE] {
        &self.squares
    }

    /// Counts the squares holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|square| **square == Square::Occupied(mark))
            .count()
    }

    /// Formats the board as a human-readable grid; empty squares are blank.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let symbol = match self.squares[row * 3 + col] {
                    Square::Empty => " ".to_string(),
                    Square::Occupied(mark) => mark.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_alternates() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
    }

    #[test]
    fn test_with_mark_copies_board() {
        let board = Board::new();
        let next = board.with_mark(4, Mark::X).unwrap();
        assert_eq!(board.get(4), Some(Square::Empty));
        assert_eq!(next.get(4), Some(Square::Occupied(Mark::X)));
    }

    #[test]
    fn test_with_mark_never_overwrites() {
        let board = Board::new().with_mark(0, Mark::X).unwrap();
        assert_eq!(board.with_mark(0, Mark::O), None);
    }

    #[test]
    fn test_with_mark_out_of_range() {
        assert_eq!(Board::new().with_mark(9, Mark::X), None);
        assert!(!Board::new().is_occupied(42));
    }

    #[test]
    fn test_display_layout() {
        let board = Board::new()
            .with_mark(0, Mark::X)
            .and_then(|b| b.with_mark(4, Mark::O))
            .unwrap();
        assert_eq!(board.display(), "X| | \n-+-+-\n |O| \n-+-+-\n | | ");
    }
}
