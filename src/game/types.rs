//! Core domain types for the game.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// One of the two symbols placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Mark {
    /// The X mark.
    X,
    /// The O mark.
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

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square holding a mark.
    Taken(Mark),
}

/// Error returned when placing a mark on an occupied square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("square {_0} is already occupied")]
pub struct CellOccupiedError(#[error(not(source))] pub Position);

/// 3x3 board.
///
/// Squares are monotonic within a round: once taken, a square keeps its
/// mark until [`Board::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Places a mark at the given position.
    ///
    /// # Errors
    ///
    /// Returns [`CellOccupiedError`] if the square already holds a mark.
    /// The board is left unchanged in that case.
    pub fn place(&mut self, pos: Position, mark: Mark) -> Result<(), CellOccupiedError> {
        if !self.is_empty(pos) {
            return Err(CellOccupiedError(pos));
        }
        self.squares[pos.to_index()] = Square::Taken(mark);
        Ok(())
    }

    /// Returns all unmarked positions in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Clears all squares.
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; 9];
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Checks for a winner: scans the eight lines in fixed order (rows,
    /// columns, diagonals) and reports the first fully-matched one.
    pub fn winner(&self) -> Option<Mark> {
        super::rules::check_winner(self)
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        super::rules::is_full(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Session score. Outlives individual rounds; reset only at process start.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    /// Rounds won by the human player.
    pub player_wins: u32,
    /// Rounds won by the computer.
    pub computer_wins: u32,
}
