//! Draw detection.

use super::super::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares taken).
///
/// A full board with no winner ends the round in a tie.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}
