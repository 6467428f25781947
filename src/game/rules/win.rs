//! Win detection.

use super::super::{Board, Mark, Position, Square};
use tracing::instrument;

/// The eight winning lines, scanned in a fixed order: rows top to
/// bottom, columns left to right, then the two diagonals. The first
/// fully-matched line wins; the order is observable only when a test
/// constructs a board with multiple completed lines.
const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if that mark occupies three in a line,
/// `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Mark> {
    for [a, b, c] in LINES {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return match sq {
                Square::Taken(mark) => Some(mark),
                Square::Empty => None,
            };
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(board: &mut Board, mark: Mark, positions: &[Position]) {
        for pos in positions {
            board.place(*pos, mark).unwrap();
        }
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_each_row() {
        for row in 0..3 {
            let mut board = Board::new();
            let line: Vec<Position> = (0..3)
                .map(|col| Position::from_row_col(row, col).unwrap())
                .collect();
            fill(&mut board, Mark::X, &line);
            assert_eq!(check_winner(&board), Some(Mark::X));
        }
    }

    #[test]
    fn test_winner_each_column() {
        for col in 0..3 {
            let mut board = Board::new();
            let line: Vec<Position> = (0..3)
                .map(|row| Position::from_row_col(row, col).unwrap())
                .collect();
            fill(&mut board, Mark::O, &line);
            assert_eq!(check_winner(&board), Some(Mark::O));
        }
    }

    #[test]
    fn test_winner_diagonals() {
        let mut board = Board::new();
        fill(
            &mut board,
            Mark::X,
            &[Position::TopLeft, Position::Center, Position::BottomRight],
        );
        assert_eq!(check_winner(&board), Some(Mark::X));

        let mut board = Board::new();
        fill(
            &mut board,
            Mark::O,
            &[Position::TopRight, Position::Center, Position::BottomLeft],
        );
        assert_eq!(check_winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_no_winner_mixed_line() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Mark::X).unwrap();
        board.place(Position::TopCenter, Mark::O).unwrap();
        board.place(Position::TopRight, Mark::X).unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_matched_line_reported() {
        // Two completed lines for different marks (unreachable in legal
        // play): the top row is scanned before the bottom row.
        let mut board = Board::new();
        fill(
            &mut board,
            Mark::O,
            &[Position::TopLeft, Position::TopCenter, Position::TopRight],
        );
        fill(
            &mut board,
            Mark::X,
            &[
                Position::BottomLeft,
                Position::BottomCenter,
                Position::BottomRight,
            ],
        );
        assert_eq!(check_winner(&board), Some(Mark::O));
    }
}
