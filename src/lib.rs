//! Noughts - terminal tic-tac-toe against a random computer opponent
//!
//! The crate is split into a presentation-free game core and a thin
//! terminal shell:
//!
//! - **Game core**: board state, the turn state machine, win/tie rules,
//!   session scoring, and an injectable randomness seam. Owns no timers
//!   and performs no I/O.
//! - **TUI**: a ratatui frontend that submits moves, arms the delayed
//!   computer callback, and redraws from core state after every mutation.
//!
//! # Example
//!
//! ```
//! use noughts::{RandomSource, TurnController};
//!
//! struct FirstCell;
//!
//! impl RandomSource for FirstCell {
//!     fn coin(&mut self) -> bool {
//!         true
//!     }
//!     fn pick(&mut self, _len: usize) -> usize {
//!         0
//!     }
//! }
//!
//! let game = TurnController::new(Box::new(FirstCell));
//! assert!(!game.is_over());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod game;
pub mod tui;

// Crate-level exports - CLI
pub use cli::Cli;

// Crate-level exports - game core
pub use game::{
    Board, CellOccupiedError, Mark, Outcome, Phase, Position, RandomSource, Score, SeededRandom,
    Square, ThreadRandom, TurnController,
};
