//! Presentation-free game core.

mod controller;
mod position;
mod random;
mod rules;
mod types;

pub use controller::{Outcome, Phase, TurnController};
pub use position::Position;
pub use random::{RandomSource, SeededRandom, ThreadRandom};
pub use types::{Board, CellOccupiedError, Mark, Score, Square};
