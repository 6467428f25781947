//! Game rules.
//!
//! Pure functions for evaluating board state. Rules are separated from
//! board storage so the turn controller and tests share one evaluation
//! path.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::check_winner;
