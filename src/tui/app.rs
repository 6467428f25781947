//! Application state and logic.

use crate::game::{Outcome, Phase, Position, TurnController};
use tokio::time::Instant;
use tracing::debug;

/// Main application state: the game core plus view-only concerns
/// (cursor, status line, the armed computer-move deadline).
pub struct App {
    controller: TurnController,
    cursor: Position,
    status: String,
    computer_due: Option<Instant>,
}

impl App {
    /// Creates the application around a dealt controller.
    pub fn new(controller: TurnController) -> Self {
        let mut app = Self {
            controller,
            cursor: Position::Center,
            status: String::new(),
            computer_due: None,
        };
        app.refresh();
        app
    }

    /// Gets the game controller.
    pub fn controller(&self) -> &TurnController {
        &self.controller
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Moves the cursor.
    pub fn set_cursor(&mut self, cursor: Position) {
        self.cursor = cursor;
    }

    /// Gets the current status line.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Submits the player's move at the given position.
    pub fn submit(&mut self, pos: Position) {
        self.controller.submit_player_move(pos);
        self.refresh();
    }

    /// Starts a new round, keeping the session score.
    pub fn restart(&mut self) {
        debug!("Restart requested");
        // Drop any deadline armed for the abandoned round.
        self.computer_due = None;
        self.controller.start_new_game();
        self.refresh();
    }

    /// Fires the computer's move if its deadline has passed.
    pub fn tick(&mut self, now: Instant) {
        if let Some(due) = self.computer_due
            && now >= due
        {
            self.computer_due = None;
            self.controller.play_computer_move();
            self.refresh();
        }
    }

    /// Re-arms the delayed callback and rebuilds the status line from
    /// core state. Called after every core mutation.
    fn refresh(&mut self) {
        match self.controller.phase() {
            Phase::PlayerTurn => {
                self.computer_due = None;
                self.status = format!("Your turn - you are {}", self.controller.player_mark());
            }
            Phase::ComputerTurn => {
                if self.computer_due.is_none() {
                    self.computer_due =
                        Some(Instant::now() + self.controller.computer_delay());
                }
                self.status = "Computer is thinking...".to_string();
            }
            Phase::GameOver => {
                self.computer_due = None;
                self.status = match self.controller.outcome() {
                    Some(Outcome::Player) => "You win! Press 'r' for a new round.".to_string(),
                    Some(Outcome::Computer) => {
                        "Computer wins. Press 'r' for a new round.".to_string()
                    }
                    Some(Outcome::Tie) => "It's a tie. Press 'r' for a new round.".to_string(),
                    None => "Round over.".to_string(),
                };
            }
        }
    }
}
