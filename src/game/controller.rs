//! Turn controller: the round state machine.
//!
//! Owns the board, the session score, and the randomness source. The
//! controller never sleeps or spawns: when a round enters
//! [`Phase::ComputerTurn`] the host is expected to call
//! [`TurnController::play_computer_move`] after [`TurnController::computer_delay`]
//! has elapsed, which keeps the whole core synchronous and testable.

use super::random::RandomSource;
use super::rules::{check_winner, is_full};
use super::types::{Board, Mark, Score};
use super::Position;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

/// Default pause before the computer's move, so the human perceives the
/// turn change. Not a correctness requirement.
const DEFAULT_COMPUTER_DELAY: Duration = Duration::from_millis(500);

/// State of the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the human player's move.
    PlayerTurn,
    /// The computer's move is pending (the host owes a delayed callback).
    ComputerTurn,
    /// The round has ended; only [`TurnController::start_new_game`] exits.
    GameOver,
}

/// Who won a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The human player completed a line.
    Player,
    /// The computer completed a line.
    Computer,
    /// The board filled with no line completed.
    Tie,
}

/// Orchestrates alternating moves between the human and the computer.
pub struct TurnController {
    board: Board,
    phase: Phase,
    player_mark: Mark,
    outcome: Option<Outcome>,
    score: Score,
    computer_delay: Duration,
    rng: Box<dyn RandomSource>,
}

impl TurnController {
    /// Creates a controller and deals the first round.
    pub fn new(rng: Box<dyn RandomSource>) -> Self {
        let mut controller = Self {
            board: Board::new(),
            phase: Phase::PlayerTurn,
            player_mark: Mark::X,
            outcome: None,
            score: Score::default(),
            computer_delay: DEFAULT_COMPUTER_DELAY,
            rng,
        };
        controller.deal_round();
        controller
    }

    /// Overrides the pause before the computer's move.
    pub fn with_computer_delay(mut self, delay: Duration) -> Self {
        self.computer_delay = delay;
        self
    }

    /// Re-randomizes the round: the player's mark first, then who starts.
    fn deal_round(&mut self) {
        self.player_mark = if self.rng.coin() { Mark::X } else { Mark::O };
        self.phase = if self.rng.coin() {
            Phase::PlayerTurn
        } else {
            Phase::ComputerTurn
        };
        info!(
            player_mark = %self.player_mark,
            phase = ?self.phase,
            "Round dealt"
        );
    }

    /// Submits the human player's move.
    ///
    /// Accepted only during [`Phase::PlayerTurn`] on an empty square.
    /// Everything else (wrong phase, occupied square, finished round) is
    /// ignored without error, so stray input never disturbs the session.
    pub fn submit_player_move(&mut self, pos: Position) {
        if self.phase != Phase::PlayerTurn {
            debug!(?pos, phase = ?self.phase, "Ignoring move outside player turn");
            return;
        }
        if self.board.place(pos, self.player_mark).is_err() {
            debug!(?pos, "Ignoring move onto occupied square");
            return;
        }
        debug!(?pos, mark = %self.player_mark, "Player moved");
        self.settle(Outcome::Player, Phase::ComputerTurn);
    }

    /// Plays the computer's move: a uniform pick among the empty squares.
    ///
    /// The host calls this after [`Self::computer_delay`] has elapsed in
    /// [`Phase::ComputerTurn`]; calls in any other phase are ignored.
    pub fn play_computer_move(&mut self) {
        if self.phase != Phase::ComputerTurn {
            debug!(phase = ?self.phase, "Ignoring computer move outside computer turn");
            return;
        }
        let empty = self.board.empty_positions();
        let pos = empty[self.rng.pick(empty.len())];
        // A round never enters ComputerTurn with a full board, so place
        // on an empty square cannot fail.
        let _ = self.board.place(pos, self.computer_mark());
        debug!(?pos, mark = %self.computer_mark(), "Computer moved");
        self.settle(Outcome::Computer, Phase::PlayerTurn);
    }

    /// Evaluates the board after a move: win ends the round for `mover`,
    /// a full board ties it, otherwise play passes to `next`.
    fn settle(&mut self, mover: Outcome, next: Phase) {
        if check_winner(&self.board).is_some() {
            // Only the mark just placed can have completed a line.
            match mover {
                Outcome::Player => self.score.player_wins += 1,
                Outcome::Computer => self.score.computer_wins += 1,
                Outcome::Tie => unreachable!("tie is never a mover"),
            }
            self.outcome = Some(mover);
            self.phase = Phase::GameOver;
            info!(winner = ?mover, score = ?self.score, "Round won");
        } else if is_full(&self.board) {
            self.outcome = Some(Outcome::Tie);
            self.phase = Phase::GameOver;
            info!(score = ?self.score, "Round tied");
        } else {
            self.phase = next;
        }
    }

    /// Starts a fresh round: clears the board and re-randomizes the
    /// player's mark and the starting turn. The session score persists.
    pub fn start_new_game(&mut self) {
        info!("Starting new round");
        self.board.reset();
        self.outcome = None;
        self.deal_round();
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns true once the round has ended.
    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Returns the outcome of a finished round.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns the human player's mark for this round.
    pub fn player_mark(&self) -> Mark {
        self.player_mark
    }

    /// Returns the computer's mark for this round.
    pub fn computer_mark(&self) -> Mark {
        self.player_mark.opponent()
    }

    /// Returns the session score.
    pub fn score(&self) -> Score {
        self.score
    }

    /// How long the host should wait before calling
    /// [`Self::play_computer_move`].
    pub fn computer_delay(&self) -> Duration {
        self.computer_delay
    }
}

impl std::fmt::Debug for TurnController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TurnController")
            .field("board", &self.board)
            .field("phase", &self.phase)
            .field("player_mark", &self.player_mark)
            .field("outcome", &self.outcome)
            .field("score", &self.score)
            .finish_non_exhaustive()
    }
}
