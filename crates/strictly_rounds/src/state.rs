//! Round and match state owned by the engine.

use crate::action::{Move, MoveRejection};
use crate::phases::{MatchPhase, RoundOutcome};
use crate::rules;
use crate::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

// ─────────────────────────────────────────────────────────────
//  Round
// ─────────────────────────────────────────────────────────────

/// State of the round being played.
///
/// X moves first. Once `outcome` leaves `InProgress`, `current_player`
/// stays on the player who made the deciding move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    /// Player whose turn it is.
    current_player: Player,
    /// The board.
    board: Board,
    /// Result so far.
    outcome: RoundOutcome,
    /// Moves played this round, in order.
    history: Vec<Move>,
}

impl RoundState {
    /// Creates a fresh round: empty board, X to move.
    pub fn new() -> Self {
        Self {
            current_player: Player::X,
            board: Board::new(),
            outcome: RoundOutcome::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the round result so far.
    pub fn outcome(&self) -> RoundOutcome {
        self.outcome
    }

    /// Returns the moves played this round.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Places the current player's mark and evaluates the round.
    ///
    /// Checks for a line by the mover first, then for a full board.
    /// When neither holds the turn passes to the opponent.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveRejection`] without touching the board if the
    /// round is decided or the square is occupied.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub(crate) fn place(&mut self, position: Position) -> Result<RoundOutcome, MoveRejection> {
        if self.outcome.is_decided() {
            return Err(MoveRejection::RoundDecided);
        }
        if !self.board.is_empty(position) {
            return Err(MoveRejection::SquareOccupied(position));
        }

        let mover = self.current_player;
        self.board.set(position, Square::Occupied(mover));
        self.history.push(Move::new(mover, position));

        if rules::has_line(&self.board, mover) {
            self.outcome = RoundOutcome::Win(mover);
        } else if rules::is_full(&self.board) {
            self.outcome = RoundOutcome::Draw;
        } else {
            self.current_player = mover.opponent();
        }

        debug!(outcome = %self.outcome, "Mark placed");
        Ok(self.outcome)
    }
}

impl Default for RoundState {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Match
// ─────────────────────────────────────────────────────────────

/// Scores and progress across all rounds of a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    /// Round being played (1-indexed). Exceeds `total_rounds` only once
    /// the scheduled rounds are exhausted.
    round_number: u32,
    /// Rounds scheduled, including accepted tie-break extensions.
    total_rounds: u32,
    /// Rounds won by X.
    x_score: u32,
    /// Rounds won by O.
    o_score: u32,
    /// The current round.
    round: RoundState,
    /// Lifecycle phase.
    phase: MatchPhase,
}

impl MatchState {
    /// Creates the state for round 1 of a match with `total_rounds` rounds.
    pub fn new(total_rounds: u32) -> Self {
        Self {
            round_number: 1,
            total_rounds,
            x_score: 0,
            o_score: 0,
            round: RoundState::new(),
            phase: MatchPhase::RoundInProgress,
        }
    }

    /// Returns the round number (1-indexed).
    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    /// Returns the rounds scheduled, including extensions.
    pub fn total_rounds(&self) -> u32 {
        self.total_rounds
    }

    /// Returns X's score.
    pub fn x_score(&self) -> u32 {
        self.x_score
    }

    /// Returns O's score.
    pub fn o_score(&self) -> u32 {
        self.o_score
    }

    /// Returns the current round.
    pub fn round(&self) -> &RoundState {
        &self.round
    }

    /// Returns the lifecycle phase.
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Player with the higher score, or `None` when level.
    pub fn leader(&self) -> Option<Player> {
        match self.x_score.cmp(&self.o_score) {
            std::cmp::Ordering::Greater => Some(Player::X),
            std::cmp::Ordering::Less => Some(Player::O),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Returns true once every scheduled round has been played.
    pub fn rounds_exhausted(&self) -> bool {
        self.round_number > self.total_rounds
    }

    pub(crate) fn round_mut(&mut self) -> &mut RoundState {
        &mut self.round
    }

    pub(crate) fn award(&mut self, player: Player) {
        match player {
            Player::X => self.x_score += 1,
            Player::O => self.o_score += 1,
        }
    }

    pub(crate) fn advance_round(&mut self) {
        self.round_number += 1;
    }

    pub(crate) fn extend(&mut self) {
        self.total_rounds += 1;
    }

    pub(crate) fn start_round(&mut self) {
        self.round = RoundState::new();
        self.phase = MatchPhase::RoundInProgress;
    }

    pub(crate) fn set_phase(&mut self, phase: MatchPhase) {
        self.phase = phase;
    }
}
