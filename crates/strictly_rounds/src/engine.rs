//! Match engine: the sole authority over the board, turn order and scoring.
//!
//! The engine is synchronous. Each inbound call runs to completion and
//! returns the notifications it produced. The only point where a match
//! waits on the outside world is the tie-break decision, which is an
//! explicit phase ([`MatchPhase::TieBreakPending`]) rather than a blocking
//! call.

use crate::action::MoveRejection;
use crate::events::MatchEvent;
use crate::invariants::{InvariantSet, MatchInvariants};
use crate::phases::{MatchPhase, MatchResult, RoundOutcome};
use crate::{Board, MatchConfig, MatchState, Player, Position};
use tracing::{debug, error, info, instrument, warn};

/// Runs one match between two named players.
#[derive(Debug, Clone)]
pub struct MatchEngine {
    config: MatchConfig,
    state: MatchState,
}

impl MatchEngine {
    /// Starts round 1 of a new match: empty board, X to move, 0-0.
    #[instrument(skip(config), fields(
        player_x = %config.player_x_name(),
        player_o = %config.player_o_name(),
        total_rounds = config.total_rounds(),
    ))]
    pub fn new(config: MatchConfig) -> Self {
        info!("Starting match");
        let state = MatchState::new(*config.total_rounds());
        Self { config, state }
    }

    /// Returns the match configuration.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Returns the full match state.
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Returns the lifecycle phase.
    pub fn phase(&self) -> MatchPhase {
        self.state.phase()
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        self.state.round().board()
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.state.round().current_player()
    }

    /// Returns true once the match is won or drawn.
    pub fn is_over(&self) -> bool {
        self.state.phase().is_terminal()
    }

    /// Player with the higher score, or `None` when level.
    pub fn leader(&self) -> Option<Player> {
        self.state.leader()
    }

    // ─────────────────────────────────────────────────────────────
    //  Inbound operations
    // ─────────────────────────────────────────────────────────────

    /// Plays the current player's mark at grid coordinates.
    ///
    /// Coordinates outside `0..=2` are ignored and never touch the board.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Vec<MatchEvent> {
        match Position::from_row_col(row, col) {
            Some(position) => self.apply_position(position),
            None => {
                warn!(rejection = %MoveRejection::OffBoard(row, col), "Ignoring move");
                Vec::new()
            }
        }
    }

    /// Plays the current player's mark at `position`.
    ///
    /// Input on an occupied square, on a decided round, or while the match
    /// is not in play is dropped: no events, no state change.
    ///
    /// After a legal move the mover's lines are checked first, then a full
    /// board. A decided round is scored immediately and either the next
    /// round starts, the tie-break prompt fires, or the match ends.
    #[instrument(skip(self), fields(round = self.state.round_number()))]
    pub fn apply_position(&mut self, position: Position) -> Vec<MatchEvent> {
        if self.state.phase() != MatchPhase::RoundInProgress {
            debug!(rejection = %MoveRejection::MatchNotInPlay, "Ignoring move");
            return Vec::new();
        }

        let mover = self.current_player();
        let outcome = match self.state.round_mut().place(position) {
            Ok(outcome) => outcome,
            Err(rejection) => {
                debug!(%rejection, "Ignoring move");
                return Vec::new();
            }
        };
        debug!(player = %mover, %position, "Move applied");

        let mut events = vec![self.board_changed()];
        if outcome.is_decided() {
            events.push(MatchEvent::RoundDecided {
                outcome,
                winner_name: self.winner_name(outcome.winner()),
            });
            self.finish_round(outcome, &mut events);
        }

        self.assert_invariants();
        events
    }

    /// Answers the tie-break prompt.
    ///
    /// `extend == true` schedules one more round and starts it. `false`
    /// ends the match as a draw. Ignored unless the match is waiting on a
    /// tie-break.
    #[instrument(skip(self))]
    pub fn resume_tie_break(&mut self, extend: bool) -> Vec<MatchEvent> {
        if self.state.phase() != MatchPhase::TieBreakPending {
            debug!(phase = ?self.state.phase(), "No tie-break pending, ignoring answer");
            return Vec::new();
        }

        let mut events = Vec::new();
        if extend {
            self.state.extend();
            info!(
                total_rounds = self.state.total_rounds(),
                "Tie-break accepted, extending match"
            );
            events.push(self.score_changed());
            self.start_next_round(&mut events);
        } else {
            info!("Tie-break declined, match drawn");
            self.state.set_phase(MatchPhase::MatchDrawn);
            events.push(MatchEvent::MatchEnded {
                result: MatchResult::Drawn,
                winner_name: None,
            });
        }

        self.assert_invariants();
        events
    }

    /// Discards all match progress and starts over with the same players.
    #[instrument(skip(self))]
    pub fn reset_match(&mut self) -> Vec<MatchEvent> {
        info!(phase = ?self.state.phase(), "Resetting match");
        self.state = MatchState::new(*self.config.total_rounds());
        vec![self.score_changed(), self.board_changed()]
    }

    /// Replaces the players and round count, then starts a fresh match.
    ///
    /// Nothing carries over from the previous match.
    #[instrument(skip(self, config))]
    pub fn reconfigure(&mut self, config: MatchConfig) -> Vec<MatchEvent> {
        self.config = config;
        self.reset_match()
    }

    /// Events that describe the current state from scratch.
    ///
    /// Lets a presentation render without having seen earlier events.
    #[instrument(skip(self))]
    pub fn snapshot(&self) -> Vec<MatchEvent> {
        let mut events = vec![self.score_changed(), self.board_changed()];
        match self.state.phase() {
            MatchPhase::RoundInProgress => {}
            MatchPhase::TieBreakPending => events.push(MatchEvent::TieBreakPrompt),
            MatchPhase::MatchWon(winner) => events.push(MatchEvent::MatchEnded {
                result: MatchResult::WonBy(winner),
                winner_name: self.winner_name(Some(winner)),
            }),
            MatchPhase::MatchDrawn => events.push(MatchEvent::MatchEnded {
                result: MatchResult::Drawn,
                winner_name: None,
            }),
        }
        events
    }

    // ─────────────────────────────────────────────────────────────
    //  Round transitions
    // ─────────────────────────────────────────────────────────────

    /// Scores a decided round and moves the match on.
    fn finish_round(&mut self, outcome: RoundOutcome, events: &mut Vec<MatchEvent>) {
        if let Some(winner) = outcome.winner() {
            self.state.award(winner);
        }
        self.state.advance_round();
        info!(
            %outcome,
            x_score = self.state.x_score(),
            o_score = self.state.o_score(),
            next_round = self.state.round_number(),
            "Round decided"
        );
        events.push(self.score_changed());

        if self.state.rounds_exhausted() {
            match self.state.leader() {
                None => {
                    info!("Scheduled rounds ended level, awaiting tie-break decision");
                    self.state.set_phase(MatchPhase::TieBreakPending);
                    events.push(MatchEvent::TieBreakPrompt);
                }
                Some(winner) => {
                    info!(winner = %self.config.name_of(winner), "Match won");
                    self.state.set_phase(MatchPhase::MatchWon(winner));
                    events.push(MatchEvent::MatchEnded {
                        result: MatchResult::WonBy(winner),
                        winner_name: self.winner_name(Some(winner)),
                    });
                }
            }
            return;
        }

        self.start_next_round(events);
    }

    fn start_next_round(&mut self, events: &mut Vec<MatchEvent>) {
        self.state.start_round();
        debug!(round = self.state.round_number(), "Round started");
        events.push(self.board_changed());
    }

    // ─────────────────────────────────────────────────────────────
    //  Helpers
    // ─────────────────────────────────────────────────────────────

    fn board_changed(&self) -> MatchEvent {
        MatchEvent::BoardChanged {
            board: self.board().clone(),
            current_player: self.current_player(),
        }
    }

    fn score_changed(&self) -> MatchEvent {
        MatchEvent::ScoreChanged {
            x_score: self.state.x_score(),
            o_score: self.state.o_score(),
            round_number: self.state.round_number(),
            total_rounds: self.state.total_rounds(),
        }
    }

    fn winner_name(&self, winner: Option<Player>) -> Option<String> {
        winner.map(|player| self.config.name_of(player).to_string())
    }

    fn assert_invariants(&self) {
        if let Err(violations) = MatchInvariants::check_all(&self.state) {
            for violation in &violations {
                error!(invariant = %violation.description, "Match invariant violated");
            }
            debug_assert!(false, "Match invariants violated: {:?}", violations);
        }
    }
}
