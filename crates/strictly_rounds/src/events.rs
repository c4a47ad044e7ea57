//! Outbound notifications for a presentation layer.
//!
//! Every engine operation returns the events it produced, in order. A
//! presentation either matches on [`MatchEvent`] directly or implements
//! [`MatchObserver`] and calls [`MatchEvent::dispatch`].

use crate::phases::{MatchResult, RoundOutcome};
use crate::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// A state change the presentation layer should render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEvent {
    /// The board or the player to move changed.
    BoardChanged {
        /// Snapshot of the board.
        board: Board,
        /// Player to move, or the deciding player once the round is over.
        current_player: Player,
    },
    /// The round just got a result.
    RoundDecided {
        /// Win or draw.
        outcome: RoundOutcome,
        /// Name of the round winner, if any.
        winner_name: Option<String>,
    },
    /// Scores or round counters changed.
    ScoreChanged {
        /// Rounds won by X.
        x_score: u32,
        /// Rounds won by O.
        o_score: u32,
        /// Round being played next (1-indexed).
        round_number: u32,
        /// Rounds scheduled, including extensions.
        total_rounds: u32,
    },
    /// Scheduled rounds ended level; answer with
    /// [`MatchEngine::resume_tie_break`](crate::MatchEngine::resume_tie_break).
    TieBreakPrompt,
    /// The match is over.
    MatchEnded {
        /// Drawn or won.
        result: MatchResult,
        /// Name of the match winner, if any.
        winner_name: Option<String>,
    },
}

impl MatchEvent {
    /// Routes this event to the matching observer callback.
    pub fn dispatch<O: MatchObserver + ?Sized>(&self, observer: &mut O) {
        trace!(event = ?self, "Dispatching match event");
        match self {
            MatchEvent::BoardChanged {
                board,
                current_player,
            } => observer.on_board_changed(board, *current_player),
            MatchEvent::RoundDecided {
                outcome,
                winner_name,
            } => observer.on_round_decided(*outcome, winner_name.as_deref()),
            MatchEvent::ScoreChanged {
                x_score,
                o_score,
                round_number,
                total_rounds,
            } => observer.on_score_changed(*x_score, *o_score, *round_number, *total_rounds),
            MatchEvent::TieBreakPrompt => observer.on_tie_break_prompt(),
            MatchEvent::MatchEnded {
                result,
                winner_name,
            } => observer.on_match_ended(*result, winner_name.as_deref()),
        }
    }
}

/// Routes a batch of events in order.
pub fn dispatch_all<O: MatchObserver + ?Sized>(events: &[MatchEvent], observer: &mut O) {
    for event in events {
        event.dispatch(observer);
    }
}

/// Receiver of engine notifications.
///
/// Every callback defaults to doing nothing, so an observer implements
/// only what it renders.
pub trait MatchObserver {
    /// The board or the player to move changed.
    fn on_board_changed(&mut self, _board: &Board, _current_player: Player) {}

    /// A round was won or drawn.
    fn on_round_decided(&mut self, _outcome: RoundOutcome, _winner_name: Option<&str>) {}

    /// Scores or round counters changed.
    fn on_score_changed(
        &mut self,
        _x_score: u32,
        _o_score: u32,
        _round_number: u32,
        _total_rounds: u32,
    ) {
    }

    /// The match needs a yes/no answer on playing one more round.
    fn on_tie_break_prompt(&mut self) {}

    /// The match ended.
    fn on_match_ended(&mut self, _result: MatchResult, _winner_name: Option<&str>) {}
}
