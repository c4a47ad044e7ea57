//! Round outcomes and match phases.

use crate::Player;
use serde::{Deserialize, Serialize};

/// Result of a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Moves are still being played.
    InProgress,
    /// Player completed a line.
    Win(Player),
    /// Board filled with no line.
    Draw,
}

impl RoundOutcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            RoundOutcome::Win(player) => Some(*player),
            RoundOutcome::InProgress | RoundOutcome::Draw => None,
        }
    }

    /// Returns true once the round has a result.
    pub fn is_decided(&self) -> bool {
        !matches!(self, RoundOutcome::InProgress)
    }
}

impl std::fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundOutcome::InProgress => write!(f, "In progress"),
            RoundOutcome::Win(player) => write!(f, "Player {} wins", player),
            RoundOutcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Where the match is in its lifecycle.
///
/// `MatchWon` and `MatchDrawn` are terminal. `TieBreakPending` suspends
/// the match until [`MatchEngine::resume_tie_break`](crate::MatchEngine::resume_tie_break)
/// is called.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchPhase {
    /// A round is accepting moves.
    RoundInProgress,
    /// Scheduled rounds are over with level scores; waiting for a
    /// decision on playing one more round.
    TieBreakPending,
    /// Player finished with the higher score.
    MatchWon(Player),
    /// Scores were level and no extra round was wanted.
    MatchDrawn,
}

impl MatchPhase {
    /// Returns true for `MatchWon` and `MatchDrawn`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, MatchPhase::MatchWon(_) | MatchPhase::MatchDrawn)
    }
}

/// Final result of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchResult {
    /// Level scores and the players declined another round.
    Drawn,
    /// Player won more rounds.
    WonBy(Player),
}
