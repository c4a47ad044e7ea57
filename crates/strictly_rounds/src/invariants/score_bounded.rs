//! Score and round-counter invariants.

use super::Invariant;
use crate::{MatchPhase, MatchState};

/// Invariant: scores never exceed the rounds already played.
///
/// Each decided round awards at most one point, so
/// `x_score + o_score <= round_number - 1`.
pub struct ScoreBoundedInvariant;

impl Invariant<MatchState> for ScoreBoundedInvariant {
    fn holds(state: &MatchState) -> bool {
        state.x_score() + state.o_score() < state.round_number()
    }

    fn description() -> &'static str {
        "Total score is at most the number of rounds played"
    }
}

/// Invariant: a round in play is one of the scheduled rounds.
pub struct RoundWithinScheduleInvariant;

impl Invariant<MatchState> for RoundWithinScheduleInvariant {
    fn holds(state: &MatchState) -> bool {
        match state.phase() {
            MatchPhase::RoundInProgress => {
                state.round_number() >= 1 && state.round_number() <= state.total_rounds()
            }
            MatchPhase::TieBreakPending | MatchPhase::MatchWon(_) | MatchPhase::MatchDrawn => {
                state.rounds_exhausted()
            }
        }
    }

    fn description() -> &'static str {
        "Round in play is within the scheduled rounds"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_score_bounded_detects_excess() {
        let mut state = MatchState::new(3);
        assert!(ScoreBoundedInvariant::holds(&state));
        state.award(Player::X);
        assert!(!ScoreBoundedInvariant::holds(&state));
        state.advance_round();
        assert!(ScoreBoundedInvariant::holds(&state));
    }

    #[test]
    fn test_round_within_schedule() {
        let mut state = MatchState::new(1);
        assert!(RoundWithinScheduleInvariant::holds(&state));
        state.advance_round();
        assert!(!RoundWithinScheduleInvariant::holds(&state));
        state.set_phase(MatchPhase::TieBreakPending);
        assert!(RoundWithinScheduleInvariant::holds(&state));
    }
}
