//! Alternating turn invariant: X, O, X, O, ... within a round.

use super::Invariant;
use crate::{MatchState, Player, Square};

/// Invariant: players alternate within the current round.
///
/// History starts with X, never repeats a player, and matches the marks
/// on the board. While the round is undecided, the player to move follows
/// from the history length.
pub struct AlternatingTurnInvariant;

impl Invariant<MatchState> for AlternatingTurnInvariant {
    fn holds(state: &MatchState) -> bool {
        let round = state.round();
        let history = round.history();

        if let Some(first) = history.first()
            && first.player != Player::X
        {
            return false;
        }

        if history.windows(2).any(|w| w[0].player == w[1].player) {
            return false;
        }

        let on_board = history
            .iter()
            .all(|m| round.board().get(m.position) == Square::Occupied(m.player));
        if !on_board || round.board().filled() != history.len() {
            return false;
        }

        if round.outcome().is_decided() {
            return true;
        }

        let expected_next = if history.len() % 2 == 0 {
            Player::X
        } else {
            Player::O
        };
        round.current_player() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...) and history matches the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_empty_round_holds() {
        assert!(AlternatingTurnInvariant::holds(&MatchState::new(1)));
    }

    #[test]
    fn test_holds_after_moves() {
        let mut state = MatchState::new(1);
        for pos in [Position::Center, Position::TopLeft, Position::BottomRight] {
            state.round_mut().place(pos).unwrap();
        }
        assert!(AlternatingTurnInvariant::holds(&state));
    }
}
