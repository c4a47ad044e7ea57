//! Property-based tests for match invariants.

use proptest::prelude::*;
use strictly_rounds::invariants::{InvariantSet, MatchInvariants};
use strictly_rounds::rules::{check_winner, has_line, is_draw};
use strictly_rounds::{
    MatchConfig, MatchEngine, MatchEvent, MatchPhase, Player, Position, RoundOutcome,
};

fn new_engine(rounds: u32) -> MatchEngine {
    MatchEngine::new(MatchConfig::new("Ann", "Ben", rounds).expect("valid config"))
}

/// Every ordering of the nine squares.
fn fill_order() -> impl Strategy<Value = Vec<Position>> {
    Just(Position::ALL.to_vec()).prop_shuffle()
}

/// Coordinates including some just off the board.
fn clicks() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0usize..4, 0usize..4), 0..120)
}

proptest! {
    /// Property: no board reached by legal play has lines for both players
    #[test]
    fn at_most_one_player_has_a_line(order in fill_order()) {
        let mut engine = new_engine(1);

        for position in order {
            engine.apply_position(position);
            let board = engine.board();
            prop_assert!(
                !(has_line(board, Player::X) && has_line(board, Player::O)),
                "Both players hold a line:\n{}",
                board
            );
            if engine.phase() != MatchPhase::RoundInProgress {
                break;
            }
        }
    }

    /// Property: a full board with no line is a draw and never a win
    #[test]
    fn full_board_without_line_is_draw(order in fill_order()) {
        let mut engine = new_engine(1);
        let mut events = Vec::new();
        for position in order {
            events.extend(engine.apply_position(position));
        }

        let decided: Vec<_> = events
            .iter()
            .filter_map(|e| match e {
                MatchEvent::RoundDecided { outcome, .. } => Some(*outcome),
                _ => None,
            })
            .collect();
        prop_assert_eq!(decided.len(), 1);

        let board = engine.board();
        if board.filled() == 9 && check_winner(board).is_none() {
            prop_assert!(is_draw(board));
            prop_assert_eq!(decided[0], RoundOutcome::Draw);
        } else {
            prop_assert!(decided[0].winner().is_some());
        }
    }

    /// Property: total score equals the number of decisive rounds
    #[test]
    fn score_counts_decisive_rounds(moves in clicks()) {
        let mut engine = new_engine(50);
        let mut decisive = 0;
        let mut decided = 0;

        for (row, col) in moves {
            for event in engine.apply_move(row, col) {
                if let MatchEvent::RoundDecided { outcome, .. } = event {
                    decided += 1;
                    if outcome.winner().is_some() {
                        decisive += 1;
                    }
                }
            }
        }

        let state = engine.state();
        prop_assert_eq!(state.x_score() + state.o_score(), decisive);
        prop_assert_eq!(state.round_number(), decided + 1);
        prop_assert!(MatchInvariants::check_all(state).is_ok());
    }

    /// Property: rejected input leaves the match untouched and emits nothing
    #[test]
    fn rejected_moves_are_idempotent(moves in clicks(), extra in (0usize..3, 0usize..3)) {
        let mut engine = new_engine(2);
        for (row, col) in moves {
            engine.apply_move(row, col);
        }

        let position = Position::from_row_col(extra.0, extra.1).expect("in range");
        let occupied = !engine.board().is_empty(position);
        let not_in_play = engine.phase() != MatchPhase::RoundInProgress;

        if occupied || not_in_play {
            let before = engine.state().clone();
            let events = engine.apply_move(extra.0, extra.1);
            prop_assert!(events.is_empty());
            prop_assert_eq!(engine.state(), &before);
        }
    }

    /// Property: each accepted tie-break adds exactly one round
    #[test]
    fn tie_break_extends_by_one(extensions in 1u32..8) {
        let draw = [
            (0, 0), (1, 1), (0, 2), (0, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2),
        ];
        let mut engine = new_engine(1);

        for n in 0..extensions {
            for (row, col) in draw {
                engine.apply_move(row, col);
            }
            prop_assert_eq!(engine.phase(), MatchPhase::TieBreakPending);
            prop_assert_eq!(engine.state().total_rounds(), 1 + n);

            engine.resume_tie_break(true);
            prop_assert_eq!(engine.state().total_rounds(), 2 + n);
            prop_assert_eq!(engine.phase(), MatchPhase::RoundInProgress);
        }
    }
}
