//! What the game screen shows, built only from engine notifications.

use derive_getters::Getters;
use strictly_rounds::{Board, MatchConfig, MatchObserver, MatchResult, Player, RoundOutcome};
use tracing::{debug, instrument, warn};

/// Render model for the game screen.
///
/// Updated through [`MatchObserver`] callbacks; never reads the engine.
#[derive(Debug, Clone, Getters)]
pub struct MatchView {
    player_x_name: String,
    player_o_name: String,
    board: Board,
    current_player: Player,
    x_score: u32,
    o_score: u32,
    round_number: u32,
    total_rounds: u32,
    notice: Option<String>,
    tie_break_pending: bool,
    result: Option<String>,
}

impl MatchView {
    /// Creates an empty view for the players in `config`.
    #[instrument(skip(config))]
    pub fn new(config: &MatchConfig) -> Self {
        Self {
            player_x_name: config.player_x_name().clone(),
            player_o_name: config.player_o_name().clone(),
            board: Board::new(),
            current_player: Player::X,
            x_score: 0,
            o_score: 0,
            round_number: 1,
            total_rounds: *config.total_rounds(),
            notice: None,
            tie_break_pending: false,
            result: None,
        }
    }

    /// Returns the display name for `player`.
    pub fn name_of(&self, player: Player) -> &str {
        match player {
            Player::X => &self.player_x_name,
            Player::O => &self.player_o_name,
        }
    }

    /// Window title, e.g. `Tic Tac Toe - Ann vs Ben`.
    pub fn title(&self) -> String {
        format!(
            "Tic Tac Toe - {} vs {}",
            self.player_x_name, self.player_o_name
        )
    }

    /// Whose turn it is, or how the match ended.
    pub fn status_line(&self) -> String {
        if let Some(result) = &self.result {
            return result.clone();
        }
        if self.tie_break_pending {
            return "It's a tie!".to_string();
        }
        format!(
            "{}'s Turn ({})",
            self.name_of(self.current_player),
            self.current_player
        )
    }

    /// Round counter and both scores.
    pub fn score_line(&self) -> String {
        format!(
            "Round {}/{} | {}: {} | {}: {}",
            self.round_number.min(self.total_rounds),
            self.total_rounds,
            self.player_x_name,
            self.x_score,
            self.player_o_name,
            self.o_score
        )
    }

    /// Returns true once a match result is showing.
    pub fn is_finished(&self) -> bool {
        self.result.is_some()
    }

    /// Drops the last round message.
    pub fn clear_notice(&mut self) {
        self.notice = None;
    }
}

impl MatchObserver for MatchView {
    fn on_board_changed(&mut self, board: &Board, current_player: Player) {
        // A prompt always follows the board update that precedes it.
        self.tie_break_pending = false;
        self.board = board.clone();
        self.current_player = current_player;
    }

    fn on_round_decided(&mut self, outcome: RoundOutcome, winner_name: Option<&str>) {
        let notice = match (outcome, winner_name) {
            (RoundOutcome::Win(_), Some(name)) => format!("{} wins this round!", name),
            (RoundOutcome::Win(player), None) => format!("{} wins this round!", player),
            (RoundOutcome::Draw, _) => "It's a draw!".to_string(),
            (RoundOutcome::InProgress, _) => {
                warn!("Round reported decided while still in progress");
                return;
            }
        };
        debug!(%notice, "Round decided");
        self.notice = Some(notice);
    }

    fn on_score_changed(&mut self, x_score: u32, o_score: u32, round_number: u32, total_rounds: u32) {
        self.x_score = x_score;
        self.o_score = o_score;
        self.round_number = round_number;
        self.total_rounds = total_rounds;
    }

    fn on_tie_break_prompt(&mut self) {
        self.tie_break_pending = true;
    }

    fn on_match_ended(&mut self, result: MatchResult, winner_name: Option<&str>) {
        self.tie_break_pending = false;
        self.result = Some(match (result, winner_name) {
            (MatchResult::WonBy(_), Some(name)) => format!("{} wins the match!", name),
            (MatchResult::WonBy(player), None) => format!("{} wins the match!", player),
            (MatchResult::Drawn, _) => "The match is a draw!".to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_rounds::{MatchEngine, dispatch_all};

    /// X O X / X O O / O X X, no line for either player.
    const DRAW_FILL: [(usize, usize); 9] = [
        (0, 0),
        (1, 1),
        (0, 2),
        (0, 1),
        (1, 0),
        (1, 2),
        (2, 1),
        (2, 0),
        (2, 2),
    ];

    fn start(rounds: u32) -> (MatchEngine, MatchView) {
        let config = MatchConfig::new("Ann", "Ben", rounds).unwrap();
        let engine = MatchEngine::new(config);
        let mut view = MatchView::new(engine.config());
        dispatch_all(&engine.snapshot(), &mut view);
        (engine, view)
    }

    #[test]
    fn test_initial_lines() {
        let (_, view) = start(3);
        assert_eq!(view.title(), "Tic Tac Toe - Ann vs Ben");
        assert_eq!(view.status_line(), "Ann's Turn (X)");
        assert_eq!(view.score_line(), "Round 1/3 | Ann: 0 | Ben: 0");
    }

    #[test]
    fn test_round_win_notice_and_score() {
        let (mut engine, mut view) = start(3);
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            dispatch_all(&engine.apply_move(row, col), &mut view);
        }
        assert_eq!(view.notice().as_deref(), Some("Ann wins this round!"));
        assert_eq!(view.score_line(), "Round 2/3 | Ann: 1 | Ben: 0");
        assert_eq!(view.status_line(), "Ann's Turn (X)");
        assert_eq!(view.board(), &Board::new());
    }

    #[test]
    fn test_match_result_replaces_status() {
        let (mut engine, mut view) = start(1);
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            dispatch_all(&engine.apply_move(row, col), &mut view);
        }
        assert!(view.is_finished());
        assert_eq!(view.status_line(), "Ann wins the match!");
        assert_eq!(view.score_line(), "Round 1/1 | Ann: 1 | Ben: 0");
    }

    fn drawn_round(engine: &mut MatchEngine, view: &mut MatchView) {
        for (row, col) in DRAW_FILL {
            dispatch_all(&engine.apply_move(row, col), view);
        }
    }

    #[test]
    fn test_tie_break_accept_then_decline() {
        let (mut engine, mut view) = start(1);
        drawn_round(&mut engine, &mut view);
        assert!(*view.tie_break_pending());
        assert_eq!(view.status_line(), "It's a tie!");

        dispatch_all(&engine.resume_tie_break(true), &mut view);
        assert!(!*view.tie_break_pending());
        assert_eq!(view.status_line(), "Ann's Turn (X)");
        assert_eq!(view.score_line(), "Round 2/2 | Ann: 0 | Ben: 0");

        dispatch_all(&engine.apply_move(0, 0), &mut view);
        assert_eq!(view.board().filled(), 1);
        assert_eq!(view.status_line(), "Ben's Turn (O)");

        for (row, col) in DRAW_FILL.into_iter().skip(1) {
            dispatch_all(&engine.apply_move(row, col), &mut view);
        }
        assert!(*view.tie_break_pending());

        dispatch_all(&engine.resume_tie_break(false), &mut view);
        assert!(!*view.tie_break_pending());
        assert!(view.is_finished());
        assert_eq!(view.status_line(), "The match is a draw!");
    }

    #[test]
    fn test_snapshot_restores_pending_prompt() {
        let (mut engine, mut view) = start(1);
        drawn_round(&mut engine, &mut view);
        let mut view = MatchView::new(engine.config());
        dispatch_all(&engine.snapshot(), &mut view);
        assert!(*view.tie_break_pending());
    }

    #[test]
    fn test_undecided_outcome_leaves_notice_alone() {
        let (_, mut view) = start(1);
        view.on_round_decided(RoundOutcome::InProgress, None);
        assert!(view.notice().is_none());
    }
}
