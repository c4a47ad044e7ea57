//! Setup form: player names and number of rounds.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use strictly_rounds::{MAX_ROUNDS, MIN_ROUNDS, MatchConfig, SetupError};
use tracing::{debug, info, instrument};

/// Field that currently has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    /// Name of the X player.
    #[default]
    PlayerX,
    /// Name of the O player.
    PlayerO,
    /// Round count spinner.
    Rounds,
}

impl Field {
    /// Returns the display label for this field.
    pub fn label(self) -> &'static str {
        match self {
            Self::PlayerX => "Player X Name:",
            Self::PlayerO => "Player O Name:",
            Self::Rounds => "Number of Rounds:",
        }
    }

    /// Moves focus down, wrapping to the top.
    pub fn next(self) -> Self {
        match self {
            Self::PlayerX => Self::PlayerO,
            Self::PlayerO => Self::Rounds,
            Self::Rounds => Self::PlayerX,
        }
    }

    /// Moves focus up, wrapping to the bottom.
    pub fn prev(self) -> Self {
        match self {
            Self::PlayerX => Self::Rounds,
            Self::PlayerO => Self::PlayerX,
            Self::Rounds => Self::PlayerO,
        }
    }
}

/// What the form wants after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    /// Keep editing.
    Editing,
    /// User confirmed; call [`SetupForm::submit`].
    Submit,
    /// User abandoned setup.
    Cancel,
}

/// Editable setup form state.
#[derive(Debug, Clone, Getters)]
pub struct SetupForm {
    player_x: String,
    player_o: String,
    rounds: u32,
    focus: Field,
    error: Option<String>,
}

impl SetupForm {
    /// Creates a form prefilled with the given values.
    ///
    /// The round count is clamped into the spinner's range.
    #[instrument(skip(player_x, player_o))]
    pub fn new(player_x: impl Into<String>, player_o: impl Into<String>, rounds: u32) -> Self {
        Self {
            player_x: player_x.into(),
            player_o: player_o.into(),
            rounds: rounds.clamp(MIN_ROUNDS, MAX_ROUNDS),
            focus: Field::default(),
            error: None,
        }
    }

    /// Applies one key press.
    #[instrument(skip(self, key), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) -> FormAction {
        match key.code {
            KeyCode::Esc => return FormAction::Cancel,
            KeyCode::Enter => return FormAction::Submit,
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.prev(),
            code => self.edit(code),
        }
        FormAction::Editing
    }

    fn edit(&mut self, code: KeyCode) {
        match (self.focus, code) {
            (Field::Rounds, KeyCode::Left | KeyCode::Char('-')) => {
                self.rounds = self.rounds.saturating_sub(1).max(MIN_ROUNDS);
            }
            (Field::Rounds, KeyCode::Right | KeyCode::Char('+')) => {
                self.rounds = (self.rounds + 1).min(MAX_ROUNDS);
            }
            (Field::PlayerX, KeyCode::Char(c)) => self.player_x.push(c),
            (Field::PlayerO, KeyCode::Char(c)) => self.player_o.push(c),
            (Field::PlayerX, KeyCode::Backspace) => {
                self.player_x.pop();
            }
            (Field::PlayerO, KeyCode::Backspace) => {
                self.player_o.pop();
            }
            _ => {}
        }
    }

    /// Validates the form into a match configuration.
    ///
    /// On failure the message is kept on the form so it can be shown
    /// while the user corrects it.
    #[instrument(skip(self))]
    pub fn submit(&mut self) -> Result<MatchConfig, SetupError> {
        match MatchConfig::new(&self.player_x, &self.player_o, self.rounds) {
            Ok(config) => {
                info!("Setup complete");
                self.error = None;
                Ok(config)
            }
            Err(err) => {
                debug!(error = %err, "Setup rejected");
                self.error = Some(err.message());
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(form: &mut SetupForm, text: &str) {
        for c in text.chars() {
            form.handle_key(KeyEvent::from(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_typing_fills_focused_field() {
        let mut form = SetupForm::new("", "", 3);
        type_text(&mut form, "Ann");
        form.handle_key(KeyEvent::from(KeyCode::Tab));
        type_text(&mut form, "Ben");
        assert_eq!(form.player_x(), "Ann");
        assert_eq!(form.player_o(), "Ben");
        assert_eq!(*form.focus(), Field::PlayerO);
    }

    #[test]
    fn test_rounds_spinner_is_bounded() {
        let mut form = SetupForm::new("Ann", "Ben", 2);
        form.handle_key(KeyEvent::from(KeyCode::BackTab));
        assert_eq!(*form.focus(), Field::Rounds);

        for _ in 0..5 {
            form.handle_key(KeyEvent::from(KeyCode::Left));
        }
        assert_eq!(*form.rounds(), MIN_ROUNDS);

        for _ in 0..20 {
            form.handle_key(KeyEvent::from(KeyCode::Char('+')));
        }
        assert_eq!(*form.rounds(), MAX_ROUNDS);
    }

    #[test]
    fn test_prefill_clamps_rounds() {
        assert_eq!(*SetupForm::new("", "", 0).rounds(), MIN_ROUNDS);
        assert_eq!(*SetupForm::new("", "", 99).rounds(), MAX_ROUNDS);
    }

    #[test]
    fn test_blank_name_keeps_error_on_form() {
        let mut form = SetupForm::new("   ", "Ben", 3);
        assert_eq!(form.handle_key(KeyEvent::from(KeyCode::Enter)), FormAction::Submit);

        let err = form.submit().unwrap_err();
        assert!(!err.is_cancelled());
        assert_eq!(form.error().as_deref(), Some("Player names cannot be empty."));

        type_text(&mut form, "Ann");
        let config = form.submit().unwrap();
        assert_eq!(config.player_x_name(), "Ann");
        assert!(form.error().is_none());
    }

    #[test]
    fn test_escape_cancels() {
        let mut form = SetupForm::new("Ann", "Ben", 3);
        assert_eq!(form.handle_key(KeyEvent::from(KeyCode::Esc)), FormAction::Cancel);
    }

    #[test]
    fn test_backspace_edits_name() {
        let mut form = SetupForm::new("Anna", "", 3);
        form.handle_key(KeyEvent::from(KeyCode::Backspace));
        assert_eq!(form.player_x(), "Ann");
    }
}
