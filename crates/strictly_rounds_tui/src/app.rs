//! Application state and key handling.

use crate::input::{digit_position, move_cursor};
use crate::setup_form::{FormAction, SetupForm};
use crate::view::MatchView;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use derive_new::new;
use strictly_rounds::{MatchConfig, MatchEngine, MatchEvent, Position, SetupError, dispatch_all};
use tracing::{debug, info, instrument};

/// Why the application loop should stop.
#[derive(Debug)]
pub enum Exit {
    /// User quit from the game screen.
    Quit,
    /// User abandoned setup; no match was created.
    Cancelled(SetupError),
}

/// A running match and what the screen shows for it.
#[derive(Debug)]
pub struct Session {
    engine: MatchEngine,
    view: MatchView,
}

impl Session {
    /// Returns the render model.
    pub fn view(&self) -> &MatchView {
        &self.view
    }
}

/// Input the game screen understands, decided before touching the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Play(Position),
    MoveCursor(KeyCode),
    Reset,
    TieBreak(bool),
    NewPlayers,
    Quit,
    Nothing,
}

/// Main application state.
///
/// Without a session the setup form has the keyboard.
#[derive(Debug, new)]
pub struct App {
    form: SetupForm,
    #[new(default)]
    session: Option<Session>,
    #[new(value = "Position::Center")]
    cursor: Position,
    #[new(default)]
    exit: Option<Exit>,
}

impl App {
    /// Returns the setup form.
    pub fn form(&self) -> &SetupForm {
        &self.form
    }

    /// Returns the running match, if any.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Returns the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Returns the reason to stop, once there is one.
    pub fn exit(&self) -> Option<&Exit> {
        self.exit.as_ref()
    }

    /// Routes one key press to the setup form or the game screen.
    #[instrument(skip(self, key), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if self.session.is_some() {
            let command = self.game_command(key.code);
            debug!(?command, "Game input");
            self.run(command);
        } else {
            self.handle_setup_key(key);
        }
    }

    fn handle_setup_key(&mut self, key: KeyEvent) {
        match self.form.handle_key(key) {
            FormAction::Editing => {}
            FormAction::Cancel => {
                info!("Setup cancelled");
                self.exit = Some(Exit::Cancelled(SetupError::Cancelled));
            }
            FormAction::Submit => {
                if let Ok(config) = self.form.submit() {
                    self.start_match(config);
                }
            }
        }
    }

    fn game_command(&self, code: KeyCode) -> Command {
        let Some(session) = &self.session else {
            return Command::Nothing;
        };
        let view = session.view();

        match code {
            KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
            _ if view.is_finished() => match code {
                KeyCode::Char('r') => Command::Reset,
                KeyCode::Char('n') => Command::NewPlayers,
                _ => Command::Nothing,
            },
            _ if *view.tie_break_pending() => match code {
                KeyCode::Char('y') => Command::TieBreak(true),
                KeyCode::Char('n') => Command::TieBreak(false),
                _ => Command::Nothing,
            },
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                Command::MoveCursor(code)
            }
            KeyCode::Enter | KeyCode::Char(' ') => Command::Play(self.cursor),
            KeyCode::Char('r') => Command::Reset,
            KeyCode::Char(c) => digit_position(c).map_or(Command::Nothing, Command::Play),
            _ => Command::Nothing,
        }
    }

    fn run(&mut self, command: Command) {
        match command {
            Command::Nothing => {}
            Command::Quit => {
                info!("User quit");
                self.exit = Some(Exit::Quit);
            }
            Command::MoveCursor(code) => self.cursor = move_cursor(self.cursor, code),
            Command::NewPlayers => self.back_to_setup(),
            Command::Play(position) => {
                self.cursor = position;
                self.apply(|engine| engine.apply_position(position), false);
            }
            Command::TieBreak(extend) => {
                self.apply(|engine| engine.resume_tie_break(extend), false);
            }
            Command::Reset => self.apply(MatchEngine::reset_match, true),
        }
    }

    /// Runs an engine operation and feeds its events to the view.
    ///
    /// Ignored input produces no events and leaves the screen as it was.
    fn apply(&mut self, op: impl FnOnce(&mut MatchEngine) -> Vec<MatchEvent>, fresh_view: bool) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let events = op(&mut session.engine);
        if events.is_empty() {
            return;
        }
        if fresh_view {
            session.view = MatchView::new(session.engine.config());
        } else {
            session.view.clear_notice();
        }
        dispatch_all(&events, &mut session.view);
    }

    #[instrument(skip(self, config))]
    fn start_match(&mut self, config: MatchConfig) {
        let engine = MatchEngine::new(config);
        let mut view = MatchView::new(engine.config());
        dispatch_all(&engine.snapshot(), &mut view);
        self.session = Some(Session { engine, view });
        self.cursor = Position::Center;
    }

    /// Drops the finished match and reopens setup with the same players.
    #[instrument(skip(self))]
    fn back_to_setup(&mut self) {
        if let Some(session) = self.session.take() {
            let config = session.engine.config();
            self.form = SetupForm::new(
                config.player_x_name().as_str(),
                config.player_o_name().as_str(),
                *config.total_rounds(),
            );
        }
    }
}
