//! Strictly Rounds - terminal front end.

#![warn(missing_docs)]

mod app;
mod cli;
mod input;
mod setup_form;
mod ui;
mod view;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, instrument};

use app::{App, Exit};
use cli::Cli;
use setup_form::SetupForm;

type Term = Terminal<CrosstermBackend<Stdout>>;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log to file so output does not tear the board
    let log_file = std::fs::File::create(&cli.log_file)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(rounds = cli.rounds, "Starting Strictly Rounds");

    let mut app = App::new(SetupForm::new(cli.player_x, cli.player_o, cli.rounds));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = ?err, "Event loop error");
        return Err(err);
    }

    if let Some(Exit::Cancelled(err)) = app.exit() {
        println!("{}", err);
    }
    info!("Exiting");
    Ok(())
}

/// Draws and dispatches key presses until the app asks to stop.
#[instrument(skip_all)]
fn run_app(terminal: &mut Term, app: &mut App) -> Result<()> {
    while app.exit().is_none() {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key(key);
        }
    }
    Ok(())
}
