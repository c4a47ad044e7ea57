//! Stateless UI rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use strictly_rounds::{Board, Player, Position, Square};

use crate::app::App;
use crate::setup_form::{Field, SetupForm};
use crate::view::MatchView;

/// Renders whichever screen is active.
pub fn draw(frame: &mut Frame, app: &App) {
    match app.session() {
        Some(session) => draw_game(frame, session.view(), app.cursor()),
        None => draw_setup(frame, app.form()),
    }
}

// ─────────────────────────────────────────────────────────────
//  Setup screen
// ─────────────────────────────────────────────────────────────

fn draw_setup(frame: &mut Frame, form: &SetupForm) {
    let area = center_rect(frame.area(), 50, 12);
    let block = Block::default().borders(Borders::ALL).title("Game Setup");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(inner);

    let fields = [
        (Field::PlayerX, form.player_x().clone()),
        (Field::PlayerO, form.player_o().clone()),
        (Field::Rounds, format!("< {} >", form.rounds())),
    ];
    for (row, (field, value)) in fields.into_iter().enumerate() {
        let focused = *form.focus() == field;
        let style = if focused {
            Style::default().fg(Color::Black).bg(Color::White)
        } else {
            Style::default()
        };
        let line = Line::from(vec![
            Span::raw(format!("{:<18}", field.label())),
            Span::styled(format!(" {} ", value), style),
        ]);
        frame.render_widget(Paragraph::new(line), rows[row]);
    }

    if let Some(error) = form.error() {
        let error = Paragraph::new(error.as_str())
            .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));
        frame.render_widget(error, rows[4]);
    }

    let help = Paragraph::new("Tab: next field  ←/→: rounds  Enter: OK  Esc: Cancel")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, rows[5]);
}

// ─────────────────────────────────────────────────────────────
//  Game screen
// ─────────────────────────────────────────────────────────────

fn draw_game(frame: &mut Frame, view: &MatchView, cursor: Position) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(2), // Status + score
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Notice
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new(view.title())
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, chunks[0]);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            view.status_line(),
            Style::default().fg(Color::Yellow),
        )),
        Line::from(view.score_line()),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(header, chunks[1]);

    draw_board(frame, chunks[2], view.board(), cursor);

    if let Some(notice) = view.notice() {
        let notice = Paragraph::new(notice.as_str())
            .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(notice, chunks[3]);
    }

    let help = if view.is_finished() {
        "r: play again  n: new players  q: quit"
    } else if *view.tie_break_pending() {
        "y: yes  n: no  q: quit"
    } else {
        "Arrows + Enter or 1-9: move  r: reset match  q: quit"
    };
    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);

    if *view.tie_break_pending() {
        draw_tie_break_prompt(frame);
    }
}

fn draw_tie_break_prompt(frame: &mut Frame) {
    let area = center_rect(frame.area(), 40, 5);
    let prompt = Paragraph::new(vec![
        Line::from("It's a tie! Play one more round?"),
        Line::from(""),
        Line::from("y: yes   n: no"),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Tie")
            .style(Style::default().fg(Color::Yellow)),
    );
    frame.render_widget(Clear, area);
    frame.render_widget(prompt, area);
}

fn draw_board(frame: &mut Frame, area: Rect, board: &Board, cursor: Position) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (i, row_positions) in Position::ALL.chunks(3).enumerate() {
        draw_row(frame, rows[i * 2], board, cursor, row_positions);
        if i < 2 {
            draw_separator(frame, rows[i * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, board: &Board, cursor: Position, positions: &[Position]) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (i, pos) in positions.iter().enumerate() {
        draw_cell(frame, cols[i * 2], board, cursor, *pos);
        if i < 2 {
            draw_separator_vertical(frame, cols[i * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, board: &Board, cursor: Position, pos: Position) {
    let keypad = (pos.to_index() + 1).to_string();
    let (symbol, base_style) = match board.get(pos) {
        Square::Empty => (keypad, Style::default().fg(Color::DarkGray)),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if pos == cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(format!(" {} ", symbol), style)),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"), Line::from("│"), Line::from("│")])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
