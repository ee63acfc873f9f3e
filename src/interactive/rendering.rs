//! TUI rendering with ratatui
//!
//! Draws the board, keyboard and end screen from the controller's view model.

use super::app::{App, MessageStyle};
use crate::core::Verdict;
use crate::game::{EndView, KEYBOARD_ROWS, Player, RowView, Tile, ViewModel};
use crate::storage::GameStore;
use chrono::Utc;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<S: GameStore>(f: &mut Frame, app: &App<S>) {
    let view = app.controller.view(Utc::now());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Min(10),   // Board and side panel
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, &view, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    render_board(f, app, &view, main_chunks[0]);
    render_side_panel(f, app, &view, main_chunks[1]);
    render_status(f, app, &view, chunks[2]);
}

fn render_header(f: &mut Frame, view: &ViewModel, area: Rect) {
    let content = vec![
        Line::from(Span::styled(
            view.title.clone(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            view.subtitle.clone(),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let header = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

const fn verdict_color(verdict: Verdict) -> Color {
    match verdict {
        Verdict::Correct => Color::Green,
        Verdict::Present => Color::Yellow,
        Verdict::Absent => Color::DarkGray,
    }
}

fn tile_span(tile: Tile, shaking: bool) -> Span<'static> {
    let letter = tile.letter.unwrap_or('·');
    let style = match (tile.verdict, tile.letter) {
        (Some(verdict), _) => Style::default()
            .fg(Color::Black)
            .bg(verdict_color(verdict))
            .add_modifier(Modifier::BOLD),
        (None, Some(_)) if shaking => Style::default()
            .fg(Color::White)
            .bg(Color::Red)
            .add_modifier(Modifier::BOLD),
        (None, Some(_)) => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        (None, None) => Style::default().fg(Color::DarkGray),
    };
    Span::styled(format!(" {letter} "), style)
}

fn board_line(row: &RowView, shaking: bool) -> Line<'static> {
    let marker = match row.player {
        Some(Player::Opponent) => "🤖 ",
        _ if row.active => "▶  ",
        _ => "   ",
    };
    let mut spans = vec![Span::raw(marker)];
    for tile in row.tiles {
        spans.push(tile_span(tile, shaking && row.active));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_board<S: GameStore>(f: &mut Frame, app: &App<S>, view: &ViewModel, area: Rect) {
    let shaking = app.is_shaking();
    let mut lines = vec![Line::from("")];
    for row in &view.rows {
        lines.push(board_line(row, shaking));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_side_panel<S: GameStore>(f: &mut Frame, app: &App<S>, view: &ViewModel, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),      // Keyboard
            Constraint::Percentage(50), // End screen / help
            Constraint::Min(3),         // Messages
        ])
        .split(area);

    render_keyboard(f, view, chunks[0]);
    match &view.end {
        Some(end) => render_end_screen(f, app, end, chunks[1]),
        None => render_help(f, chunks[1]),
    }
    render_messages(f, app, chunks[2]);
}

fn render_keyboard(f: &mut Frame, view: &ViewModel, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|c| {
                    let style = view.key_state(c).map_or_else(
                        || Style::default().fg(Color::White),
                        |v| Style::default().fg(Color::Black).bg(verdict_color(v)),
                    );
                    Span::styled(format!(" {c} "), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL),
    );
    f.render_widget(keyboard, area);
}

fn render_end_screen<S: GameStore>(f: &mut Frame, app: &App<S>, end: &EndView, area: Rect) {
    let color = if end.won { Color::Green } else { Color::Red };
    let mut content = vec![
        Line::from(Span::styled(
            end.headline(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::raw("The word was: "),
            Span::styled(
                end.answer.clone(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(
            app.definition
                .clone()
                .unwrap_or_else(|| "Looking up definition...".to_owned()),
        ),
        Line::from(""),
    ];
    content.extend(end.share_grid.lines().map(|l| Line::from(l.to_owned())));
    content.push(Line::from(""));
    content.push(Line::from(Span::styled(
        app.answer_link(),
        Style::default().fg(Color::Cyan),
    )));

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Game Over | n: Play Again ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_help(f: &mut Frame, area: Rect) {
    let content = vec![
        Line::from("Guess the hidden five-letter word."),
        Line::from(vec![
            Span::styled(" A ", Style::default().fg(Color::Black).bg(Color::Green)),
            Span::raw(" right spot  "),
            Span::styled(" A ", Style::default().fg(Color::Black).bg(Color::Yellow)),
            Span::raw(" wrong spot  "),
            Span::styled(" A ", Style::default().fg(Color::Black).bg(Color::DarkGray)),
            Span::raw(" not in word"),
        ]),
    ];
    let help = Paragraph::new(content)
        .block(Block::default().title(" How to Play ").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(help, area);
}

fn render_messages<S: GameStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status<S: GameStore>(f: &mut Frame, app: &App<S>, view: &ViewModel, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(35),
            Constraint::Percentage(35),
        ])
        .split(area);

    let countdown = Paragraph::new(view.countdown.clone()).alignment(Alignment::Center);
    f.render_widget(countdown, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = if view.end.is_some() {
        "q: Quit | n: New Game"
    } else {
        "Enter: Submit | Backspace: Delete | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
