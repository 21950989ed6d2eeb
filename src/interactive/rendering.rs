//! TUI rendering with ratatui
//!
//! The equation grid and side panels for the interactive game.

use super::app::{App, Message, MessageStyle};
use crate::core::FeedbackMark;
use crate::game::RoundState;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Grid
            Constraint::Percentage(45), // Info panel
        ])
        .split(chunks[1]);

    render_grid(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔢 NUMBLE - Guess the Equation")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// Style for one scored cell
fn mark_style(mark: FeedbackMark) -> Style {
    match mark {
        FeedbackMark::Correct => Style::default().fg(Color::Black).bg(Color::Green),
        FeedbackMark::Present => Style::default().fg(Color::Black).bg(Color::Magenta),
        FeedbackMark::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let width = app.round.width();
    let mut lines: Vec<Line> = vec![Line::default()];

    for row in 0..app.round.max_attempts() {
        let mut spans: Vec<Span> = vec![Span::raw("  ")];

        if let Some(attempt) = app.round.attempts().get(row) {
            // Scored row
            for (i, &mark) in attempt.feedback.marks().iter().enumerate() {
                let cell = format!(" {} ", attempt.guess.char_at(i) as char);
                spans.push(Span::styled(cell, mark_style(mark)));
                spans.push(Span::raw(" "));
            }
        } else if row == app.round.attempts().len() && !app.round.is_over() {
            // Row being typed
            let typed: Vec<char> = app.round.buffer().chars().collect();
            for i in 0..width {
                let (cell, style) = match typed.get(i) {
                    Some(&c) => (
                        format!(" {c} "),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                    None => (" _ ".to_string(), Style::default().fg(Color::DarkGray)),
                };
                spans.push(Span::styled(cell, style));
                spans.push(Span::raw(" "));
            }
        } else {
            // Untouched row
            for _ in 0..width {
                spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
                spans.push(Span::raw(" "));
            }
        }

        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    let grid = Paragraph::new(lines).block(
        Block::default()
            .title(" Grid ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(grid, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Attempts gauge
            Constraint::Percentage(50), // Messages
            Constraint::Min(5),         // Session stats
        ])
        .split(area);

    render_attempts_gauge(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
    render_statistics(f, app, chunks[2]);
}

fn render_attempts_gauge(f: &mut Frame, app: &App, area: Rect) {
    let used = app.round.attempts().len();
    let max = app.round.max_attempts();
    let pct = ((used as f64 / max as f64) * 100.0).min(100.0) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(pct)
        .label(format!("{used}/{max} used"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|Message { text, style }| {
            let style = match style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_statistics(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let win_rate = if stats.total_games > 0 {
        stats.games_won as f64 / stats.total_games as f64 * 100.0
    } else {
        0.0
    };

    let mut lines = vec![
        Line::from(format!(
            "Played: {}   Won: {}   Rate: {win_rate:.0}%   Streak: {}",
            stats.total_games, stats.games_won, stats.current_streak
        )),
        Line::default(),
    ];

    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for (turns, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
        let bar_width = if most > 0 { count * 16 / most } else { 0 };
        lines.push(Line::from(vec![
            Span::raw(format!("{turns}: ")),
            Span::styled("█".repeat(bar_width), Style::default().fg(Color::Green)),
            Span::raw(format!(" {count}")),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Session ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(paragraph, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let (text, color) = match app.round.state() {
        RoundState::InProgress => (
            "Type the equation | Enter: Submit | Backspace: Delete | n: New Game | q: Quit",
            Color::DarkGray,
        ),
        RoundState::Won => (
            "🎉 Solved! | n: New Game | q: Quit",
            Color::Green,
        ),
        RoundState::Lost => (
            "Out of attempts | n: New Game | q: Quit",
            Color::Red,
        ),
    };

    let status = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(status, area);
}
