//! TUI application state and logic

use crate::core::{Equation, is_input_char};
use crate::game::{Round, RoundState};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::prelude::IndexedRandom;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub round: Round,
    pub targets: Vec<Equation>,
    pub max_attempts: usize,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub guess_distribution: [usize; 7],
}

impl App {
    #[must_use]
    pub fn new(first_target: Equation, targets: Vec<Equation>, max_attempts: usize) -> Self {
        Self {
            round: Round::new(first_target, max_attempts),
            targets,
            max_attempts,
            messages: vec![
                Message {
                    text: "Welcome! Guess the hidden equation.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type digits and + - * / =, then press Enter.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Start a fresh round against a random target from the pool
    pub fn new_game(&mut self) {
        let target = self
            .targets
            .choose(&mut rand::rng())
            .cloned()
            .unwrap_or_else(|| self.round.target().clone());

        self.round = Round::new(target, self.max_attempts);
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn type_char(&mut self, c: char) {
        if is_input_char(c) {
            self.round.push_char(c);
        }
    }

    pub fn delete_char(&mut self) {
        self.round.pop_char();
    }

    /// Submit the typed row and react to the outcome
    pub fn submit_row(&mut self) {
        match self.round.submit() {
            Ok(attempt) => {
                let emoji = attempt.feedback.to_emoji();
                self.add_message(&emoji, MessageStyle::Info);
                self.finish_round_if_over();
            }
            Err(reason) => {
                self.add_message(&reason.to_string(), MessageStyle::Error);
            }
        }
    }

    fn finish_round_if_over(&mut self) {
        match self.round.state() {
            RoundState::Won => {
                let turns = self.round.attempts().len();
                self.stats.total_games += 1;
                self.stats.games_won += 1;
                self.stats.current_streak += 1;
                if turns < self.stats.guess_distribution.len() {
                    self.stats.guess_distribution[turns] += 1;
                }

                let celebration = match turns {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    6 => "😅 PHEW! Got it in six! 😅",
                    _ => "🎊 SOLVED! 🎊",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            RoundState::Lost => {
                self.stats.total_games += 1;
                self.stats.current_streak = 0;

                let reveal = format!("Out of attempts! It was {}", self.round.target());
                self.add_message(&reveal, MessageStyle::Error);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            RoundState::InProgress => {}
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if app.round.is_over() {
                match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_game();
                    }
                    _ => {
                        // Between rounds, ignore other keys
                    }
                }
            } else {
                match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_game();
                    }
                    KeyCode::Char(c) => {
                        app.type_char(c);
                    }
                    KeyCode::Backspace => {
                        app.delete_char();
                    }
                    KeyCode::Enter => {
                        app.submit_row();
                    }
                    _ => {}
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
