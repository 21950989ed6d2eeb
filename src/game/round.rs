//! A single puzzle round
//!
//! Tracks the hidden target, the typed row, the attempt history and the
//! win/loss state. The round owns the submission rules: a row must be full
//! and must be a true equation before it is scored.

use crate::core::{Equation, Feedback, is_input_char};
use crate::eval::is_valid_equation;
use std::fmt;

/// Default number of attempt rows
pub const DEFAULT_ATTEMPTS: usize = 6;

/// A scored guess
#[derive(Debug, Clone)]
pub struct Attempt {
    pub guess: Equation,
    pub feedback: Feedback,
}

/// Where the round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    InProgress,
    Won,
    Lost,
}

/// Why a submission was rejected (the typed row is left intact for editing)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    /// The row has fewer characters than the puzzle width
    RowNotFull,
    /// The row is not a well-formed, true equation
    NotAnEquation,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RowNotFull => write!(f, "fill the whole row first"),
            Self::NotAnEquation => write!(f, "that's not a true equation"),
        }
    }
}

impl std::error::Error for SubmitError {}

/// A round of the game: one hidden target, a bounded number of guesses
pub struct Round {
    target: Equation,
    max_attempts: usize,
    attempts: Vec<Attempt>,
    buffer: String,
    state: RoundState,
}

impl Round {
    /// Start a round against a target equation
    ///
    /// The puzzle width is the target's width; guesses must fill it exactly.
    #[must_use]
    pub fn new(target: Equation, max_attempts: usize) -> Self {
        Self {
            target,
            max_attempts,
            attempts: Vec::new(),
            buffer: String::new(),
            state: RoundState::InProgress,
        }
    }

    /// Start a round with the default six attempts
    #[must_use]
    pub fn with_default_attempts(target: Equation) -> Self {
        Self::new(target, DEFAULT_ATTEMPTS)
    }

    /// The hidden target
    #[inline]
    #[must_use]
    pub fn target(&self) -> &Equation {
        &self.target
    }

    /// Characters per row
    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.target.width()
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> RoundState {
        self.state
    }

    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state != RoundState::InProgress
    }

    /// Scored guesses so far, oldest first
    #[inline]
    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    #[inline]
    #[must_use]
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[must_use]
    pub fn attempts_left(&self) -> usize {
        self.max_attempts.saturating_sub(self.attempts.len())
    }

    /// The row being typed
    #[inline]
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Append a character to the typed row
    ///
    /// Accepted only while the round is in progress, the row has space, and
    /// the character is on the puzzle keyboard (digits, `+ - * / =`).
    /// Returns whether the character was taken.
    pub fn push_char(&mut self, c: char) -> bool {
        if self.is_over() || self.buffer.len() >= self.width() || !is_input_char(c) {
            return false;
        }
        self.buffer.push(c);
        true
    }

    /// Delete the last typed character. Returns whether anything was deleted.
    pub fn pop_char(&mut self) -> bool {
        if self.is_over() {
            return false;
        }
        self.buffer.pop().is_some()
    }

    /// Submit the typed row as a guess
    ///
    /// The row must be exactly `width` characters and pass the equation
    /// check; rejected rows stay in the buffer for editing. An accepted row
    /// is scored, recorded, and may end the round.
    ///
    /// # Errors
    /// `SubmitError::RowNotFull` or `SubmitError::NotAnEquation`.
    ///
    /// # Panics
    /// Will not panic - accepted buffers contain only puzzle characters, so
    /// the `expect()` on `Equation::new` is guaranteed safe.
    pub fn submit(&mut self) -> Result<&Attempt, SubmitError> {
        if self.buffer.len() != self.width() {
            return Err(SubmitError::RowNotFull);
        }
        if !is_valid_equation(&self.buffer) {
            return Err(SubmitError::NotAnEquation);
        }

        let guess = Equation::new(self.buffer.as_str())
            .expect("buffer only ever holds puzzle characters");
        let feedback = Feedback::score(&self.target, &guess);

        self.buffer.clear();

        if feedback.is_win() {
            self.state = RoundState::Won;
        } else if self.attempts.len() + 1 >= self.max_attempts {
            self.state = RoundState::Lost;
        }

        self.attempts.push(Attempt { guess, feedback });
        Ok(self
            .attempts
            .last()
            .expect("attempt was pushed on the line above"))
    }

    /// Emoji share grid, one line per attempt
    #[must_use]
    pub fn share_grid(&self) -> String {
        self.attempts
            .iter()
            .map(|a| a.feedback.to_emoji())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
