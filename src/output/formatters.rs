//! Formatting utilities for terminal output

use crate::core::{Equation, Feedback, FeedbackMark};
use colored::{ColoredString, Colorize};

/// Format a feedback sequence as an emoji share string
#[must_use]
pub fn feedback_to_emoji(feedback: &Feedback) -> String {
    feedback.to_emoji()
}

/// Paint a single cell the way the grid colors it
///
/// Green for correct, magenta for present-elsewhere, dim gray for absent.
#[must_use]
pub fn paint_cell(c: char, mark: FeedbackMark) -> ColoredString {
    let cell = format!(" {c} ");
    match mark {
        FeedbackMark::Correct => cell.black().on_green(),
        FeedbackMark::Present => cell.black().on_magenta(),
        FeedbackMark::Absent => cell.white().on_bright_black(),
    }
}

/// Paint a whole scored row
///
/// Character count and mark count always agree for rows produced by the
/// scorer, so the zip never truncates.
#[must_use]
pub fn paint_row(guess: &Equation, feedback: &Feedback) -> String {
    guess
        .text()
        .chars()
        .zip(feedback.marks())
        .map(|(c, &mark)| paint_cell(c, mark).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(target: &str, guess: &str) -> (Equation, Feedback) {
        let target = Equation::new(target).unwrap();
        let guess = Equation::new(guess).unwrap();
        let feedback = Feedback::score(&target, &guess);
        (guess, feedback)
    }

    #[test]
    fn emoji_row_matches_feedback() {
        let (_, feedback) = scored("1+2=3", "2+2=4");
        assert_eq!(feedback_to_emoji(&feedback), "⬛🟩🟩🟩⬛");
    }

    #[test]
    fn painted_row_keeps_every_character() {
        colored::control::set_override(false);
        let (guess, feedback) = scored("10+5=15", "15+0=10");
        let row = paint_row(&guess, &feedback);
        for c in guess.text().chars() {
            assert!(row.contains(c), "painted row lost '{c}'");
        }
        colored::control::unset_override();
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }
}
