//! Guess scoring command
//!
//! Scores a guess against a target from the command line. The CLI boundary
//! turns contract violations (width mismatch, foreign characters) into user
//! errors instead of panics.

use crate::core::{Equation, Feedback};

/// A scored target/guess pair
#[derive(Debug)]
pub struct ScoreReport {
    pub target: Equation,
    pub guess: Equation,
    pub feedback: Feedback,
}

/// Score a guess string against a target string
///
/// # Errors
///
/// Returns an error if either string contains characters outside the puzzle
/// alphabet, or if the two widths differ.
pub fn run_score(target: &str, guess: &str) -> Result<ScoreReport, String> {
    let target = Equation::new(target).map_err(|e| format!("Invalid target: {e}"))?;
    let guess = Equation::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;

    if target.width() != guess.width() {
        return Err(format!(
            "Width mismatch: target is {} characters, guess is {}",
            target.width(),
            guess.width()
        ));
    }

    let feedback = Feedback::score(&target, &guess);

    Ok(ScoreReport {
        target,
        guess,
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FeedbackMark;

    #[test]
    fn score_command_scores_equal_width_pair() {
        let report = run_score("10+5=15", "15+0=10").unwrap();
        assert_eq!(report.feedback.len(), 7);
        assert_eq!(report.feedback.marks()[0], FeedbackMark::Correct);
    }

    #[test]
    fn score_command_rejects_width_mismatch() {
        let err = run_score("10+5=15", "1+1=2").unwrap_err();
        assert!(err.contains("Width mismatch"));
    }

    #[test]
    fn score_command_rejects_foreign_characters() {
        assert!(run_score("10+5=15", "1o+5=15").is_err());
        assert!(run_score("crane", "slate").is_err());
    }
}
