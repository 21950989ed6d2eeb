//! Per-position feedback for a guessed equation
//!
//! Feedback classifies each guess character against the hidden target:
//! - Correct: right character, right position (green)
//! - Present: character occurs elsewhere in the target (magenta)
//! - Absent: character does not occur, or all its occurrences are spoken for (gray)
//!
//! Duplicate characters are resolved with per-position "used" flags on the
//! target, so a target character is never claimed by two guess positions.

use super::Equation;
use std::fmt;

/// Classification of a single guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackMark {
    /// Character matches the target at this position
    Correct,
    /// Character occurs at a different, not-yet-claimed target position
    Present,
    /// Character has no unclaimed occurrence in the target
    Absent,
}

impl FeedbackMark {
    /// Emoji glyph for share grids
    #[inline]
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟪',
            Self::Absent => '⬛',
        }
    }
}

/// Ordered per-position feedback for a whole guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    marks: Vec<FeedbackMark>,
}

impl Feedback {
    /// Score a guess against a target, resolving duplicates
    ///
    /// # Algorithm
    /// 1. Exact pass: mark every position where guess and target agree as
    ///    `Correct` and consume that target position. Everything else starts
    ///    as `Absent`.
    /// 2. Duplicate pass: for each non-`Correct` position, claim the first
    ///    unconsumed target position holding the same character and mark the
    ///    guess position `Present`. One target position per guess position.
    ///
    /// # Panics
    /// Panics if target and guess widths differ. Equal width is a caller
    /// contract: the game only scores guesses that already filled the row.
    ///
    /// # Examples
    /// ```
    /// use numble::core::{Equation, Feedback, FeedbackMark};
    ///
    /// let target = Equation::new("10+5=15").unwrap();
    /// let guess = Equation::new("15+0=10").unwrap();
    /// let feedback = Feedback::score(&target, &guess);
    ///
    /// assert_eq!(feedback.marks()[0], FeedbackMark::Correct);
    /// assert_eq!(feedback.marks()[1], FeedbackMark::Present);
    /// ```
    #[must_use]
    pub fn score(target: &Equation, guess: &Equation) -> Self {
        assert_eq!(
            target.width(),
            guess.width(),
            "target width {} != guess width {}",
            target.width(),
            guess.width()
        );

        let width = target.width();
        let mut marks = vec![FeedbackMark::Absent; width];
        // One-time consumable flag per target position
        let mut used = vec![false; width];

        // Exact pass
        for i in 0..width {
            if guess.char_at(i) == target.char_at(i) {
                marks[i] = FeedbackMark::Correct;
                used[i] = true;
            }
        }

        // Duplicate pass: first unclaimed occurrence wins, lowest index first
        for i in 0..width {
            if marks[i] == FeedbackMark::Correct {
                continue;
            }
            for j in 0..width {
                if !used[j] && target.char_at(j) == guess.char_at(i) {
                    marks[i] = FeedbackMark::Present;
                    used[j] = true;
                    break;
                }
            }
        }

        Self { marks }
    }

    /// The ordered marks, one per guess position
    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[FeedbackMark] {
        &self.marks
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// True when every position is `Correct` (the guess is the target)
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.marks.iter().all(|&m| m == FeedbackMark::Correct)
    }

    /// Count of `Correct` marks
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.marks
            .iter()
            .filter(|&&m| m == FeedbackMark::Correct)
            .count()
    }

    /// Count of `Present` marks
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.marks
            .iter()
            .filter(|&&m| m == FeedbackMark::Present)
            .count()
    }

    /// Emoji share string, e.g. "🟩🟪⬛🟩🟩🟩🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.marks.iter().map(|m| m.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_emoji())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use FeedbackMark::{Absent, Correct, Present};

    fn eq(text: &str) -> Equation {
        Equation::new(text).unwrap()
    }

    /// No character's Correct+Present total may exceed its target occurrence count
    fn assert_multiset_invariant(target: &Equation, guess: &Equation, feedback: &Feedback) {
        let target_counts = target.char_counts();
        let mut claimed = rustc_hash::FxHashMap::<u8, u8>::default();

        for (i, &mark) in feedback.marks().iter().enumerate() {
            if mark != Absent {
                *claimed.entry(guess.char_at(i)).or_insert(0) += 1;
            }
        }

        for (&ch, &n) in &claimed {
            let available = target_counts.get(&ch).copied().unwrap_or(0);
            assert!(
                n <= available,
                "character '{}' claimed {n} times but target has {available}",
                ch as char
            );
        }
    }

    #[test]
    fn score_all_correct() {
        let target = eq("12+34=46");
        let feedback = Feedback::score(&target, &target);

        assert!(feedback.is_win());
        assert_eq!(feedback.count_correct(), 8);
        assert_eq!(feedback.count_present(), 0);
    }

    #[test]
    fn score_all_absent() {
        let target = eq("11+11=22");
        let guess = eq("33-33=66");

        let feedback = Feedback::score(&target, &guess);

        // Only '=' lines up; every other guess character is missing entirely
        assert_eq!(
            feedback.marks(),
            &[Absent, Absent, Absent, Absent, Absent, Correct, Absent, Absent]
        );
    }

    #[test]
    fn score_exact_then_duplicate_pass() {
        // Worked example: positions 0, 2, 4, 5 match exactly; the guess's
        // '5' and first '0' find displaced target positions; the trailing
        // '0' finds the target's single '0' already claimed.
        let target = eq("10+5=15");
        let guess = eq("15+0=10");

        let feedback = Feedback::score(&target, &guess);

        assert_eq!(
            feedback.marks(),
            &[Correct, Present, Correct, Present, Correct, Correct, Absent]
        );
        assert_multiset_invariant(&target, &guess, &feedback);
    }

    #[test]
    fn score_duplicates_consume_target_occurrences() {
        // Three '1's in the target, three in the guess: one exact, two displaced
        let target = eq("11+2=13");
        let guess = eq("21+1=31");

        let feedback = Feedback::score(&target, &guess);

        assert_eq!(
            feedback.marks(),
            &[Present, Correct, Correct, Present, Correct, Present, Present]
        );
        assert_multiset_invariant(&target, &guess, &feedback);
    }

    #[test]
    fn score_excess_duplicates_go_absent() {
        // Guess holds five '1's; target only three. The two extra get Absent.
        let target = eq("11+2=13");
        let guess = eq("11*1=11");

        let feedback = Feedback::score(&target, &guess);

        assert_eq!(
            feedback.marks(),
            &[Correct, Correct, Absent, Absent, Correct, Correct, Absent]
        );
        assert_multiset_invariant(&target, &guess, &feedback);
    }

    #[test]
    fn score_exact_match_beats_earlier_duplicate() {
        // The guess's leading '2' must not steal the target position needed
        // by the exact match at position 2.
        let target = eq("1+2=3");
        let guess = eq("2+2=4");

        let feedback = Feedback::score(&target, &guess);

        assert_eq!(feedback.marks(), &[Absent, Correct, Correct, Correct, Absent]);
        assert_multiset_invariant(&target, &guess, &feedback);
    }

    #[test]
    #[should_panic(expected = "width")]
    fn score_width_mismatch_panics() {
        let target = eq("10+5=15");
        let guess = eq("1+1=2");
        let _ = Feedback::score(&target, &guess);
    }

    #[test]
    fn score_is_deterministic() {
        let target = eq("15-2*3=9");
        let guess = eq("9*2-3=15");

        let first = Feedback::score(&target, &guess);
        let second = Feedback::score(&target, &guess);

        assert_eq!(first, second);
    }

    #[test]
    fn feedback_counts() {
        let target = eq("10+5=15");
        let guess = eq("15+0=10");
        let feedback = Feedback::score(&target, &guess);

        assert_eq!(feedback.count_correct(), 4);
        assert_eq!(feedback.count_present(), 2);
        assert_eq!(feedback.len(), 7);
        assert!(!feedback.is_win());
    }

    #[test]
    fn feedback_emoji() {
        let target = eq("1+2=3");
        let guess = eq("2+2=4");
        let feedback = Feedback::score(&target, &guess);

        assert_eq!(feedback.to_emoji(), "⬛🟩🟩🟩⬛");
        assert_eq!(format!("{feedback}"), "⬛🟩🟩🟩⬛");
    }

    #[test]
    fn mark_emoji_glyphs() {
        assert_eq!(Correct.emoji(), '🟩');
        assert_eq!(Present.emoji(), '🟪');
        assert_eq!(Absent.emoji(), '⬛');
    }
}
