//! Equation validation
//!
//! Splits `left=right`, evaluates the left side, parses the right side as a
//! literal number and compares with an absolute tolerance. The boolean
//! boundary is fail-closed: callers learn only "accepted" or "not accepted",
//! while [`check_equation`] keeps the failure reason inspectable.

use super::tokenizer::{ExprError, tokenize};
use std::fmt;

/// Absolute tolerance absorbing float representation error.
///
/// Also the reason unguarded division by zero stays harmless: a comparison
/// against an infinite or NaN left side can never land inside the tolerance.
pub const TOLERANCE: f64 = 0.001;

/// Why an equation was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckError {
    /// Zero or more than one `=` in the input
    Separator,
    /// One side of the `=` has no characters
    EmptySide,
    /// The left side failed to tokenize
    Expression(ExprError),
    /// The right side is not a literal number
    RightLiteral,
    /// Both sides parsed but the values differ beyond tolerance
    Unbalanced,
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Separator => write!(f, "need exactly one '='"),
            Self::EmptySide => write!(f, "both sides of '=' must be non-empty"),
            Self::Expression(e) => write!(f, "left side: {e}"),
            Self::RightLiteral => write!(f, "right side is not a number"),
            Self::Unbalanced => write!(f, "left side does not equal right side"),
        }
    }
}

impl std::error::Error for CheckError {}

impl From<ExprError> for CheckError {
    fn from(e: ExprError) -> Self {
        Self::Expression(e)
    }
}

/// Validate an equation string, reporting why it fails
///
/// # Errors
/// Returns the first `CheckError` encountered, in checking order: separator,
/// empty side, left-side expression, right-side literal, balance.
///
/// # Examples
/// ```
/// use numble::eval::{CheckError, check_equation};
///
/// assert!(check_equation("2*3+4=10").is_ok());
/// assert_eq!(check_equation("5=5=5"), Err(CheckError::Separator));
/// assert_eq!(check_equation("3+2=6"), Err(CheckError::Unbalanced));
/// ```
pub fn check_equation(input: &str) -> Result<(), CheckError> {
    let mut sides = input.split('=');
    let (Some(left), Some(right), None) = (sides.next(), sides.next(), sides.next()) else {
        return Err(CheckError::Separator);
    };

    if left.is_empty() || right.is_empty() {
        return Err(CheckError::EmptySide);
    }

    let calculated = tokenize(left)?.evaluate();
    let declared: f64 = right.parse().map_err(|_| CheckError::RightLiteral)?;

    // A NaN or infinite left side fails this comparison unconditionally
    if (calculated - declared).abs() < TOLERANCE {
        Ok(())
    } else {
        Err(CheckError::Unbalanced)
    }
}

/// Is the input a well-formed, arithmetically true equation?
///
/// Fail-closed boundary: every internal failure collapses to `false` with no
/// diagnostic detail. Pure and deterministic — repeated calls on the same
/// input always agree.
///
/// # Examples
/// ```
/// use numble::eval::is_valid_equation;
///
/// assert!(is_valid_equation("3+2=5"));
/// assert!(!is_valid_equation("10++5=15"));
/// ```
#[must_use]
pub fn is_valid_equation(input: &str) -> bool {
    check_equation(input).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_simple_equations() {
        assert!(is_valid_equation("3+2=5"));
        assert!(is_valid_equation("10+5=15"));
        assert!(is_valid_equation("42=42"));
    }

    #[test]
    fn accepts_precedence_equation() {
        // (2*3)+4, not 2*(3+4)
        assert!(is_valid_equation("2*3+4=10"));
        assert!(!is_valid_equation("2*3+4=14"));
    }

    #[test]
    fn accepts_left_to_right_subtraction() {
        // (10-2)-3 = 5, never 10-(2-3) = 11
        assert!(is_valid_equation("10-2-3=5"));
        assert!(!is_valid_equation("10-2-3=11"));
    }

    #[test]
    fn accepts_leading_unary_minus() {
        assert!(is_valid_equation("-3+5=2"));
        assert!(is_valid_equation("-2*3=-6"));
    }

    #[test]
    fn rejects_leading_plus() {
        // The unary exception covers minus only
        assert!(!is_valid_equation("+5+3=8"));
        assert_eq!(
            check_equation("+5+3=8"),
            Err(CheckError::Expression(ExprError::Malformed))
        );
    }

    #[test]
    fn rejects_doubled_operator() {
        assert!(!is_valid_equation("10++5=15"));
    }

    #[test]
    fn rejects_multiple_separators() {
        assert!(!is_valid_equation("5=5=5"));
        assert_eq!(check_equation("5=5=5"), Err(CheckError::Separator));
    }

    #[test]
    fn rejects_missing_separator() {
        assert!(!is_valid_equation("3+2"));
        assert_eq!(check_equation("3+2"), Err(CheckError::Separator));
    }

    #[test]
    fn rejects_empty_sides() {
        assert_eq!(check_equation("=5"), Err(CheckError::EmptySide));
        assert_eq!(check_equation("5="), Err(CheckError::EmptySide));
        assert_eq!(check_equation("="), Err(CheckError::EmptySide));
        assert!(!is_valid_equation(""));
    }

    #[test]
    fn rejects_expression_on_right_side() {
        // The right side is a literal, not an expression
        assert_eq!(check_equation("5=3+2"), Err(CheckError::RightLiteral));
    }

    #[test]
    fn tolerance_boundary() {
        // 1/3 = 0.3333... : within 0.001 of 0.333, outside of 0.33
        assert!(is_valid_equation("1/3=0.333"));
        assert!(!is_valid_equation("1/3=0.33"));
    }

    #[test]
    fn tolerance_absorbs_float_noise() {
        assert!(is_valid_equation("0.1*3=0.3"));
        assert!(is_valid_equation("1/8=0.125"));
    }

    #[test]
    fn division_by_zero_never_validates() {
        // Unguarded IEEE division: infinity/NaN always fail the tolerance
        assert!(!is_valid_equation("5/0=5"));
        assert!(!is_valid_equation("0/0=0"));
        assert_eq!(check_equation("5/0=5"), Err(CheckError::Unbalanced));
    }

    #[test]
    fn incomplete_left_side() {
        assert_eq!(
            check_equation("5+=5"),
            Err(CheckError::Expression(ExprError::Incomplete))
        );
    }

    #[test]
    fn validation_is_idempotent() {
        for input in ["3+2=5", "10++5=15", "1/3=0.333", "5=5=5"] {
            let first = is_valid_equation(input);
            for _ in 0..3 {
                assert_eq!(is_valid_equation(input), first);
            }
        }
    }
}
