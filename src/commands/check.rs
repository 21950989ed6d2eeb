//! Equation checking command
//!
//! Diagnoses a single equation string: the boolean verdict plus the internal
//! failure reason the game itself never surfaces.

use crate::eval::{CheckError, check_equation, tokenize};

/// Diagnosis of one equation string
pub struct CheckReport {
    pub input: String,
    pub valid: bool,
    /// Evaluated left side, when it tokenizes at all
    pub left_value: Option<f64>,
    /// Why the equation was rejected
    pub failure: Option<CheckError>,
}

/// Check an equation and gather the diagnosis
#[must_use]
pub fn run_check(input: &str) -> CheckReport {
    let verdict = check_equation(input);

    // Evaluate the left side independently so the report can show what the
    // expression is actually worth, even for unbalanced equations
    let left_value = input
        .split_once('=')
        .and_then(|(left, _)| tokenize(left).ok())
        .map(|stream| stream.evaluate());

    CheckReport {
        input: input.to_string(),
        valid: verdict.is_ok(),
        left_value,
        failure: verdict.err(),
    }
}
