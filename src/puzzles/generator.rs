//! Exhaustive pool generation
//!
//! Enumerates every valid equation of a given width: for each placement of
//! `=`, every left-side string over the expression alphabet is tokenized,
//! evaluated, and kept when its value prints as an integer literal of
//! exactly the remaining width. The per-split index space is swept in
//! parallel with rayon.
//!
//! Decimal right-hand literals are deliberately outside the generated
//! universe; decimal targets belong to curated lists.

use crate::core::Equation;
use crate::eval::{TOLERANCE, tokenize};
use rayon::prelude::*;

/// Characters that may appear left of `=`
const EXPR_ALPHABET: &[u8] = b"0123456789+-*/";

const RADIX: u64 = EXPR_ALPHABET.len() as u64;

/// The `(left_len, right_len)` splits of a puzzle width
///
/// `=` may sit anywhere that leaves at least one character on each side.
#[must_use]
pub fn splits(width: usize) -> Vec<(usize, usize)> {
    if width < 3 {
        return Vec::new();
    }
    (1..=width - 2)
        .map(|left_len| (left_len, width - 1 - left_len))
        .collect()
}

/// Number of candidate left-side strings for one split
#[must_use]
pub fn split_space(left_len: usize) -> u64 {
    RADIX.pow(left_len as u32)
}

/// Total number of candidate strings examined for a width
#[must_use]
pub fn search_space(width: usize) -> u64 {
    splits(width)
        .iter()
        .map(|&(left_len, _)| split_space(left_len))
        .sum()
}

/// Decode the `index`-th left-side string of a given length
fn nth_expression(mut index: u64, len: usize) -> String {
    let mut bytes = vec![0u8; len];
    for slot in bytes.iter_mut().rev() {
        *slot = EXPR_ALPHABET[(index % RADIX) as usize];
        index /= RADIX;
    }
    String::from_utf8(bytes).expect("expression alphabet is ASCII")
}

/// Turn one candidate left side into an equation, if it makes one
fn candidate_equation(left: &str, right_len: usize) -> Option<Equation> {
    let stream = tokenize(left).ok()?;
    let value = stream.evaluate();

    if !value.is_finite() {
        return None;
    }

    // The right side is an integer literal; the value must print as one
    let rounded = value.round();
    if (value - rounded).abs() >= TOLERANCE {
        return None;
    }

    let literal = format!("{}", rounded as i64);
    if literal.len() != right_len {
        return None;
    }

    Equation::new(format!("{left}={literal}")).ok()
}

/// Enumerate all valid equations for one `=` placement
///
/// Parallel over the whole index space of the split.
#[must_use]
pub fn enumerate_split(left_len: usize, right_len: usize) -> Vec<Equation> {
    (0..split_space(left_len))
        .into_par_iter()
        .filter_map(|index| {
            let left = nth_expression(index, left_len);
            candidate_equation(&left, right_len)
        })
        .collect()
}

/// Enumerate every valid equation of a width
///
/// # Examples
/// ```
/// use numble::puzzles::generator::generate_pool;
///
/// let pool = generate_pool(5);
/// assert!(pool.iter().any(|e| e.text() == "1+2=3"));
/// ```
#[must_use]
pub fn generate_pool(width: usize) -> Vec<Equation> {
    splits(width)
        .into_iter()
        .flat_map(|(left_len, right_len)| enumerate_split(left_len, right_len))
        .collect()
}
