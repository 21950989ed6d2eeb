//! Target list loading utilities
//!
//! Provides functions to load target equations from files or from the
//! embedded list. Entries must be true equations; anything else is skipped.

use crate::core::Equation;
use crate::eval::is_valid_equation;
use std::fs;
use std::io;
use std::path::Path;

/// Parse one candidate target line
///
/// Accepts only strings over the puzzle alphabet that are arithmetically
/// true equations.
#[must_use]
fn parse_target(line: &str) -> Option<Equation> {
    if !is_valid_equation(line) {
        return None;
    }
    Equation::new(line).ok()
}

/// Load target equations from a file
///
/// Returns a vector of valid targets, skipping blank lines and any entry
/// that is not a true equation.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use numble::puzzles::loader::load_from_file;
///
/// let targets = load_from_file("my_targets.txt").unwrap();
/// println!("Loaded {} targets", targets.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Equation>> {
    let content = fs::read_to_string(path)?;

    let targets = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                parse_target(trimmed)
            }
        })
        .collect();

    Ok(targets)
}

/// Convert an embedded string slice to an Equation vector
///
/// # Examples
/// ```
/// use numble::puzzles::TARGETS;
/// use numble::puzzles::loader::equations_from_slice;
///
/// let targets = equations_from_slice(TARGETS);
/// assert_eq!(targets.len(), TARGETS.len());
/// ```
#[must_use]
pub fn equations_from_slice(slice: &[&str]) -> Vec<Equation> {
    slice.iter().filter_map(|&s| parse_target(s)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equations_from_slice_converts_valid_targets() {
        let input = &["3+2=5", "10+5=15", "2*3+4=10"];
        let targets = equations_from_slice(input);

        assert_eq!(targets.len(), 3);
        assert_eq!(targets[0].text(), "3+2=5");
        assert_eq!(targets[2].text(), "2*3+4=10");
    }

    #[test]
    fn equations_from_slice_skips_false_and_malformed() {
        let input = &["3+2=5", "3+2=6", "10++5=15", "crane", "5=5=5"];
        let targets = equations_from_slice(input);

        // Only the true equation survives
        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].text(), "3+2=5");
    }

    #[test]
    fn equations_from_slice_empty() {
        let input: &[&str] = &[];
        let targets = equations_from_slice(input);
        assert!(targets.is_empty());
    }

    #[test]
    fn load_from_embedded_targets() {
        use crate::puzzles::TARGETS;

        let targets = equations_from_slice(TARGETS);
        assert_eq!(targets.len(), TARGETS.len());
    }
}
