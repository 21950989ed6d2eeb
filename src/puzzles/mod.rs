//! Target equations for the puzzle
//!
//! Provides the embedded curated target list, file loading, and exhaustive
//! pool generation.

mod embedded;
pub mod generator;
pub mod loader;

pub use embedded::{TARGETS, TARGETS_COUNT};

/// Width of every embedded target
pub const TARGET_WIDTH: usize = 8;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::is_valid_equation;

    #[test]
    fn targets_count_matches_const() {
        assert_eq!(TARGETS.len(), TARGETS_COUNT);
    }

    #[test]
    fn targets_are_fixed_width() {
        for &target in TARGETS {
            assert_eq!(
                target.len(),
                TARGET_WIDTH,
                "target '{target}' is not {TARGET_WIDTH} characters"
            );
        }
    }

    #[test]
    fn targets_are_true_equations() {
        for &target in TARGETS {
            assert!(
                is_valid_equation(target),
                "target '{target}' is not a valid equation"
            );
        }
    }

    #[test]
    fn targets_have_no_duplicates() {
        let unique: std::collections::HashSet<_> = TARGETS.iter().collect();
        assert_eq!(unique.len(), TARGETS.len());
    }

    #[test]
    fn targets_are_typeable() {
        // Curated targets stick to the keyboard alphabet
        use crate::core::is_input_char;
        for &target in TARGETS {
            assert!(
                target.chars().all(is_input_char),
                "target '{target}' contains untypeable characters"
            );
        }
    }
}
