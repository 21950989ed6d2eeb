//! Core domain types for the equation puzzle
//!
//! This module contains the fundamental domain types with zero external
//! dependencies beyond a fast hash map. All types here are pure and testable.

mod equation;
mod feedback;

pub use equation::{Equation, EquationError, INPUT_ALPHABET, is_input_char, is_puzzle_char};
pub use feedback::{Feedback, FeedbackMark};
