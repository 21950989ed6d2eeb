//! Numble
//!
//! A Wordle-style puzzle over arithmetic: guess the hidden equation in six
//! tries. Every guess must itself be a true equation; feedback marks each
//! character as correct, present elsewhere, or absent.
//!
//! # Quick Start
//!
//! ```rust
//! use numble::core::{Equation, Feedback};
//! use numble::eval::is_valid_equation;
//!
//! // Validate a guess
//! assert!(is_valid_equation("2*3+4=10"));
//!
//! // Score it against the secret
//! let target = Equation::new("10+5=15").unwrap();
//! let guess = Equation::new("15+0=10").unwrap();
//! let feedback = Feedback::score(&target, &guess);
//! println!("{feedback}");
//! ```

// Core domain types
pub mod core;

// Equation parsing and validation
pub mod eval;

// Game state machine
pub mod game;

// Target equations
pub mod puzzles;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
