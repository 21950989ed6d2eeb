//! Game state machine
//!
//! One round of the puzzle: typed input, submission rules, attempt history,
//! win/loss transitions.

mod round;

pub use round::{Attempt, DEFAULT_ATTEMPTS, Round, RoundState, SubmitError};
