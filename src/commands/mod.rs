//! Command implementations

pub mod check;
pub mod generate;
pub mod score;
pub mod simple;

pub use check::{CheckReport, run_check};
pub use generate::{GenerateStats, run_generate};
pub use score::{ScoreReport, run_score};
pub use simple::run_simple;
