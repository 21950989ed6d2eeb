//! Equation parsing and validation
//!
//! The arithmetic core of the game: a tokenizer for flat `+ - * /`
//! expressions, a two-pass evaluator, and the fail-closed equation check the
//! game runs on every submitted row.

mod evaluator;
mod tokenizer;
mod validate;

pub use tokenizer::{ExprError, Operator, TokenStream, tokenize};
pub use validate::{CheckError, TOLERANCE, check_equation, is_valid_equation};
