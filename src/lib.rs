#![forbid(unsafe_code)]
#![warn(clippy::alloc_instead_of_core)]
#![warn(clippy::std_instead_of_core)]

pub mod error;
pub mod eval;

pub use error::EvalError;
pub use eval::lexer::{Op, Token};

/// Evaluate an arithmetic expression string to a finite number.
///
/// The input may contain digits, decimal points, `+ - * /`, parentheses and
/// whitespace; anything else is rejected before any parsing happens, so
/// untrusted text never reaches the evaluation logic. Pure and stateless:
/// safe to call concurrently from any number of threads.
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
    eval::eval_expression(expression)
}
