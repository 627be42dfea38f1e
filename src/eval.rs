pub mod lexer;
pub mod normalize;
pub mod postfix;
pub mod rpn;
pub mod validate;

use crate::error::EvalError;

/// Run the full pipeline on a raw expression string.
///
/// Strictly linear, each stage consuming the previous stage's output:
/// validate → normalize → tokenize → infix-to-postfix → postfix evaluation.
/// Any stage failure short-circuits the rest and surfaces to the caller.
pub(crate) fn eval_expression(expression: &str) -> Result<f64, EvalError> {
    let trimmed = validate::validate(expression)?;
    let normalized = normalize::normalize(trimmed);
    log::trace!("normalized {:?} to {:?}", trimmed, normalized);

    let tokens = lexer::tokenize(&normalized)?;
    let rpn = postfix::to_postfix(&tokens)?;
    log::debug!(
        "{} tokens, {} after infix-to-postfix conversion",
        tokens.len(),
        rpn.len()
    );

    rpn::eval_postfix(&rpn)
}
