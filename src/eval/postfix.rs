use super::lexer::Token;
use crate::error::EvalError;

/// Reorder an infix token sequence into Reverse Polish Notation.
///
/// Classic shunting-yard: numbers go straight to the output queue, and an
/// incoming operator first pops every stacked operator whose precedence is
/// greater than *or equal to* its own. The `>=` is what makes all four
/// operators left-associative; with `>` instead, same-precedence chains
/// like `8 - 4 - 2` would silently evaluate right-to-left.
///
/// Pure reordering - no numeric evaluation happens here.
pub(crate) fn to_postfix(tokens: &[Token]) -> Result<Vec<Token>, EvalError> {
    let mut output: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Token> = Vec::new();

    for &token in tokens {
        match token {
            Token::Number(_) => output.push(token),
            Token::Op(op) => {
                while let Some(&top) = ops.last() {
                    match top {
                        Token::Op(stacked) if stacked.precedence() >= op.precedence() => {
                            ops.pop();
                            output.push(top);
                        }
                        _ => break,
                    }
                }
                ops.push(token);
            }
            Token::LeftParen => ops.push(token),
            Token::RightParen => loop {
                match ops.pop() {
                    // The '(' is discarded, never emitted to output
                    Some(Token::LeftParen) => break,
                    Some(op @ Token::Op(_)) => output.push(op),
                    // Balanced-paren validation makes this unreachable
                    _ => {
                        return Err(EvalError::EvaluationFailed(
                            "Unmatched ')' in validated input".to_string(),
                        ))
                    }
                }
            },
        }
    }

    while let Some(top) = ops.pop() {
        match top {
            Token::Op(_) => output.push(top),
            _ => {
                return Err(EvalError::EvaluationFailed(
                    "Unmatched '(' in validated input".to_string(),
                ))
            }
        }
    }

    Ok(output)
}
