use super::lexer::{Op, Token};
use crate::error::EvalError;

fn malformed() -> EvalError {
    EvalError::EvaluationFailed("Malformed expression".to_string())
}

/// Evaluate an RPN token sequence with a single operand stack.
///
/// Operands pop as `b` then `a` (the stack is LIFO and postfix order
/// preserves left-to-right operand order), so `a <op> b` matches the infix
/// reading. Division by zero is a hard stop; no Infinity or NaN ever
/// reaches the caller.
pub(crate) fn eval_postfix(tokens: &[Token]) -> Result<f64, EvalError> {
    let mut stack: Vec<f64> = Vec::new();

    for &token in tokens {
        match token {
            Token::Number(n) => stack.push(n),
            Token::Op(op) => {
                let b = stack.pop().ok_or_else(malformed)?;
                let a = stack.pop().ok_or_else(malformed)?;
                let value = match op {
                    Op::Add => a + b,
                    Op::Sub => a - b,
                    Op::Mul => a * b,
                    Op::Div => {
                        if b == 0.0 {
                            return Err(EvalError::DivisionByZero);
                        }
                        a / b
                    }
                };
                stack.push(value);
            }
            // Parentheses never survive the infix-to-postfix conversion
            Token::LeftParen | Token::RightParen => return Err(malformed()),
        }
    }

    // A well-formed postfix sequence leaves exactly one value
    let result = match (stack.pop(), stack.is_empty()) {
        (Some(value), true) => value,
        _ => return Err(malformed()),
    };

    if !result.is_finite() {
        return Err(EvalError::NonFiniteResult);
    }
    Ok(result)
}
