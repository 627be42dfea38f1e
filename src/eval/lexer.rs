use crate::error::EvalError;

/// One of the four binary arithmetic operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    pub(crate) fn from_byte(b: u8) -> Option<Op> {
        match b {
            b'+' => Some(Op::Add),
            b'-' => Some(Op::Sub),
            b'*' => Some(Op::Mul),
            b'/' => Some(Op::Div),
            _ => None,
        }
    }

    /// Precedence rank consulted by the infix-to-postfix conversion.
    ///
    /// Declarative data rather than control flow: '+' and '-' bind at 1,
    /// '*' and '/' at 2. Read-only, never mutated at runtime.
    pub(crate) fn precedence(self) -> u8 {
        match self {
            Op::Add | Op::Sub => 1,
            Op::Mul | Op::Div => 2,
        }
    }
}

/// Smallest classified unit of the input expression.
///
/// Immutable once created; a token sequence is built once per evaluation
/// call and discarded after use.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Token {
    Number(f64),
    Op(Op),
    LeftParen,
    RightParen,
}

pub(crate) struct Lexer<'a> {
    input: &'a [u8],
    source: &'a str,
    position: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input: input.as_bytes(),
            source: input,
            position: 0,
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, EvalError>;

    fn next(&mut self) -> Option<Self::Item> {
        // Whitespace never produces a token
        while self.position < self.input.len() && self.input[self.position].is_ascii_whitespace() {
            self.position += 1;
        }

        // End of input - normal termination
        if self.position >= self.input.len() {
            return None;
        }

        let b = self.input[self.position];

        // A run of digits and '.' accumulates into a single Number token.
        // Byte-based scanning is safe here: every whitelisted character is
        // ASCII, so no multi-byte sequences can appear after validation.
        if b.is_ascii_digit() || b == b'.' {
            let start = self.position;
            while self.position < self.input.len()
                && (self.input[self.position].is_ascii_digit() || self.input[self.position] == b'.')
            {
                self.position += 1;
            }
            let literal = &self.source[start..self.position];
            return Some(literal.parse::<f64>().map(Token::Number).map_err(|_| {
                // '.' or '1.2.3' scan as one run but are not numbers;
                // rejected here instead of parseFloat-style truncation
                EvalError::EvaluationFailed(format!("Malformed number '{}'", literal))
            }));
        }

        self.position += 1;
        if let Some(op) = Op::from_byte(b) {
            return Some(Ok(Token::Op(op)));
        }
        match b {
            b'(' => Some(Ok(Token::LeftParen)),
            b')' => Some(Ok(Token::RightParen)),
            // Validation whitelists every character before lexing, so this
            // is an internal invariant violation, not a user-input problem
            other => Some(Err(EvalError::EvaluationFailed(format!(
                "Unexpected character '{}' in validated input",
                other as char
            )))),
        }
    }
}

/// Scan a validated, normalized expression into a flat token sequence.
pub(crate) fn tokenize(s: &str) -> Result<Vec<Token>, EvalError> {
    let tokens = Lexer::new(s).collect::<Result<Vec<_>, _>>()?;
    if tokens.is_empty() {
        return Err(EvalError::EvaluationFailed(
            "No valid tokens found".to_string(),
        ));
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_simple_expression() {
        let tokens = tokenize("2 + 3 * 4").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Number(2.0),
                Token::Op(Op::Add),
                Token::Number(3.0),
                Token::Op(Op::Mul),
                Token::Number(4.0),
            ]
        );
    }

    #[test]
    fn test_tokenize_accumulates_multi_digit_and_decimal() {
        let tokens = tokenize("12.5 / 100").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Number(12.5),
                Token::Op(Op::Div),
                Token::Number(100.0),
            ]
        );
    }

    #[test]
    fn test_tokenize_parentheses() {
        let tokens = tokenize("(1)").unwrap();
        assert_eq!(
            tokens,
            vec![Token::LeftParen, Token::Number(1.0), Token::RightParen]
        );
    }

    #[test]
    fn test_tokenize_skips_whitespace() {
        assert_eq!(tokenize("2+3").unwrap(), tokenize("  2  +  3  ").unwrap());
    }

    #[test]
    fn test_tokenize_flushes_trailing_number() {
        let tokens = tokenize("1 + 23").unwrap();
        assert_eq!(tokens.last(), Some(&Token::Number(23.0)));
    }

    #[test]
    fn test_tokenize_whitespace_only_has_no_tokens() {
        // Unreachable through the pipeline (validation rejects it first),
        // but the stage guards its own precondition
        let err = tokenize("   ").unwrap_err();
        assert_eq!(
            err,
            EvalError::EvaluationFailed("No valid tokens found".to_string())
        );
    }

    #[test]
    fn test_tokenize_rejects_malformed_numbers() {
        assert!(matches!(
            tokenize("1.2.3").unwrap_err(),
            EvalError::EvaluationFailed(_)
        ));
        assert!(matches!(
            tokenize(".").unwrap_err(),
            EvalError::EvaluationFailed(_)
        ));
    }

    #[test]
    fn test_tokenize_all_operators() {
        let tokens = tokenize("1+2-3*4/5").unwrap();
        let ops: Vec<Op> = tokens
            .iter()
            .filter_map(|t| match t {
                Token::Op(op) => Some(*op),
                _ => None,
            })
            .collect();
        assert_eq!(ops, vec![Op::Add, Op::Sub, Op::Mul, Op::Div]);
    }

    #[test]
    fn test_op_precedence_table() {
        assert_eq!(Op::Add.precedence(), 1);
        assert_eq!(Op::Sub.precedence(), 1);
        assert_eq!(Op::Mul.precedence(), 2);
        assert_eq!(Op::Div.precedence(), 2);
    }
}
