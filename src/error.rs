/// Errors surfaced by the expression pipeline.
///
/// The `#[error]` messages are fixed literal phrases; UI callers match on
/// the variant or on the phrase, never on free-form text.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvalError {
    #[error("Invalid characters in expression")]
    InvalidCharacters,

    #[error("Empty expression")]
    EmptyExpression,

    #[error("Unbalanced parentheses")]
    UnbalancedParentheses,

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Result is not a finite number")]
    NonFiniteResult,

    /// Internal invariant violation (empty token stream, malformed postfix
    /// sequence). A programming-error signal rather than a user-input
    /// problem; validation should have caught the input earlier.
    #[error("{0}")]
    EvaluationFailed(String),
}
