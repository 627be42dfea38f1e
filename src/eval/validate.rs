use crate::error::EvalError;
use regex::Regex;
use std::sync::OnceLock;

static FORBIDDEN_CHAR_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_forbidden_char_regex() -> &'static Regex {
    // Anything outside the arithmetic whitelist: digits, '.', the four
    // operators, parentheses, ASCII whitespace. A single hit anywhere in
    // the input rejects the whole expression. The whitespace set is spelled
    // out instead of `\s` because `\s` is Unicode-aware here while the
    // lexer only skips ASCII whitespace; the two must agree exactly so a
    // Unicode space (e.g. U+00A0) is rejected up front, not mid-pipeline.
    FORBIDDEN_CHAR_REGEX.get_or_init(|| Regex::new(r"[^0-9.+\-*/() \t\r\n\f]").unwrap())
}

/// Classify raw input before any parsing work happens.
///
/// Returns the trimmed expression on success. Rejects, in order: empty or
/// whitespace-only input, characters outside the arithmetic whitelist
/// (letters, semicolons, and anything else injection-relevant), and
/// mismatched parenthesis counts. Classifies only; nothing is stripped or
/// rewritten here.
pub(crate) fn validate(raw: &str) -> Result<&str, EvalError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(EvalError::EmptyExpression);
    }

    if get_forbidden_char_regex().is_match(trimmed) {
        return Err(EvalError::InvalidCharacters);
    }

    let open = trimmed.bytes().filter(|&b| b == b'(').count();
    let close = trimmed.bytes().filter(|&b| b == b')').count();
    if open != close {
        return Err(EvalError::UnbalancedParentheses);
    }

    Ok(trimmed)
}
