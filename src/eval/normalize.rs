use regex::Regex;
use std::sync::OnceLock;

static UNARY_MINUS_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_unary_minus_regex() -> &'static Regex {
    // A '-' at the very start of the expression or right after '(' is
    // unary (there is no left operand for it to bind to). Whitespace may
    // sit between the '(' and the '-'; both are captured so the rewrite
    // preserves them.
    UNARY_MINUS_REGEX.get_or_init(|| Regex::new(r"(^|\()(\s*)-").unwrap())
}

/// Rewrite unary minus into an equivalent binary form.
///
/// The tokenizer only understands binary operators, so `-5` becomes `0-5`
/// and `(-5` becomes `(0-5`. Only the two positions where a minus cannot
/// be binary are rewritten; a '-' after a number or ')' keeps its binary
/// meaning, and a '-' directly after another operator (`5 * -3`) is left
/// alone and rejected downstream as a malformed expression.
///
/// Idempotent: after the rewrite the character in front of the '-' is a
/// '0', which matches neither rewrite position.
pub(crate) fn normalize(s: &str) -> String {
    get_unary_minus_regex()
        .replace_all(s, "${1}${2}0-")
        .into_owned()
}
