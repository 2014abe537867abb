use once_cell::sync::Lazy;
use regex::Regex;

static PLAIN_IDENTIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("identifier pattern is valid")
});

/// Render an identifier the way it must appear in query text.
///
/// Plain identifiers are returned as-is. Anything else is wrapped in
/// backticks, with control characters, backslashes and backticks escaped.
pub fn escape_identifier(identifier: &str) -> String {
    if PLAIN_IDENTIFIER.is_match(identifier) {
        return identifier.to_string();
    }

    let mut escaped = String::with_capacity(identifier.len() + 2);
    escaped.push('`');
    for ch in identifier.chars() {
        match ch {
            '\u{8}' => escaped.push_str("\\b"),
            '\u{c}' => escaped.push_str("\\f"),
            '\r' => escaped.push_str("\\r"),
            '\n' => escaped.push_str("\\n"),
            '\t' => escaped.push_str("\\t"),
            '\0' => escaped.push_str("\\0"),
            '\u{7}' => escaped.push_str("\\a"),
            '\u{b}' => escaped.push_str("\\v"),
            '\\' => escaped.push_str("\\\\"),
            '`' => escaped.push_str("\\`"),
            c => escaped.push(c),
        }
    }
    escaped.push('`');
    escaped
}
