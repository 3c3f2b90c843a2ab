//! Naming helpers for TypeScript output.

use std::borrow::Cow;

/// Words that cannot be used as parameter names in TypeScript declarations.
const RESERVED_WORDS: &[&str] = &[
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete",
    "do", "else", "enum", "export", "extends", "false", "finally", "for", "function", "if",
    "import", "in", "instanceof", "new", "null", "return", "super", "switch", "this", "throw",
    "true", "try", "typeof", "var", "void", "while", "with", "implements", "interface", "let",
    "package", "private", "protected", "public", "static", "yield", "arguments", "eval",
];

pub fn is_reserved_word(s: &str) -> bool {
    RESERVED_WORDS.contains(&s)
}

/// Whether `s` can be written as a bare identifier in TypeScript.
///
/// # Examples
/// ```
/// use bikeshed_core::utils::is_identifier;
/// assert!(is_identifier("fooBar"));
/// assert!(is_identifier("$x"));
/// assert!(!is_identifier("foo-bar"));
/// assert!(!is_identifier("1st"));
/// ```
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_' || first == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Property key for an interface member: bare when possible, quoted otherwise.
pub fn property_name(s: &str) -> Cow<'_, str> {
    if is_identifier(s) {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(quote(s))
    }
}

/// Parameter name, with `_` appended when the IDL name collides with a reserved word.
///
/// WebIDL identifiers may carry a leading `_` escape, which is dropped first.
pub fn parameter_name(s: &str) -> String {
    let s = s.strip_prefix('_').unwrap_or(s);
    let mut name: String = s
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '$' { c } else { '_' })
        .collect();
    if is_reserved_word(&name) {
        name.push('_');
    } else if !is_identifier(&name) {
        name.insert(0, '_');
    }
    name
}

/// Double-quoted string literal.
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
