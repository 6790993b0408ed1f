//! Common utilities for TypeScript code generation.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Words that cannot name a declared type.
pub static TS_RESERVED_TYPE_NAMES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "any",
        "boolean",
        "break",
        "case",
        "catch",
        "class",
        "const",
        "continue",
        "debugger",
        "default",
        "delete",
        "do",
        "else",
        "enum",
        "export",
        "extends",
        "false",
        "finally",
        "for",
        "function",
        "if",
        "import",
        "in",
        "instanceof",
        "never",
        "new",
        "null",
        "number",
        "object",
        "return",
        "string",
        "super",
        "switch",
        "symbol",
        "this",
        "throw",
        "true",
        "try",
        "typeof",
        "undefined",
        "unknown",
        "var",
        "void",
        "while",
        "with",
    ]
    .into_iter()
    .collect()
});

/// Check if a property key must be quoted.
///
/// Returns true if the name:
/// - Is empty
/// - Doesn't start with a letter, underscore, or dollar sign
/// - Contains characters other than alphanumeric, underscore, or dollar sign
pub fn needs_bracket_notation(name: &str) -> bool {
    name.is_empty()
        || !name
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        || !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Escape a string for use in JavaScript/TypeScript string literals.
/// Escapes backslashes, double quotes and line breaks.
pub fn escape_js_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}

/// Quote a string if needed for use as a property key.
pub fn quote_if_needed(name: &str) -> String {
    if needs_bracket_notation(name) {
        format!("\"{}\"", escape_js_string(name))
    } else {
        name.to_string()
    }
}

/// Whether `name` can be declared as an interface or type alias.
pub fn is_valid_type_name(name: &str) -> bool {
    !needs_bracket_notation(name) && !TS_RESERVED_TYPE_NAMES.contains(name)
}
