//! Classification of a single return-type description.
//!
//! The documentation distinguishes shapes only by which fields are set, so
//! every check lives here and callers match on [`ReturnShape`].

use crate::schema::ReturnType;

/// Kind of a literal union member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    /// Emitted as a quoted string literal.
    String,
    /// Emitted verbatim as a numeric literal.
    Number,
}

/// What a return-type description stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnShape {
    /// `type: "array"`. Carries the snake_case element name, `None` when the
    /// documentation leaves it out.
    ArrayType(Option<String>),
    /// One literal alternative of a union.
    EnumMember {
        /// Literal text, unquoted.
        literal: String,
        /// How the literal is written out.
        kind: LiteralKind,
    },
    /// A plain type with no literal narrowing. Carries the raw `type` value.
    OtherType(String),
    /// Anything else.
    Unrecognized,
}

/// Classify one description. Rules apply in order: array shape, then an
/// empty literal name, then a string or number literal.
pub fn classify(rt: &ReturnType) -> ReturnShape {
    let Some(kind) = rt.kind.as_deref().filter(|k| !k.is_empty()) else {
        return ReturnShape::Unrecognized;
    };

    if kind == "array" {
        let element = rt.array_value.as_deref().filter(|v| !v.trim().is_empty());
        return ReturnShape::ArrayType(element.map(str::to_string));
    }

    let Some(name) = rt.name_text() else {
        return ReturnShape::Unrecognized;
    };

    if name.is_empty() {
        return ReturnShape::OtherType(kind.to_string());
    }

    match kind {
        "string" => ReturnShape::EnumMember {
            literal: name,
            kind: LiteralKind::String,
        },
        "number" if is_numeric_literal(&name) => ReturnShape::EnumMember {
            literal: name,
            kind: LiteralKind::Number,
        },
        _ => ReturnShape::Unrecognized,
    }
}

/// Accepts the literal forms a TypeScript numeric literal type can take.
///
/// Plain decimals only, with an optional leading `-`. Legacy octal forms
/// such as `01` are rejected.
pub(crate) fn is_numeric_literal(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    let leading_zero = digits
        .strip_prefix('0')
        .is_some_and(|rest| rest.starts_with(|c: char| c.is_ascii_digit()));
    !digits.is_empty()
        && !leading_zero
        && digits.chars().all(|c| c.is_ascii_digit() || c == '.')
        && digits.parse::<f64>().is_ok()
}
