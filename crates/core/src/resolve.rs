//! Property-type resolution.
//!
//! Turns the return-type list of a property into a [`TsType`]. Gaps in the
//! documentation degrade to marker types for that one property only.

use tracing::{debug, warn};

use crate::classify::{LiteralKind, ReturnShape, classify, is_numeric_literal};
use crate::naming::to_type_name;
use crate::schema::{PropertyEntry, ReturnType};
use crate::ts::utils::{is_valid_type_name, needs_bracket_notation};
use crate::ts::{Marker, TsLiteral, TsPrimitive, TsProp, TsType};

/// Resolve one property of `object`. The property is always required.
pub fn resolve_property(object: &str, property: &PropertyEntry) -> TsProp {
    TsProp {
        name: property.name.clone(),
        ty: resolve_type(object, property),
        optional: false,
        doc: property.doc(),
    }
}

/// Type of a property, by number of return-type descriptions.
pub fn resolve_type(object: &str, property: &PropertyEntry) -> TsType {
    match property.return_types() {
        [] => {
            debug!(object, property = %property.name, "no return type documented");
            TsType::Marker(Marker::MissingData)
        }
        [single] => resolve_single(object, &property.name, single),
        many => TsType::Union(
            many.iter()
                .map(|rt| resolve_union_member(object, &property.name, rt))
                .collect(),
        ),
    }
}

fn resolve_single(object: &str, property: &str, rt: &ReturnType) -> TsType {
    match classify(rt) {
        ReturnShape::ArrayType(Some(element)) => {
            TsType::array_of(reference(object, property, &element))
        }
        ReturnShape::ArrayType(None) => missing_element(object, property),
        ReturnShape::OtherType(kind) => other_type(object, property, &kind),
        ReturnShape::EnumMember { .. } | ReturnShape::Unrecognized => {
            unmapped(object, property, rt)
        }
    }
}

fn resolve_union_member(object: &str, property: &str, rt: &ReturnType) -> TsType {
    match classify(rt) {
        ReturnShape::EnumMember {
            literal,
            kind: LiteralKind::String,
        } => TsType::Literal(TsLiteral::String(literal)),
        ReturnShape::EnumMember {
            literal,
            kind: LiteralKind::Number,
        } => TsType::Literal(TsLiteral::Number(literal)),
        ReturnShape::ArrayType(Some(element)) => match TsPrimitive::from_name(&element) {
            Some(primitive) => TsType::array_of(TsType::Primitive(primitive)),
            None => TsType::array_of(reference(object, property, &element)),
        },
        ReturnShape::ArrayType(None) => missing_element(object, property),
        ReturnShape::OtherType(kind) => other_type(object, property, &kind),
        ReturnShape::Unrecognized => match rt.name_text() {
            Some(token) if is_bare_token(&token) => TsType::named(token),
            _ => unmapped(object, property, rt),
        },
    }
}

/// A plain type: built-in scalars verbatim, everything else a reference.
fn other_type(object: &str, property: &str, kind: &str) -> TsType {
    if let Some(primitive) = TsPrimitive::from_name(kind) {
        return TsType::Primitive(primitive);
    }
    if kind == "untyped" {
        return TsType::Marker(Marker::Untyped);
    }
    reference(object, property, kind)
}

fn reference(object: &str, property: &str, snake: &str) -> TsType {
    let name = to_type_name(snake);
    if is_valid_type_name(&name) {
        TsType::named(name)
    } else {
        warn!(object, property, type_name = %snake, "documented type does not form a type name");
        TsType::Marker(Marker::Unmapped)
    }
}

fn missing_element(object: &str, property: &str) -> TsType {
    debug!(object, property, "array element type missing");
    TsType::array_of(TsType::Marker(Marker::MissingData))
}

fn unmapped(object: &str, property: &str, rt: &ReturnType) -> TsType {
    warn!(
        object,
        property,
        kind = ?rt.kind,
        name = ?rt.name,
        "unrecognized return type shape"
    );
    TsType::Marker(Marker::Unmapped)
}

/// Whether a literal name can stand in a union as written.
fn is_bare_token(token: &str) -> bool {
    !needs_bracket_notation(token) || is_numeric_literal(token)
}
