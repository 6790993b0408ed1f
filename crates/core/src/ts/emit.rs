//! TypeScript code emission via the Emit trait.
//!
//! Each IR node implements `Emit`; emission is purely mechanical string
//! building. Declarations come out indented with two spaces per level so the
//! text is readable even when no formatter runs afterwards.

use super::types::{
    Marker, TsLiteral, TsModule, TsPrimitive, TsProp, TsType, TsTypeDef, TypeDefKind,
};
use super::utils::{escape_js_string, quote_if_needed};
use crate::comment::doc_comment;

/// Trait for emitting TypeScript code from IR nodes.
pub trait Emit {
    /// Convert the IR node to its TypeScript string representation.
    fn emit(&self) -> String;
}

// =============================================================================
// Types
// =============================================================================

impl Emit for TsPrimitive {
    fn emit(&self) -> String {
        match self {
            TsPrimitive::String => "string".to_string(),
            TsPrimitive::Number => "number".to_string(),
            TsPrimitive::Boolean => "boolean".to_string(),
        }
    }
}

impl Emit for TsLiteral {
    fn emit(&self) -> String {
        match self {
            TsLiteral::String(s) => format!("\"{}\"", escape_js_string(s)),
            TsLiteral::Number(n) => n.clone(),
        }
    }
}

impl Emit for Marker {
    fn emit(&self) -> String {
        self.type_name().to_string()
    }
}

impl Emit for TsType {
    fn emit(&self) -> String {
        match self {
            TsType::Primitive(p) => p.emit(),
            TsType::Array(inner) => {
                let inner_str = inner.emit();
                // Wrap unions in parentheses
                if matches!(**inner, TsType::Union(_)) {
                    format!("({inner_str})[]")
                } else {
                    format!("{inner_str}[]")
                }
            }
            TsType::Union(types) => types.iter().map(Emit::emit).collect::<Vec<_>>().join(" | "),
            TsType::Literal(lit) => lit.emit(),
            TsType::Ref(name) => name.clone(),
            TsType::Marker(marker) => marker.emit(),
        }
    }
}

impl Emit for TsProp {
    fn emit(&self) -> String {
        let key = quote_if_needed(&self.name);
        let opt = if self.optional { "?" } else { "" };
        format!("{key}{opt}: {};", self.ty.emit())
    }
}

// =============================================================================
// Type Definitions
// =============================================================================

/// Prefix every non-empty line of `text` with `prefix`.
fn indent_lines(text: &str, prefix: &str) -> String {
    let mut output = String::with_capacity(text.len());
    for line in text.lines() {
        if !line.is_empty() {
            output.push_str(prefix);
            output.push_str(line);
        }
        output.push('\n');
    }
    output
}

fn emit_doc(doc: Option<&str>, prefix: &str) -> String {
    match doc.and_then(doc_comment) {
        Some(comment) => indent_lines(&comment, prefix),
        None => String::new(),
    }
}

impl Emit for TsTypeDef {
    fn emit(&self) -> String {
        let mut output = emit_doc(self.doc.as_deref(), "");
        let export = if self.exported { "export " } else { "" };
        match &self.kind {
            TypeDefKind::Interface { properties } => {
                if properties.is_empty() {
                    output.push_str(&format!("{export}interface {} {{}}\n", self.name));
                    return output;
                }
                output.push_str(&format!("{export}interface {} {{\n", self.name));
                for prop in properties {
                    output.push_str(&emit_doc(prop.doc.as_deref(), "  "));
                    output.push_str(&format!("  {}\n", prop.emit()));
                }
                output.push_str("}\n");
            }
            TypeDefKind::TypeAlias { ty } => {
                output.push_str(&format!("{export}type {} = {};\n", self.name, ty.emit()));
            }
        }
        output
    }
}

// =============================================================================
// Module
// =============================================================================

impl Emit for TsModule {
    fn emit(&self) -> String {
        let mut output = String::new();

        for type_def in &self.preamble {
            output.push_str(&type_def.emit());
        }

        for type_def in &self.types {
            if !output.is_empty() {
                output.push('\n');
            }
            output.push_str(&type_def.emit());
        }

        output
    }
}

// =============================================================================
// Tests
// =============================================================================
