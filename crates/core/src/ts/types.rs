//! TypeScript declaration IR.
//!
//! This module defines the subset of the TypeScript type system the generator
//! emits:
//! - TsType: Types (primitives, arrays, unions, literals, references, markers)
//! - TsTypeDef: Top-level declarations (interfaces and type aliases)
//! - TsModule: A complete declaration file

/// TypeScript type representation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TsType {
    /// Primitive types: string, number, boolean
    Primitive(TsPrimitive),
    /// Array type: T[]
    Array(Box<TsType>),
    /// Union type: A | B | C
    Union(Vec<TsType>),
    /// Literal type: "foo", 42
    Literal(TsLiteral),
    /// Named type reference: "Product", "Image"
    Ref(String),
    /// Placeholder for data the schema did not clearly specify
    Marker(Marker),
}

impl TsType {
    /// Reference to a named type.
    pub fn named(name: impl Into<String>) -> Self {
        TsType::Ref(name.into())
    }

    /// Array of `inner`.
    pub fn array_of(inner: TsType) -> Self {
        TsType::Array(Box::new(inner))
    }

    /// Every marker referenced by this type, in order of appearance.
    pub fn markers(&self) -> Vec<Marker> {
        match self {
            TsType::Marker(marker) => vec![*marker],
            TsType::Array(inner) => inner.markers(),
            TsType::Union(members) => members.iter().flat_map(TsType::markers).collect(),
            TsType::Primitive(_) | TsType::Literal(_) | TsType::Ref(_) => Vec::new(),
        }
    }
}

/// TypeScript primitive types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TsPrimitive {
    /// `string`
    String,
    /// `number`
    Number,
    /// `boolean`
    Boolean,
}

impl TsPrimitive {
    /// Parse a schema type name that is one of the built-in scalar kinds.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "string" => Some(TsPrimitive::String),
            "number" => Some(TsPrimitive::Number),
            "boolean" => Some(TsPrimitive::Boolean),
            _ => None,
        }
    }
}

/// TypeScript literal values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TsLiteral {
    /// Quoted string literal, escaped on emission.
    String(String),
    /// Numeric literal, emitted verbatim.
    Number(String),
}

/// Placeholder types declared in the preamble of every generated file.
///
/// All three are aliases of `any`, but they stay distinct so a schema audit
/// can tell the gaps apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Marker {
    /// The schema documents the value as deliberately dynamic.
    Untyped,
    /// The schema omits the type, or the data describing it is malformed.
    MissingData,
    /// The schema describes a type whose shape the generator does not map.
    Unmapped,
}

impl Marker {
    /// Every marker, in preamble order.
    pub const ALL: [Marker; 3] = [Marker::Untyped, Marker::MissingData, Marker::Unmapped];

    /// Name of the declared placeholder type.
    pub fn type_name(self) -> &'static str {
        match self {
            Marker::Untyped => "Untyped",
            Marker::MissingData => "ShopifyBug",
            Marker::Unmapped => "Unimplemented",
        }
    }

    /// One-line doc comment attached to the declaration.
    pub fn doc(self) -> &'static str {
        match self {
            Marker::Untyped => "A value the documentation describes as untyped.",
            Marker::MissingData => "The documentation is missing or malformed for this value.",
            Marker::Unmapped => "The documented type has a shape this generator does not map yet.",
        }
    }
}

/// Object property definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsProp {
    /// Key as documented; quoted on emission when needed.
    pub name: String,
    /// Member type.
    pub ty: TsType,
    /// Emit `?:` instead of `:`.
    pub optional: bool,
    /// Doc text placed above the member.
    pub doc: Option<String>,
}

/// Type definition kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDefKind {
    /// interface Foo { ... }
    Interface {
        /// Members in declaration order.
        properties: Vec<TsProp>,
    },
    /// type Foo = ...
    TypeAlias {
        /// Aliased type.
        ty: TsType,
    },
}

/// Type definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsTypeDef {
    /// Declared type name.
    pub name: String,
    /// Doc text placed above the declaration.
    pub doc: Option<String>,
    /// Prefix the declaration with `export`.
    pub exported: bool,
    /// Interface or alias body.
    pub kind: TypeDefKind,
}

/// Complete TypeScript declaration file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TsModule {
    /// Non-exported declarations every other block may refer to.
    pub preamble: Vec<TsTypeDef>,
    /// Declarations in output order.
    pub types: Vec<TsTypeDef>,
}

impl TsModule {
    /// Module whose preamble declares all [`Marker`] types.
    pub fn with_markers() -> Self {
        let preamble = Marker::ALL
            .into_iter()
            .map(|marker| TsTypeDef {
                name: marker.type_name().to_string(),
                doc: Some(marker.doc().to_string()),
                exported: false,
                kind: TypeDefKind::TypeAlias {
                    ty: TsType::named("any"),
                },
            })
            .collect();
        Self {
            preamble,
            types: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_names() {
        assert_eq!(TsPrimitive::from_name("boolean"), Some(TsPrimitive::Boolean));
        assert_eq!(TsPrimitive::from_name("untyped"), None);
        assert_eq!(TsPrimitive::from_name("String"), None);
    }

    #[test]
    fn markers_in_nested_types() {
        let ty = TsType::Union(vec![
            TsType::named("Product"),
            TsType::array_of(TsType::Marker(Marker::MissingData)),
            TsType::Marker(Marker::Unmapped),
        ]);
        assert_eq!(ty.markers(), vec![Marker::MissingData, Marker::Unmapped]);
        assert!(TsType::named("Untyped").markers().is_empty());
    }

    #[test]
    fn marker_preamble() {
        let module = TsModule::with_markers();
        let names: Vec<_> = module.preamble.iter().map(|def| def.name.as_str()).collect();
        assert_eq!(names, ["Untyped", "ShopifyBug", "Unimplemented"]);
        assert!(module.preamble.iter().all(|def| !def.exported));
        assert!(module.types.is_empty());
    }
}
