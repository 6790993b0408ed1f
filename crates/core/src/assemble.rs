//! Declarations for documented objects: interfaces and dictionary aliases.

use crate::classify::{ReturnShape, classify};
use crate::naming::to_type_name;
use crate::resolve::resolve_property;
use crate::schema::ObjectEntry;
use crate::ts::utils::is_valid_type_name;
use crate::ts::{Marker, TsProp, TsType, TsTypeDef, TypeDefKind};

/// A global object documented as an array of another object, such as
/// `all_products`. Requires `access.global` to be set explicitly.
pub fn is_dictionary_global(object: &ObjectEntry) -> bool {
    let explicitly_global = object
        .access
        .as_ref()
        .is_some_and(|access| access.global == Some(true));
    explicitly_global
        && object
            .return_types()
            .first()
            .is_some_and(|rt| matches!(classify(rt), ReturnShape::ArrayType(_)))
}

/// `export type AllProducts = Product[];` for a dictionary global.
pub fn render_dictionary_alias(type_name: String, object: &ObjectEntry) -> TsTypeDef {
    let element = match object.return_types().first().map(classify) {
        Some(ReturnShape::ArrayType(Some(element))) => {
            let name = to_type_name(&element);
            if is_valid_type_name(&name) {
                TsType::named(name)
            } else {
                TsType::Marker(Marker::Unmapped)
            }
        }
        _ => TsType::Marker(Marker::MissingData),
    };
    TsTypeDef {
        name: type_name,
        doc: object.doc(),
        exported: true,
        kind: TypeDefKind::TypeAlias {
            ty: TsType::array_of(element),
        },
    }
}

/// Interface with one required member per property, in input order.
pub fn assemble_interface(
    type_name: String,
    doc: Option<String>,
    properties: Vec<TsProp>,
) -> TsTypeDef {
    TsTypeDef {
        name: type_name,
        doc,
        exported: true,
        kind: TypeDefKind::Interface { properties },
    }
}

/// Resolve every property of `object` and assemble its interface.
pub fn object_interface(type_name: String, object: &ObjectEntry) -> TsTypeDef {
    let properties = object
        .properties()
        .iter()
        .map(|property| resolve_property(&object.name, property))
        .collect();
    assemble_interface(type_name, object.doc(), properties)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::ts::Emit;
    use serde_json::json;

    fn object(value: serde_json::Value) -> ObjectEntry {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn dictionary_global_detection() {
        let all_products = object(json!({
            "name": "all_products",
            "access": {"global": true, "template": []},
            "return_type": [{"type": "array", "array_value": "product", "name": ""}]
        }));
        assert!(is_dictionary_global(&all_products));

        let not_global = object(json!({
            "name": "x",
            "access": {"global": false},
            "return_type": [{"type": "array", "array_value": "product"}]
        }));
        assert!(!is_dictionary_global(&not_global));

        let implicit_global = object(json!({
            "name": "x",
            "return_type": [{"type": "array", "array_value": "product"}]
        }));
        assert!(!is_dictionary_global(&implicit_global));

        let not_array = object(json!({
            "name": "x",
            "access": {"global": true},
            "return_type": [{"type": "string", "name": ""}]
        }));
        assert!(!is_dictionary_global(&not_array));

        let no_return = object(json!({"name": "x", "access": {"global": true}, "return_type": []}));
        assert!(!is_dictionary_global(&no_return));
    }

    #[test]
    fn dictionary_alias() {
        let entry = object(json!({
            "name": "all_products",
            "summary": "All of the products on a store.",
            "access": {"global": true},
            "return_type": [{"type": "array", "array_value": "product", "name": ""}]
        }));
        let def = render_dictionary_alias("AllProducts".into(), &entry);
        assert_eq!(
            def.emit(),
            "/** All of the products on a store. */\nexport type AllProducts = Product[];\n"
        );
    }

    #[test]
    fn dictionary_alias_without_element() {
        let entry = object(json!({
            "name": "pages",
            "access": {"global": true},
            "return_type": [{"type": "array"}]
        }));
        let def = render_dictionary_alias("Pages".into(), &entry);
        assert_eq!(def.emit(), "export type Pages = ShopifyBug[];\n");
    }

    #[test]
    fn interface_from_object() {
        let entry = object(json!({
            "name": "color",
            "summary": "A color.",
            "properties": [
                {"name": "red", "summary": "Red value.", "return_type": [{"type": "number", "name": ""}]},
                {"name": "variants", "return_type": [{"type": "array", "array_value": "product_variant"}]}
            ]
        }));
        let def = object_interface("Color".into(), &entry);
        assert_eq!(
            def.emit(),
            "/** A color. */\nexport interface Color {\n  /** Red value. */\n  red: number;\n  variants: ProductVariant[];\n}\n"
        );
    }

    #[test]
    fn interface_without_properties() {
        let entry = object(json!({"name": "content_for_header", "properties": []}));
        let def = object_interface("ContentForHeader".into(), &entry);
        assert_eq!(def.emit(), "export interface ContentForHeader {}\n");
    }

    #[test]
    fn interface_keeps_duplicate_property_names() {
        let def = assemble_interface(
            "Dup".into(),
            None,
            vec![
                TsProp {
                    name: "a".into(),
                    ty: TsType::named("A"),
                    optional: false,
                    doc: None,
                },
                TsProp {
                    name: "a".into(),
                    ty: TsType::named("B"),
                    optional: false,
                    doc: None,
                },
            ],
        );
        assert_eq!(def.emit(), "export interface Dup {\n  a: A;\n  a: B;\n}\n");
    }
}
