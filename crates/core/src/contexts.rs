//! Template contexts: which objects each Liquid template can see.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::GenerateError;
use crate::naming::{template_context_name, to_type_name};
use crate::schema::ObjectEntry;
use crate::ts::utils::is_valid_type_name;
use crate::ts::{TsProp, TsType, TsTypeDef, TypeDefKind};

/// Template name to the names of the objects in scope there.
pub type TemplateContexts = BTreeMap<String, BTreeSet<String>>;

/// Collect the objects scoped to each template, then add every global object
/// to every template that was seen.
pub fn template_contexts(objects: &[ObjectEntry]) -> TemplateContexts {
    let scoped = objects
        .iter()
        .flat_map(|object| {
            object
                .access
                .iter()
                .flat_map(|access| access.template.iter().flatten())
                .map(move |template| (template.clone(), object.name.clone()))
        })
        .fold(TemplateContexts::new(), |mut contexts, (template, object)| {
            contexts.entry(template).or_default().insert(object);
            contexts
        });

    let globals: BTreeSet<String> = objects
        .iter()
        .filter(|object| object.is_global())
        .map(|object| object.name.clone())
        .collect();

    scoped
        .into_iter()
        .map(|(template, objects)| (template, objects.union(&globals).cloned().collect()))
        .collect()
}

/// One `<Template>Context` interface per template, in template order.
pub fn render_template_contexts(
    contexts: &TemplateContexts,
) -> Result<Vec<TsTypeDef>, GenerateError> {
    contexts
        .iter()
        .map(|(template, objects)| {
            let type_name = template_context_name(template);
            if !is_valid_type_name(&type_name) {
                return Err(GenerateError::InvalidContextName {
                    template: template.clone(),
                    type_name,
                });
            }
            let properties = objects
                .iter()
                .map(|object| TsProp {
                    name: object.clone(),
                    ty: TsType::named(to_type_name(object)),
                    optional: false,
                    doc: None,
                })
                .collect();
            Ok(TsTypeDef {
                name: type_name,
                doc: Some(format!("Objects available in the `{template}` template.")),
                exported: true,
                kind: TypeDefKind::Interface { properties },
            })
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::ts::Emit;
    use serde_json::json;

    fn objects(value: serde_json::Value) -> Vec<ObjectEntry> {
        serde_json::from_value(value).unwrap()
    }

    fn names(set: &BTreeSet<String>) -> Vec<&str> {
        set.iter().map(String::as_str).collect()
    }

    #[test]
    fn scoped_objects_and_globals() {
        let objs = objects(json!([
            {"name": "product", "access": {"global": false, "template": ["product", "collection"]}},
            {"name": "collection", "access": {"global": false, "template": ["collection"]}},
            {"name": "shop", "access": {"global": true, "template": []}},
            {"name": "settings"},
            {"name": "customer", "access": {"global": false, "template": []}}
        ]));
        let contexts = template_contexts(&objs);
        assert_eq!(contexts.keys().collect::<Vec<_>>(), ["collection", "product"]);
        assert_eq!(
            names(&contexts["collection"]),
            ["collection", "product", "settings", "shop"]
        );
        assert_eq!(names(&contexts["product"]), ["product", "settings", "shop"]);
    }

    #[test]
    fn globals_alone_create_no_templates() {
        let objs = objects(json!([
            {"name": "shop"},
            {"name": "request", "access": {"global": true}}
        ]));
        assert!(template_contexts(&objs).is_empty());
    }

    #[test]
    fn global_with_templates_is_listed_once() {
        let objs = objects(json!([
            {"name": "shop", "access": {"global": true, "template": ["cart"]}}
        ]));
        assert_eq!(names(&template_contexts(&objs)["cart"]), ["shop"]);
    }

    #[test]
    fn renders_context_interfaces() {
        let objs = objects(json!([
            {"name": "customer", "access": {"global": false, "template": ["customers/account"]}},
            {"name": "shop"}
        ]));
        let defs = render_template_contexts(&template_contexts(&objs)).unwrap();
        assert_eq!(defs.len(), 1);
        assert_eq!(
            defs[0].emit(),
            "/** Objects available in the `customers/account` template. */\nexport interface CustomersAccountContext {\n  customer: Customer;\n  shop: Shop;\n}\n"
        );
    }

    #[test]
    fn rejects_unusable_template_name() {
        let objs = objects(json!([
            {"name": "x", "access": {"template": ["a b"]}}
        ]));
        let err = render_template_contexts(&template_contexts(&objs)).unwrap_err();
        assert!(matches!(err, GenerateError::InvalidContextName { .. }));
    }
}
