//! Identifier conversion from documentation names to type names.

/// Convert a snake_case identifier to a PascalCase type name.
///
/// Splits on `_`, uppercases the first character of each segment and leaves
/// the rest of the segment untouched. Empty segments (from `__`, or a leading
/// or trailing `_`) contribute nothing, so `_foo__bar_` becomes `FooBar`.
/// Callers that need a declarable name must still validate the result, since
/// an input made only of underscores yields an empty string.
pub fn to_type_name(identifier: &str) -> String {
    identifier.split('_').map(capitalize_first).collect()
}

/// Capitalize the first letter of a string.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Type name of the context interface for a template path such as
/// `customers/account.liquid`.
///
/// Prepends `_` when the template starts with a digit (`404`).
pub fn template_context_name(template: &str) -> String {
    let stem = template.replace(".liquid", "").replace(['/', '.', '-'], "_");
    let name = format!("{}Context", to_type_name(&stem));
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{name}")
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_to_pascal() {
        assert_eq!(to_type_name("color"), "Color");
        assert_eq!(to_type_name("foo_bar"), "FooBar");
        assert_eq!(to_type_name("all_products"), "AllProducts");
        assert_eq!(to_type_name("external_video"), "ExternalVideo");
    }

    #[test]
    fn interior_case_is_kept() {
        assert_eq!(to_type_name("product_SKU"), "ProductSKU");
        assert_eq!(to_type_name("Product"), "Product");
        assert_eq!(to_type_name("pageInfo"), "PageInfo");
    }

    #[test]
    fn empty_segments_are_skipped() {
        assert_eq!(to_type_name("foo__bar"), "FooBar");
        assert_eq!(to_type_name("_foo"), "Foo");
        assert_eq!(to_type_name("foo_"), "Foo");
        assert_eq!(to_type_name("_"), "");
        assert_eq!(to_type_name(""), "");
    }

    #[test]
    fn non_ascii_first_character() {
        assert_eq!(to_type_name("élan_vital"), "ÉlanVital");
    }

    #[test]
    fn capitalize() {
        assert_eq!(capitalize_first("foo"), "Foo");
        assert_eq!(capitalize_first(""), "");
        assert_eq!(capitalize_first("ABC"), "ABC");
    }

    #[test]
    fn template_context_names() {
        assert_eq!(template_context_name("product"), "ProductContext");
        assert_eq!(template_context_name("customers/account.liquid"), "CustomersAccountContext");
        assert_eq!(template_context_name("gift_card.liquid"), "GiftCardContext");
        assert_eq!(template_context_name("product.alternate"), "ProductAlternateContext");
        assert_eq!(template_context_name("404"), "_404Context");
    }
}
