//! Attribute preservation shared by all block handlers.

use serde_json::Value;

use crate::html::Element;
use crate::types::Attrs;

/// Attributes carried over from an element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreservedAttributes {
    /// `style` as-is, `class` renamed to `className`, every other attribute unchanged.
    pub attrs: Attrs,
    /// `class="..."` notes for each preserved class attribute.
    pub style_classes: Vec<String>,
}

/// Copy an element's attributes into a block attribute bag.
///
/// `style` comes first, then `className` (from `class`), then the remaining
/// attributes in source order. Nothing is dropped.
#[must_use]
pub fn preserve_attributes(element: &Element) -> PreservedAttributes {
    let mut attrs = Attrs::new();
    let mut style_classes = Vec::new();

    if let Some(style) = element.attribute("style") {
        attrs.insert("style".to_string(), Value::from(style));
    }

    if let Some(class) = element.attribute("class") {
        attrs.insert("className".to_string(), Value::from(class));
        style_classes.push(format!("class=\"{class}\""));
    }

    for (key, value) in &element.attrs {
        if key.eq_ignore_ascii_case("style") || key.eq_ignore_ascii_case("class") {
            continue;
        }
        attrs.insert(key.clone(), Value::from(value.as_str()));
    }

    PreservedAttributes {
        attrs,
        style_classes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_style_and_class_are_special_cased() {
        let element = Element::new("p")
            .with_attr("id", "intro")
            .with_attr("class", "lead big")
            .with_attr("style", "color: red;");
        let preserved = preserve_attributes(&element);

        assert_eq!(
            Value::Object(preserved.attrs.clone()),
            json!({
                "style": "color: red;",
                "className": "lead big",
                "id": "intro"
            })
        );
        let keys: Vec<_> = preserved.attrs.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["style", "className", "id"]);
        assert_eq!(preserved.style_classes, vec![r#"class="lead big""#.to_string()]);
    }

    #[test]
    fn test_other_attributes_copied_unchanged() {
        let element = Element::new("a")
            .with_attr("href", "/x")
            .with_attr("data-id", "7");
        let preserved = preserve_attributes(&element);

        assert_eq!(preserved.attrs.get("href"), Some(&json!("/x")));
        assert_eq!(preserved.attrs.get("data-id"), Some(&json!("7")));
        assert!(preserved.style_classes.is_empty());
    }

    #[test]
    fn test_no_attributes() {
        let preserved = preserve_attributes(&Element::new("p"));
        assert!(preserved.attrs.is_empty());
        assert!(preserved.style_classes.is_empty());
    }

    #[test]
    fn test_empty_class_is_still_preserved() {
        let element = Element::new("p").with_attr("class", "");
        let preserved = preserve_attributes(&element);
        assert_eq!(preserved.attrs.get("className"), Some(&json!("")));
        assert!(preserved.attrs.get("class").is_none());
    }
}
