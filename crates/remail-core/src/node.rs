//! Component nodes.
//!
//! An [`Element`] is the constructed output of one wrapper: a tagged record
//! of normalized props and children, ready for delegation to the external
//! rendering layer. Elements are created once per construction call and
//! never mutated afterward.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::value::PropValue;

/// Mapping from property name to value.
///
/// Ordering is semantically irrelevant; a sorted map keeps the serialized
/// descriptor deterministic.
pub type PropertyBag = BTreeMap<String, PropValue>;

/// A child node: text content or a nested element.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "node", content = "value", rename_all = "lowercase")]
pub enum Node {
    /// Text content, literal or dynamic.
    Text(PropValue),

    /// A nested component instance.
    Element(Element),
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::Text(PropValue::from(value))
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::Text(PropValue::from(value))
    }
}

impl From<PropValue> for Node {
    fn from(value: PropValue) -> Self {
        Node::Text(value)
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// An immutable constructed component instance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    /// Literal markup tag the external library resolves (e.g. "Button", "Img").
    pub tag: String,

    /// External package providing runtime semantics for the tag.
    pub library: String,

    /// Normalized properties.
    pub props: PropertyBag,

    /// Child nodes.
    pub children: Vec<Node>,
}

impl Element {
    /// Create an element from already-normalized parts.
    pub fn new(
        tag: impl Into<String>,
        library: impl Into<String>,
        props: PropertyBag,
        children: Vec<Node>,
    ) -> Self {
        Self {
            tag: tag.into(),
            library: library.into(),
            props,
            children,
        }
    }

    /// The JSON descriptor handed to the external rendering layer.
    pub fn descriptor(&self) -> serde_json::Value {
        serde_json::to_value(self).expect("element descriptor cannot fail to serialize")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Element {
        let mut props = PropertyBag::new();
        props.insert("href".to_string(), PropValue::from("https://x.com"));

        Element::new(
            "Button",
            "@react-email/components",
            props,
            vec![Node::from("Go")],
        )
    }

    #[test]
    fn converts_text_children() {
        assert_eq!(
            Node::from("Hello"),
            Node::Text(PropValue::Literal("Hello".to_string()))
        );
    }

    #[test]
    fn nests_elements_as_children() {
        let child = sample();
        let node = Node::from(child.clone());

        assert_eq!(node, Node::Element(child));
    }

    #[test]
    fn descriptor_carries_tag_and_library() {
        let descriptor = sample().descriptor();

        assert_eq!(descriptor["tag"], "Button");
        assert_eq!(descriptor["library"], "@react-email/components");
        assert_eq!(
            descriptor["children"][0],
            serde_json::json!({
                "node": "text",
                "value": {"kind": "literal", "value": "Go"}
            })
        );
    }

    #[test]
    fn descriptor_is_deterministic() {
        let mut props = PropertyBag::new();
        props.insert("target".to_string(), PropValue::from("_blank"));
        props.insert("href".to_string(), PropValue::from("#"));
        let element = Element::new("Link", "@react-email/components", props, vec![]);

        let first = serde_json::to_string(&element).unwrap();
        let second = serde_json::to_string(&element.clone()).unwrap();

        assert_eq!(first, second);
        // Sorted bag keys regardless of insertion order.
        assert!(first.find("\"href\"").unwrap() < first.find("\"target\"").unwrap());
    }
}
