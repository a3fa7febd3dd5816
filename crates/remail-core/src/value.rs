//! Property values.
//!
//! Every component property is either a fixed literal or a dynamic
//! expression the external rendering layer resolves at render time. Both
//! cases share one representation so the delegation boundary receives a
//! uniform value regardless of what the caller passed.

use serde::Serialize;

/// A property value: a literal, or a dynamic expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum PropValue {
    /// Fixed value known at construction time: `href="#"`.
    Literal(String),

    /// Expression resolved at render time: `href={state.url}`.
    Expression(String),
}

impl PropValue {
    /// Create a dynamic expression value.
    pub fn expr(source: impl Into<String>) -> Self {
        PropValue::Expression(source.into())
    }

    /// Get as a string if this is a literal value.
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            PropValue::Literal(s) => Some(s),
            PropValue::Expression(_) => None,
        }
    }

    /// Whether this value is resolved at render time.
    pub fn is_dynamic(&self) -> bool {
        matches!(self, PropValue::Expression(_))
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::Literal(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::Literal(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn wraps_literals_uniformly() {
        assert_eq!(
            PropValue::from("https://example.com"),
            PropValue::Literal("https://example.com".to_string())
        );
        assert_eq!(
            PropValue::from("_blank".to_string()),
            PropValue::Literal("_blank".to_string())
        );
    }

    #[test]
    fn distinguishes_expressions() {
        let value = PropValue::expr("state.url");

        assert!(value.is_dynamic());
        assert_eq!(value.as_literal(), None);
    }

    #[test]
    fn reads_literals_back() {
        let value = PropValue::from("#");

        assert!(!value.is_dynamic());
        assert_eq!(value.as_literal(), Some("#"));
    }

    #[test]
    fn serializes_tagged_descriptor() {
        let literal = serde_json::to_value(PropValue::from("#")).unwrap();
        let expr = serde_json::to_value(PropValue::expr("state.url")).unwrap();

        assert_eq!(
            literal,
            serde_json::json!({"kind": "literal", "value": "#"})
        );
        assert_eq!(
            expr,
            serde_json::json!({"kind": "expression", "value": "state.url"})
        );
    }
}
