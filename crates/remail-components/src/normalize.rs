//! Property normalization.
//!
//! One table-driven pass applies each kind's fixed construction-time rules:
//! required-field check, rename to canonical names, default fills, and
//! promotion of the `text` convenience property into the child list. The
//! pass is idempotent: normalizing an already-normalized bag changes
//! nothing.

use remail_core::{Element, Node, PropValue, PropertyBag};

use crate::kind::{ComponentKind, LIBRARY};

/// Errors that can occur while constructing a component.
#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    #[error("missing required property `{prop}` on <{component}>")]
    MissingRequiredProperty {
        component: &'static str,
        prop: &'static str,
    },
}

/// Construct a component instance of `kind` from children and props.
///
/// Applies the kind's normalization rules and delegates the result into an
/// [`Element`] tagged for the external library. Props outside the kind's
/// field table pass through unchanged.
///
/// When the `text` convenience property is present it becomes the sole
/// child, replacing any children passed positionally.
pub fn construct(
    kind: ComponentKind,
    children: Vec<Node>,
    mut props: PropertyBag,
) -> Result<Element, NormalizeError> {
    // Required fields first: nothing is constructed when one is absent.
    for &prop in kind.required() {
        if !props.contains_key(prop) {
            return Err(NormalizeError::MissingRequiredProperty {
                component: kind.tag(),
                prop,
            });
        }
    }

    // Canonical renames. The host-side spelling wins over any value already
    // stored under the canonical key.
    for &(from, to) in kind.renames() {
        if let Some(value) = props.remove(from) {
            props.insert(to.to_string(), value);
        }
    }

    // Defaults fill absent slots only.
    for &(name, value) in kind.defaults() {
        props
            .entry(name.to_string())
            .or_insert_with(|| PropValue::from(value));
    }

    let text = if kind.supports_text() {
        props.remove("text")
    } else {
        None
    };

    if kind == ComponentKind::Button {
        tracing::debug!(
            "creating Button with href {:?} and text {:?}",
            props.get("href"),
            text
        );
    }

    let children = match text {
        Some(value) => vec![Node::Text(value)],
        None => children,
    };

    Ok(Element::new(kind.tag(), LIBRARY, props, children))
}
