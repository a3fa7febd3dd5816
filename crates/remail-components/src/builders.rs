//! Typed constructors for the email primitives.
//!
//! Each builder exposes exactly the fields its component recognizes, plus
//! `child` for nesting and `prop` for forwarding anything else unchanged.
//! `build` runs the normalization pass and produces the delegated
//! [`Element`].
//!
//! # Example
//!
//! ```
//! use remail_components::{Button, Heading};
//!
//! let button = Button::new()
//!     .href("https://x.com")
//!     .text("Go")
//!     .build()?;
//! assert_eq!(button.tag, "Button");
//!
//! let heading = Heading::new()
//!     .as_("h1")
//!     .child("Hello")
//!     .build()?;
//! assert_eq!(heading.tag, "Heading");
//! # Ok::<(), remail_components::NormalizeError>(())
//! ```

use remail_core::{Element, Node, PropValue, PropertyBag};

use crate::kind::ComponentKind;
use crate::normalize::{construct, NormalizeError};

/// Root document wrapper.
#[derive(Debug, Default)]
pub struct Html {
    props: PropertyBag,
    children: Vec<Node>,
}

impl Html {
    pub fn new() -> Self {
        Self::default()
    }

    /// Document language, e.g. `"en"`.
    pub fn lang(mut self, value: impl Into<PropValue>) -> Self {
        self.props.insert("lang".to_string(), value.into());
        self
    }

    /// Text direction, `"ltr"` or `"rtl"`.
    pub fn dir(mut self, value: impl Into<PropValue>) -> Self {
        self.props.insert("dir".to_string(), value.into());
        self
    }

    /// Append a child node.
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Forward a property untouched.
    pub fn prop(mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props.insert(name.into(), value.into());
        self
    }

    pub fn build(self) -> Result<Element, NormalizeError> {
        construct(ComponentKind::Html, self.children, self.props)
    }
}

/// Document head wrapper. Carries only its tag; no normalization rules.
#[derive(Debug, Default)]
pub struct Head {
    props: PropertyBag,
    children: Vec<Node>,
}

impl Head {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn prop(mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props.insert(name.into(), value.into());
        self
    }

    pub fn build(self) -> Result<Element, NormalizeError> {
        construct(ComponentKind::Head, self.children, self.props)
    }
}

/// Call-to-action button.
///
/// `href` is required; construction fails without it. `target` defaults to
/// `"_blank"`. When [`text`](Button::text) is set it becomes the sole
/// child, replacing anything added with [`child`](Button::child).
#[derive(Debug, Default)]
pub struct Button {
    props: PropertyBag,
    children: Vec<Node>,
}

impl Button {
    pub fn new() -> Self {
        Self::default()
    }

    /// Destination URL (required).
    pub fn href(mut self, value: impl Into<PropValue>) -> Self {
        self.props.insert("href".to_string(), value.into());
        self
    }

    /// Link target, defaults to `"_blank"`.
    pub fn target(mut self, value: impl Into<PropValue>) -> Self {
        self.props.insert("target".to_string(), value.into());
        self
    }

    /// Shorthand label; supersedes children.
    pub fn text(mut self, value: impl Into<PropValue>) -> Self {
        self.props.insert("text".to_string(), value.into());
        self
    }

    /// Inline style string.
    pub fn style(mut self, value: impl Into<PropValue>) -> Self {
        self.props.insert("style".to_string(), value.into());
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn prop(mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props.insert(name.into(), value.into());
        self
    }

    pub fn build(self) -> Result<Element, NormalizeError> {
        construct(ComponentKind::Button, self.children, self.props)
    }
}

/// Hyperlink.
///
/// `href` defaults to the placeholder anchor `"#"` and `target` to
/// `"_blank"`. [`text`](Link::text) supersedes children, as on [`Button`].
#[derive(Debug, Default)]
pub struct Link {
    props: PropertyBag,
    children: Vec<Node>,
}

impl Link {
    pub fn new() -> Self {
        Self::default()
    }

    /// Destination URL, defaults to `"#"`.
    pub fn href(mut self, value: impl Into<PropValue>) -> Self {
        self.props.insert("href".to_string(), value.into());
        self
    }

    /// Link target, defaults to `"_blank"`.
    pub fn target(mut self, value: impl Into<PropValue>) -> Self {
        self.props.insert("target".to_string(), value.into());
        self
    }

    /// Shorthand label; supersedes children.
    pub fn text(mut self, value: impl Into<PropValue>) -> Self {
        self.props.insert("text".to_string(), value.into());
        self
    }

    pub fn style(mut self, value: impl Into<PropValue>) -> Self {
        self.props.insert("style".to_string(), value.into());
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn prop(mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props.insert(name.into(), value.into());
        self
    }

    pub fn build(self) -> Result<Element, NormalizeError> {
        construct(ComponentKind::Link, self.children, self.props)
    }
}

/// Paragraph of body text.
#[derive(Debug, Default)]
pub struct Text {
    props: PropertyBag,
    children: Vec<Node>,
}

impl Text {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn style(mut self, value: impl Into<PropValue>) -> Self {
        self.props.insert("style".to_string(), value.into());
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn prop(mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props.insert(name.into(), value.into());
        self
    }

    pub fn build(self) -> Result<Element, NormalizeError> {
        construct(ComponentKind::Text, self.children, self.props)
    }
}

/// Embedded image. Emits the `Img` tag.
#[derive(Debug, Default)]
pub struct Image {
    props: PropertyBag,
    children: Vec<Node>,
}

impl Image {
    pub fn new() -> Self {
        Self::default()
    }

    /// Image source URL.
    pub fn src(mut self, value: impl Into<PropValue>) -> Self {
        self.props.insert("src".to_string(), value.into());
        self
    }

    /// Alternative text.
    pub fn alt(mut self, value: impl Into<PropValue>) -> Self {
        self.props.insert("alt".to_string(), value.into());
        self
    }

    pub fn width(mut self, value: impl Into<PropValue>) -> Self {
        self.props.insert("width".to_string(), value.into());
        self
    }

    pub fn height(mut self, value: impl Into<PropValue>) -> Self {
        self.props.insert("height".to_string(), value.into());
        self
    }

    pub fn style(mut self, value: impl Into<PropValue>) -> Self {
        self.props.insert("style".to_string(), value.into());
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn prop(mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props.insert(name.into(), value.into());
        self
    }

    pub fn build(self) -> Result<Element, NormalizeError> {
        construct(ComponentKind::Image, self.children, self.props)
    }
}

/// Centered layout block.
#[derive(Debug, Default)]
pub struct Container {
    props: PropertyBag,
    children: Vec<Node>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn style(mut self, value: impl Into<PropValue>) -> Self {
        self.props.insert("style".to_string(), value.into());
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn prop(mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props.insert(name.into(), value.into());
        self
    }

    pub fn build(self) -> Result<Element, NormalizeError> {
        construct(ComponentKind::Container, self.children, self.props)
    }
}

/// Horizontal rule.
#[derive(Debug, Default)]
pub struct Hr {
    props: PropertyBag,
    children: Vec<Node>,
}

impl Hr {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn style(mut self, value: impl Into<PropValue>) -> Self {
        self.props.insert("style".to_string(), value.into());
        self
    }

    pub fn prop(mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props.insert(name.into(), value.into());
        self
    }

    pub fn build(self) -> Result<Element, NormalizeError> {
        construct(ComponentKind::Hr, self.children, self.props)
    }
}

/// Section heading.
///
/// The heading level is set with [`as_`](Heading::as_), spelled with a
/// trailing underscore on the host side and emitted as the canonical `as`
/// property. Margin shorthands mirror the external component's `m`/`mx`/
/// `my`/`mt`/`mr`/`mb`/`ml` props.
#[derive(Debug, Default)]
pub struct Heading {
    props: PropertyBag,
    children: Vec<Node>,
}

impl Heading {
    pub fn new() -> Self {
        Self::default()
    }

    /// Heading level, e.g. `"h1"`. Emitted as the `as` property.
    pub fn as_(mut self, value: impl Into<PropValue>) -> Self {
        self.props.insert("as_".to_string(), value.into());
        self
    }

    /// Shorthand content; supersedes children.
    pub fn text(mut self, value: impl Into<PropValue>) -> Self {
        self.props.insert("text".to_string(), value.into());
        self
    }

    /// Margin on all sides.
    pub fn m(mut self, value: impl Into<PropValue>) -> Self {
        self.props.insert("m".to_string(), value.into());
        self
    }

    /// Horizontal margin.
    pub fn mx(mut self, value: impl Into<PropValue>) -> Self {
        self.props.insert("mx".to_string(), value.into());
        self
    }

    /// Vertical margin.
    pub fn my(mut self, value: impl Into<PropValue>) -> Self {
        self.props.insert("my".to_string(), value.into());
        self
    }

    pub fn mt(mut self, value: impl Into<PropValue>) -> Self {
        self.props.insert("mt".to_string(), value.into());
        self
    }

    pub fn mr(mut self, value: impl Into<PropValue>) -> Self {
        self.props.insert("mr".to_string(), value.into());
        self
    }

    pub fn mb(mut self, value: impl Into<PropValue>) -> Self {
        self.props.insert("mb".to_string(), value.into());
        self
    }

    pub fn ml(mut self, value: impl Into<PropValue>) -> Self {
        self.props.insert("ml".to_string(), value.into());
        self
    }

    pub fn style(mut self, value: impl Into<PropValue>) -> Self {
        self.props.insert("style".to_string(), value.into());
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn prop(mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props.insert(name.into(), value.into());
        self
    }

    pub fn build(self) -> Result<Element, NormalizeError> {
        construct(ComponentKind::Heading, self.children, self.props)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::LIBRARY;
    use pretty_assertions::assert_eq;

    #[test]
    fn button_builder_end_to_end() {
        let element = Button::new()
            .href("https://x.com")
            .text("Go")
            .build()
            .unwrap();

        assert_eq!(element.tag, "Button");
        assert_eq!(element.library, LIBRARY);
        assert_eq!(
            element.props.get("href"),
            Some(&PropValue::from("https://x.com"))
        );
        assert_eq!(
            element.props.get("target"),
            Some(&PropValue::from("_blank"))
        );
        assert_eq!(element.children, vec![Node::from("Go")]);
    }

    #[test]
    fn button_builder_without_href_fails() {
        let result = Button::new().text("Go").build();

        assert!(matches!(
            result,
            Err(NormalizeError::MissingRequiredProperty { .. })
        ));
    }

    #[test]
    fn heading_builder_renames_level() {
        let element = Heading::new().as_("h1").child("Hello").build().unwrap();

        assert_eq!(element.tag, "Heading");
        assert_eq!(element.props.get("as"), Some(&PropValue::from("h1")));
        assert!(!element.props.contains_key("as_"));
        assert_eq!(element.children, vec![Node::from("Hello")]);
    }

    #[test]
    fn link_text_supersedes_children() {
        let element = Link::new()
            .href("https://example.com")
            .child("dropped")
            .text("Click me")
            .build()
            .unwrap();

        assert_eq!(element.children, vec![Node::from("Click me")]);
    }

    #[test]
    fn image_builder_emits_img() {
        let element = Image::new()
            .src("https://cdn.example.com/logo.png")
            .alt("logo")
            .width("120")
            .height("40")
            .build()
            .unwrap();

        assert_eq!(element.tag, "Img");
        assert_eq!(element.props.get("alt"), Some(&PropValue::from("logo")));
    }

    #[test]
    fn builders_nest_into_a_document() {
        let document = Html::new()
            .lang("en")
            .dir("ltr")
            .child(Head::new().build().unwrap())
            .child(
                Container::new()
                    .style("width: 600px")
                    .child(Heading::new().as_("h1").text("Welcome").build().unwrap())
                    .child(Hr::new().build().unwrap())
                    .child(
                        Button::new()
                            .href("https://x.com")
                            .text("Go")
                            .build()
                            .unwrap(),
                    )
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap();

        assert_eq!(document.tag, "Html");
        assert_eq!(document.children.len(), 2);

        let Node::Element(container) = &document.children[1] else {
            panic!("expected container element");
        };
        assert_eq!(container.tag, "Container");
        assert_eq!(container.children.len(), 3);
    }

    #[test]
    fn prop_forwards_unrecognized_fields() {
        let element = Text::new()
            .style("color: #333")
            .prop("data-testid", "body")
            .child("hello")
            .build()
            .unwrap();

        assert_eq!(
            element.props.get("data-testid"),
            Some(&PropValue::from("body"))
        );
    }

    #[test]
    fn dynamic_props_reach_the_descriptor() {
        let element = Link::new()
            .href(PropValue::expr("state.url"))
            .text("Open")
            .build()
            .unwrap();

        let descriptor = element.descriptor();
        assert_eq!(
            descriptor["props"]["href"],
            serde_json::json!({"kind": "expression", "value": "state.url"})
        );
    }
}
