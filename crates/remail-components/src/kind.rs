//! Component kinds and their field tables.
//!
//! Each email primitive is one variant of a closed set. A variant carries
//! the fixed metadata the normalizer consults: the emitted tag, the
//! recognized fields, the required fields, the default fills, and the
//! renames to canonical external names.

/// External package providing runtime semantics for every tag in the set.
pub const LIBRARY: &str = "@react-email/components";

/// The closed set of email-layout primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Html,
    Head,
    Button,
    Link,
    Text,
    Image,
    Container,
    Hr,
    Heading,
}

impl ComponentKind {
    /// All kinds, in declaration order.
    pub const ALL: [ComponentKind; 9] = [
        ComponentKind::Html,
        ComponentKind::Head,
        ComponentKind::Button,
        ComponentKind::Link,
        ComponentKind::Text,
        ComponentKind::Image,
        ComponentKind::Container,
        ComponentKind::Hr,
        ComponentKind::Heading,
    ];

    /// Literal markup tag emitted for this kind.
    pub fn tag(self) -> &'static str {
        match self {
            ComponentKind::Html => "Html",
            ComponentKind::Head => "Head",
            ComponentKind::Button => "Button",
            ComponentKind::Link => "Link",
            ComponentKind::Text => "Text",
            ComponentKind::Image => "Img",
            ComponentKind::Container => "Container",
            ComponentKind::Hr => "Hr",
            ComponentKind::Heading => "Heading",
        }
    }

    /// Look up a kind by its emitted tag.
    pub fn from_tag(tag: &str) -> Option<ComponentKind> {
        ComponentKind::ALL.iter().copied().find(|k| k.tag() == tag)
    }

    /// Recognized property names for this kind.
    ///
    /// Properties outside this table are forwarded to the external layer
    /// unchanged.
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            ComponentKind::Html => &["lang", "dir"],
            ComponentKind::Head => &[],
            ComponentKind::Button => &["href", "target", "text", "style"],
            ComponentKind::Link => &["href", "target", "text", "style"],
            ComponentKind::Text => &["style"],
            ComponentKind::Image => &["src", "alt", "width", "height", "style"],
            ComponentKind::Container => &["style"],
            ComponentKind::Hr => &["style"],
            ComponentKind::Heading => &[
                "as", "text", "m", "mx", "my", "mt", "mr", "mb", "ml", "style",
            ],
        }
    }

    /// Properties that must be present, checked before any other rule.
    pub fn required(self) -> &'static [&'static str] {
        match self {
            ComponentKind::Button => &["href"],
            _ => &[],
        }
    }

    /// Properties filled with a fallback when absent.
    pub fn defaults(self) -> &'static [(&'static str, &'static str)] {
        match self {
            ComponentKind::Button => &[("target", "_blank")],
            ComponentKind::Link => &[("href", "#"), ("target", "_blank")],
            _ => &[],
        }
    }

    /// Host-side property spellings moved to their canonical external name.
    pub fn renames(self) -> &'static [(&'static str, &'static str)] {
        match self {
            ComponentKind::Heading => &[("as_", "as")],
            _ => &[],
        }
    }

    /// Whether the `text` convenience property replaces children.
    pub fn supports_text(self) -> bool {
        self.fields().contains(&"text")
    }
}
