//! Declarative React Email component wrappers.
//!
//! Thin wrappers mapping the email-layout primitives — Html, Head, Button,
//! Link, Text, Image, Container, Hr, Heading — onto the external
//! `@react-email/components` library. Each wrapper applies a fixed set of
//! construction-time rules (renames, default fills, a required-field check,
//! `text`-to-children promotion) and delegates the result as a tagged
//! [`Element`] the external rendering layer consumes.
//!
//! Construction is synchronous and side-effect free apart from one
//! diagnostic log; instances are immutable once built.

pub mod builders;
pub mod kind;
pub mod normalize;

pub use builders::{Button, Container, Head, Heading, Hr, Html, Image, Link, Text};
pub use kind::{ComponentKind, LIBRARY};
pub use normalize::{construct, NormalizeError};

pub use remail_core::{Element, Node, PropValue, PropertyBag};
