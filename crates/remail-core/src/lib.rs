//! Core node and prop-value model for remail email components.
//!
//! This crate defines the data the component wrappers produce: property
//! values that are either literal or dynamic ([`PropValue`]), child nodes
//! ([`Node`]), and the constructed instance handed to the external
//! rendering layer ([`Element`]).

pub mod node;
pub mod value;

pub use node::{Element, Node, PropertyBag};
pub use value::PropValue;
