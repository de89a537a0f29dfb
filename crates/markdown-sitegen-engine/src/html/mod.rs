//! # HTML Node Model
//!
//! A small owned tree that renders to an HTML string.
//!
//! ## Shapes
//!
//! - **Leaf**: optional tag, a value, attributes. Without a tag the value is
//!   emitted bare (plain text).
//! - **Parent**: a tag, ordered children, attributes.
//!
//! Both shapes keep the "required" parts as `Option` so that a node built
//! by hand with a missing piece is still representable and is reported by
//! [`HtmlNode::render`] rather than by a panic.
//!
//! Values and attributes are written verbatim, so inline HTML and entity
//! references in the source pass straight through.

pub mod node;

pub use node::{Attributes, HtmlNode, RenderError};
