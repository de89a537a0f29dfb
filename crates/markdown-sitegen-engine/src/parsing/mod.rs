//! # Markdown to HTML
//!
//! raw text → [`blocks`] (segment + classify) → [`assemble`] (per-type
//! transform, [`inline`] tokenize + convert) → [`HtmlNode`] tree → render.
//!
//! Every function here is pure; nothing logs or touches the filesystem.

pub mod assemble;
pub mod blocks;
pub mod inline;

use thiserror::Error;

use crate::html::{HtmlNode, RenderError};

pub use assemble::{block_to_html_node, markdown_to_html_tree};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Span(#[from] inline::SpanError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Converts a Markdown document into an HTML string wrapped in a `div`.
pub fn markdown_to_html(markdown: &str) -> Result<String, ConvertError> {
    let tree: HtmlNode = markdown_to_html_tree(markdown)?;
    Ok(tree.render()?)
}
