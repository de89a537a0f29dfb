use thiserror::Error;

use crate::html::HtmlNode;

use super::types::{InlineSpan, SpanKind};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpanError {
    #[error("{kind} span has no url")]
    MissingUrl { kind: SpanKind },
}

/// Converts one inline span into one HTML leaf.
///
/// | kind   | tag    | value | attributes       |
/// |--------|--------|-------|------------------|
/// | Plain  | none   | text  |                  |
/// | Bold   | `b`    | text  |                  |
/// | Italic | `i`    | text  |                  |
/// | Code   | `code` | text  |                  |
/// | Link   | `a`    | text  | `href`           |
/// | Image  | `img`  | `""`  | `src`, then `alt`|
pub fn span_to_html_leaf(span: &InlineSpan) -> Result<HtmlNode, SpanError> {
    let text = span.text.as_str();
    let leaf = match span.kind {
        SpanKind::Plain => HtmlNode::text(text),
        SpanKind::Bold => HtmlNode::leaf(Some("b"), text),
        SpanKind::Italic => HtmlNode::leaf(Some("i"), text),
        SpanKind::Code => HtmlNode::leaf(Some("code"), text),
        SpanKind::Link => HtmlNode::leaf(Some("a"), text).with_attribute("href", url_of(span)?),
        SpanKind::Image => HtmlNode::leaf(Some("img"), "")
            .with_attribute("src", url_of(span)?)
            .with_attribute("alt", text),
    };
    Ok(leaf)
}

/// Converts a sequence of spans, stopping at the first invalid one.
pub fn spans_to_html_leaves(spans: &[InlineSpan]) -> Result<Vec<HtmlNode>, SpanError> {
    spans.iter().map(span_to_html_leaf).collect()
}

fn url_of(span: &InlineSpan) -> Result<&str, SpanError> {
    span.url
        .as_deref()
        .ok_or(SpanError::MissingUrl { kind: span.kind })
}
