//! # Inline Parsing
//!
//! Splits the text of one block into typed spans and converts each span
//! into an HTML leaf.
//!
//! ## Modules
//!
//! - **`types`**: `InlineSpan` and the closed `SpanKind` enum
//! - **`kinds`**: delimiter and link/image pattern constants
//! - **`parser`**: `text_to_inline_spans()` and the individual split passes
//! - **`convert`**: `span_to_html_leaf()` mapping spans to `HtmlNode` leaves
//!
//! ## Precedence
//!
//! Images, then links, then `**`, `_`, `` ` ``. No pass recurses into the
//! text of a span produced by an earlier pass, so `[**x**](url)` yields a
//! link whose text is the literal `**x**`.

pub mod convert;
pub mod kinds;
pub mod parser;
pub mod types;

pub use convert::{SpanError, span_to_html_leaf, spans_to_html_leaves};
pub use parser::text_to_inline_spans;
pub use types::{InlineSpan, SpanKind};
