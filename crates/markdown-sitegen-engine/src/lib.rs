pub mod html;
pub mod io;
pub mod page;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use html::{HtmlNode, RenderError};
pub use io::*;
pub use page::{DEFAULT_BASE_PATH, PageError, Template, extract_title, render_page};
pub use parsing::{ConvertError, markdown_to_html, markdown_to_html_tree};
