//! # Page Generation
//!
//! Turns one Markdown document into a complete HTML page: title
//! extraction, body conversion, template substitution and base-path
//! rewriting of root-relative URLs.

pub mod template;

use thiserror::Error;

use crate::parsing::{ConvertError, markdown_to_html};

pub use template::Template;

/// Base path used when none is configured; leaves URLs untouched.
pub const DEFAULT_BASE_PATH: &str = "/";

const TITLE_PREFIX: &str = "# ";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("Markdown has no title")]
    NoTitleFound,
    #[error("Failed to convert markdown: {0}")]
    Convert(#[from] ConvertError),
}

/// Title from the first line starting with `"# "`, marker removed and trimmed.
pub fn extract_title(markdown: &str) -> Result<String, PageError> {
    markdown
        .split('\n')
        .find_map(|line| line.strip_prefix(TITLE_PREFIX))
        .map(|title| title.trim().to_string())
        .ok_or(PageError::NoTitleFound)
}

/// Renders a full page for `markdown` using `template`.
///
/// Fails with [`PageError::NoTitleFound`] before any conversion work when the
/// document has no `# ` line.
pub fn render_page(
    markdown: &str,
    template: &Template,
    base_path: &str,
) -> Result<String, PageError> {
    let title = extract_title(markdown)?;
    let content = markdown_to_html(markdown)?;
    let page = template.fill(&title, &content);
    Ok(rewrite_base_path(&page, base_path))
}

/// Points root-relative `href="/` and `src="/` URLs at `base_path`.
///
/// A missing trailing `/` is added, so `/site` and `/site/` are equivalent.
pub fn rewrite_base_path(html: &str, base_path: &str) -> String {
    if base_path == DEFAULT_BASE_PATH {
        return html.to_string();
    }
    let base_path = if base_path.ends_with('/') {
        base_path.to_string()
    } else {
        format!("{base_path}/")
    };
    html.replace("href=\"/", &format!("href=\"{base_path}"))
        .replace("src=\"/", &format!("src=\"{base_path}"))
}
