/// An HTML page template with `{{ Title }}` and `{{ Content }}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
}

impl Template {
    pub const TITLE_PLACEHOLDER: &'static str = "{{ Title }}";
    pub const CONTENT_PLACEHOLDER: &'static str = "{{ Content }}";

    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Replaces every occurrence of both placeholders.
    ///
    /// The title is substituted first, so a `{{ Content }}` token inside the
    /// title is still filled, but nothing in `content` is ever re-scanned.
    pub fn fill(&self, title: &str, content: &str) -> String {
        self.source
            .replace(Self::TITLE_PLACEHOLDER, title)
            .replace(Self::CONTENT_PLACEHOLDER, content)
    }
}

impl From<String> for Template {
    fn from(source: String) -> Self {
        Self::new(source)
    }
}

impl From<&str> for Template {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}
