//! Inline syntax markers. All delimiter and pattern knowledge lives here;
//! the splitter never hardcodes `**` or `![`.

use std::sync::OnceLock;

use regex::Regex;

use super::types::SpanKind;

/// A symmetric delimiter that toggles between plain text and `kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiter {
    pub marker: &'static str,
    pub kind: SpanKind,
}

impl Delimiter {
    pub const BOLD: Delimiter = Delimiter {
        marker: "**",
        kind: SpanKind::Bold,
    };
    pub const ITALIC: Delimiter = Delimiter {
        marker: "_",
        kind: SpanKind::Italic,
    };
    pub const CODE: Delimiter = Delimiter {
        marker: "`",
        kind: SpanKind::Code,
    };

    /// Application order. `**` must run before `_` and `` ` ``.
    pub const ORDER: [Delimiter; 3] = [Self::BOLD, Self::ITALIC, Self::CODE];
}

/// `![alt](url)` and `[text](url)`, matched non-greedily without nesting.
pub struct LinkSyntax;

impl LinkSyntax {
    pub const IMAGE_PATTERN: &'static str = r"!\[(.*?)\]\((.*?)\)";
    pub const LINK_PATTERN: &'static str = r"\[(.*?)\]\((.*?)\)";

    pub fn image_regex() -> &'static Regex {
        static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
        IMAGE_REGEX.get_or_init(|| Regex::new(Self::IMAGE_PATTERN).expect("Invalid image regex"))
    }

    pub fn link_regex() -> &'static Regex {
        static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
        LINK_REGEX.get_or_init(|| Regex::new(Self::LINK_PATTERN).expect("Invalid link regex"))
    }
}
