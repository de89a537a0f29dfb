//! Block syntax markers, each owned by the block type it introduces.

use std::sync::OnceLock;

use regex::Regex;

/// `#` .. `######` followed by a space.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: usize = 6;

    /// Heading level of `block`, or `None` if it does not open with 1-6
    /// `#` followed by a space. Seven or more `#` is not a heading.
    pub fn level(block: &str) -> Option<u8> {
        let hashes = block.chars().take_while(|c| *c == Self::MARKER).count();
        if !(1..=Self::MAX_LEVEL).contains(&hashes) {
            return None;
        }
        // '#' is one byte, so `hashes` is also the byte offset.
        if block[hashes..].starts_with(' ') {
            u8::try_from(hashes).ok()
        } else {
            None
        }
    }
}

/// A block fenced by triple backticks at both ends.
pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static str = "```";

    pub fn is_fenced(block: &str) -> bool {
        block.len() >= 2 * Self::FENCE.len()
            && block.starts_with(Self::FENCE)
            && block.ends_with(Self::FENCE)
    }
}

pub struct BlockQuote;

impl BlockQuote {
    pub const PREFIX: char = '>';
    /// Prefix removed from quote lines, marker plus one space.
    pub const STRIP: &'static str = "> ";
}

pub struct UnorderedList;

impl UnorderedList {
    pub const MARKER: &'static str = "- ";
}

pub struct OrderedList;

impl OrderedList {
    /// Marker expected on the zero-based `index`th line: `1. `, `2. `, ...
    pub fn marker(index: usize) -> String {
        format!("{}. ", index + 1)
    }

    /// Matches a single leading digit marker, as stripped from list items.
    pub fn item_regex() -> &'static Regex {
        static ITEM_REGEX: OnceLock<Regex> = OnceLock::new();
        ITEM_REGEX.get_or_init(|| Regex::new(r"^\d\. ").expect("Invalid ordered list regex"))
    }
}
