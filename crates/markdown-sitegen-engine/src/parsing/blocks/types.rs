/// The structural type of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    /// Default when no other rule matches.
    Paragraph,
    /// Level 1-6.
    Heading(u8),
    /// Fenced with triple backticks.
    Code,
    /// Every line starts with `>`.
    Quote,
    /// Every line starts with `- `.
    UnorderedList,
    /// Lines numbered `1. `, `2. `, ... without gaps.
    OrderedList,
}

/// One blank-line separated block of a document, already trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    pub text: &'a str,
    pub block_type: BlockType,
}
