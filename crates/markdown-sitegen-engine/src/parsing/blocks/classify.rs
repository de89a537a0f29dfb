use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::{Block, BlockType},
};

/// Separator between blocks. Longer newline runs leave only whitespace
/// at block edges, which trimming removes.
const BLOCK_SEPARATOR: &str = "\n\n";

/// Splits a document into trimmed, non-empty block strings in source order.
pub fn markdown_to_blocks(markdown: &str) -> Vec<&str> {
    markdown
        .split(BLOCK_SEPARATOR)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Classifies one block. Rules are checked in priority order, first match
/// wins: heading, code, quote, unordered list, ordered list, paragraph.
pub fn classify_block(block: &str) -> BlockType {
    if let Some(level) = Heading::level(block) {
        return BlockType::Heading(level);
    }
    if CodeFence::is_fenced(block) {
        return BlockType::Code;
    }

    let lines: Vec<&str> = block.split('\n').collect();
    if lines.iter().all(|line| line.starts_with(BlockQuote::PREFIX)) {
        return BlockType::Quote;
    }
    if lines
        .iter()
        .all(|line| line.starts_with(UnorderedList::MARKER))
    {
        return BlockType::UnorderedList;
    }
    if is_ordered_list(&lines) {
        return BlockType::OrderedList;
    }
    BlockType::Paragraph
}

/// Segments and classifies a whole document.
pub fn parse_blocks(markdown: &str) -> Vec<Block<'_>> {
    markdown_to_blocks(markdown)
        .into_iter()
        .map(|text| Block {
            text,
            block_type: classify_block(text),
        })
        .collect()
}

fn is_ordered_list(lines: &[&str]) -> bool {
    !lines.is_empty()
        && lines
            .iter()
            .enumerate()
            .all(|(i, line)| line.starts_with(&OrderedList::marker(i)))
}
