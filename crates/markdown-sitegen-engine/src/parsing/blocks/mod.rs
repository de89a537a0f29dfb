//! # Block Parsing
//!
//! Splits a document into blank-line separated blocks and classifies each.
//!
//! ## Modules
//!
//! - **`types`**: `BlockType` and the borrowed `Block`
//! - **`kinds`**: per-block syntax markers (Heading, CodeFence, BlockQuote, lists)
//! - **`classify`**: `markdown_to_blocks()`, `classify_block()`, `parse_blocks()`
//!
//! ## Key Invariants
//!
//! - Blocks are trimmed and never empty
//! - Blocks keep document order
//! - A block that matches no rule is a paragraph

pub mod classify;
pub mod kinds;
pub mod types;

pub use classify::{classify_block, markdown_to_blocks, parse_blocks};
pub use types::{Block, BlockType};
