//! # Content Block Parsing
//!
//! Splits HTML into an ordered sequence of literal HTML blocks and shortcode
//! blocks.
//!
//! ## Modules
//!
//! - **`types`**: `ContentBlock` and `ParseOptions`
//! - **`builder`**: `BlockBuilder`, which walks position-ordered shortcodes
//!   and flushes the literal text between them
//!
//! ## Key Invariants
//!
//! - Every character outside a shortcode appears in exactly one HTML block,
//!   unmodified, except whitespace-only gaps, which are dropped unless
//!   `keep_whitespace_gaps` is set
//! - Shortcode blocks skip exactly the span the extractor matched, so
//!   non-canonical spellings (`[PRODUCT:x]`, `[product:x,default]`) are
//!   never mis-measured
//! - Input without shortcodes comes back as a single HTML block

pub mod builder;
pub mod types;

pub use builder::BlockBuilder;
pub use types::{ContentBlock, ParseOptions};

use crate::parsing::shortcodes::extract_shortcodes;

/// Parses `html` into blocks with the default options.
pub fn parse_content(html: &str) -> Vec<ContentBlock> {
    parse_content_with(html, ParseOptions::default())
}

/// Parses `html` into blocks.
///
/// Empty input yields no blocks.
pub fn parse_content_with(html: &str, options: ParseOptions) -> Vec<ContentBlock> {
    if html.is_empty() {
        return vec![];
    }

    let shortcodes = extract_shortcodes(html);
    if shortcodes.is_empty() {
        return vec![ContentBlock::html(html)];
    }

    let mut builder = BlockBuilder::new(html, options);
    for sc in shortcodes {
        builder.push(sc);
    }
    builder.finish()
}

/// Concatenates the source text of every block, in order.
///
/// Equals the parsed input whenever no whitespace-only gap was dropped.
pub fn reconstruct(blocks: &[ContentBlock]) -> String {
    blocks.iter().map(ContentBlock::source_text).collect()
}
