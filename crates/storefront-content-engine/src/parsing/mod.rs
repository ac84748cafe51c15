pub mod attrs;
pub mod blocks;
pub mod headings;
pub mod shortcodes;
pub mod snapshot;
pub mod span;

#[cfg(test)]
mod tests;

pub use blocks::{ContentBlock, ParseOptions, parse_content, parse_content_with, reconstruct};
pub use headings::{HeadingEntry, inject_heading_ids, slugify, table_of_contents};
pub use shortcodes::{ContentReferences, Shortcode, ShortcodeKind, extract_references, extract_shortcodes};
pub use span::Span;
