pub mod linking;
pub mod parsing;
pub mod pipeline;
pub mod resolve;

// Re-export key types for easier usage
pub use linking::{
    AUTO_LINK_CLASS, AutoLinkOptions, LinkType, LinkableItem, auto_link, count_auto_links, remove_auto_links,
};
pub use parsing::{
    ContentBlock, ContentReferences, HeadingEntry, ParseOptions, Shortcode, ShortcodeKind, Span,
    extract_references, extract_shortcodes, inject_heading_ids, parse_content, parse_content_with, reconstruct,
    slugify, table_of_contents,
};
pub use pipeline::{ContentPipeline, PipelineOptions, ProcessedContent};
pub use resolve::{Catalog, ResolvedBlock, resolve_blocks};
