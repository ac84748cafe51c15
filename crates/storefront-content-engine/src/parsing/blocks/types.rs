use serde::Serialize;

use crate::parsing::shortcodes::{Shortcode, ShortcodeKind};

/// One unit of parsed content, handed to the rendering layer in order.
///
/// Blocks are built fresh for each parse and carry no identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    /// A literal, unmodified slice of the source HTML.
    Html { content: String },
    /// A directive for the renderer to expand.
    Shortcode {
        kind: ShortcodeKind,
        shortcode: Shortcode,
        /// The directive exactly as written in the source.
        source: String,
    },
}

impl ContentBlock {
    pub fn html(content: impl Into<String>) -> Self {
        ContentBlock::Html {
            content: content.into(),
        }
    }

    pub fn shortcode(shortcode: Shortcode, source: impl Into<String>) -> Self {
        ContentBlock::Shortcode {
            kind: shortcode.kind(),
            shortcode,
            source: source.into(),
        }
    }

    /// The source text this block stands for.
    pub fn source_text(&self) -> &str {
        match self {
            ContentBlock::Html { content } => content,
            ContentBlock::Shortcode { source, .. } => source,
        }
    }

    pub fn as_shortcode(&self) -> Option<&Shortcode> {
        match self {
            ContentBlock::Shortcode { shortcode, .. } => Some(shortcode),
            ContentBlock::Html { .. } => None,
        }
    }
}

/// Knobs for [`parse_content_with`](super::parse_content_with).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Emit whitespace-only literal spans instead of dropping them.
    pub keep_whitespace_gaps: bool,
}
