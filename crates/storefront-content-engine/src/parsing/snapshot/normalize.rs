use std::{collections::BTreeMap, fmt::Write as _};

use serde::Serialize;

use crate::parsing::{blocks::ContentBlock, shortcodes::Shortcode};

/// Snapshot of parsed content for testing with `insta`.
#[derive(Serialize)]
pub struct Snap {
    pub blocks: Vec<BlockSnap>,
}

/// Snapshot of a single block.
#[derive(Serialize)]
pub struct BlockSnap {
    /// "Html", "Product", "Products" or "Comparison".
    pub kind: String,
    /// Preview of the block's source text (truncated for readability).
    pub text: String,
    /// Parsed fields by name (e.g. "slug", "variant", "limit").
    pub parts: BTreeMap<String, String>,
}

/// Extracts text, truncating to `max` characters with "..." suffix if needed.
pub fn preview(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &s[..cut]),
        None => s.to_string(),
    }
}

/// Converts parsed blocks into a serializable snapshot.
pub fn normalize(blocks: &[ContentBlock]) -> Snap {
    let blocks = blocks
        .iter()
        .map(|b| {
            let mut parts = BTreeMap::new();
            let kind = match b {
                ContentBlock::Html { .. } => "Html",
                ContentBlock::Shortcode { shortcode, .. } => match shortcode {
                    Shortcode::Product(p) => {
                        parts.insert("slug".into(), p.slug.clone());
                        parts.insert("variant".into(), p.variant.as_str().to_string());
                        "Product"
                    }
                    Shortcode::Products(p) => {
                        parts.insert("category".into(), p.category_slug.clone());
                        parts.insert("limit".into(), p.limit.to_string());
                        "Products"
                    }
                    Shortcode::Comparison(c) => {
                        parts.insert("slugs".into(), c.slugs.join(","));
                        "Comparison"
                    }
                },
            };
            BlockSnap {
                kind: kind.to_string(),
                text: preview(b.source_text(), 60),
                parts,
            }
        })
        .collect();

    Snap { blocks }
}

impl Snap {
    /// One line per block, parts indented below it. Newlines in text are
    /// shown as `\n`.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for b in &self.blocks {
            let _ = writeln!(out, "{}: {}", b.kind, b.text.replace('\n', "\\n"));
            for (k, v) in &b.parts {
                let _ = writeln!(out, "  {k} = {v}");
            }
        }
        out
    }
}
