//! # Shortcode Extraction
//!
//! Recognizes the bracket directives embedded in article and product HTML:
//!
//! - `[product:<slug>]` / `[product:<slug>,<variant>]`
//! - `[products:<category>]` / `[products:<category>,<limit>]`
//! - `[comparison:<slug>,<slug>,...]`
//!
//! Keywords match case-insensitively, slugs verbatim. Each kind is scanned
//! independently over the whole input and the union is ordered by start
//! offset. Two matches at the same offset are ordered by [`ShortcodeKind`]
//! (product, products, comparison).
//!
//! Malformed bracket text never errors; it simply does not match and stays
//! literal content.
//!
//! Patterns are immutable compiled statics; matching keeps no cursor state
//! between calls.

pub mod kinds;

use std::collections::BTreeSet;

use serde::Serialize;

use crate::parsing::span::Span;
pub use kinds::{ComparisonShortcode, ProductShortcode, ProductVariant, ProductsShortcode};

/// Discriminant of a [`Shortcode`]. The derived order is the tie-break order
/// for shortcodes starting at the same offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShortcodeKind {
    Product,
    Products,
    Comparison,
}

/// A recognized shortcode directive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shortcode {
    Product(ProductShortcode),
    Products(ProductsShortcode),
    Comparison(ComparisonShortcode),
}

impl Shortcode {
    pub fn kind(&self) -> ShortcodeKind {
        match self {
            Shortcode::Product(_) => ShortcodeKind::Product,
            Shortcode::Products(_) => ShortcodeKind::Products,
            Shortcode::Comparison(_) => ShortcodeKind::Comparison,
        }
    }

    /// Exact span of the directive in the HTML it was extracted from.
    pub fn span(&self) -> Span {
        match self {
            Shortcode::Product(sc) => sc.span,
            Shortcode::Products(sc) => sc.span,
            Shortcode::Comparison(sc) => sc.span,
        }
    }

    /// Byte offset of the opening bracket.
    pub fn position(&self) -> usize {
        self.span().start
    }

    /// Canonical text of the directive, the exact inverse of the grammar for
    /// canonically written input.
    pub fn to_canonical(&self) -> String {
        match self {
            Shortcode::Product(sc) => sc.to_canonical(),
            Shortcode::Products(sc) => sc.to_canonical(),
            Shortcode::Comparison(sc) => sc.to_canonical(),
        }
    }
}

/// Extracts every shortcode in `html`, ordered by position.
pub fn extract_shortcodes(html: &str) -> Vec<Shortcode> {
    if html.is_empty() {
        return vec![];
    }

    let mut out: Vec<Shortcode> = Vec::new();
    out.extend(
        ProductShortcode::pattern()
            .captures_iter(html)
            .filter_map(|c| ProductShortcode::from_captures(&c))
            .map(Shortcode::Product),
    );
    out.extend(
        ProductsShortcode::pattern()
            .captures_iter(html)
            .filter_map(|c| ProductsShortcode::from_captures(&c))
            .map(Shortcode::Products),
    );
    out.extend(
        ComparisonShortcode::pattern()
            .captures_iter(html)
            .filter_map(|c| ComparisonShortcode::from_captures(&c))
            .map(Shortcode::Comparison),
    );

    out.sort_by_key(|sc| (sc.position(), sc.kind()));
    log::trace!("extracted {} shortcodes", out.len());
    out
}

/// Distinct slugs referenced by a piece of content, used to batch-fetch
/// records before rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContentReferences {
    /// From `product` and `comparison` shortcodes.
    pub product_slugs: BTreeSet<String>,
    /// From `products` shortcodes.
    pub category_slugs: BTreeSet<String>,
}

impl ContentReferences {
    pub fn is_empty(&self) -> bool {
        self.product_slugs.is_empty() && self.category_slugs.is_empty()
    }
}

/// Collects the product and category slugs referenced anywhere in `html`.
pub fn extract_references(html: &str) -> ContentReferences {
    let mut refs = ContentReferences::default();
    for sc in extract_shortcodes(html) {
        match sc {
            Shortcode::Product(p) => {
                refs.product_slugs.insert(p.slug);
            }
            Shortcode::Products(p) => {
                refs.category_slugs.insert(p.category_slug);
            }
            Shortcode::Comparison(c) => refs.product_slugs.extend(c.slugs),
        }
    }
    refs
}
