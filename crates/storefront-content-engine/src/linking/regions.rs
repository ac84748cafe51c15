//! Protected regions: byte ranges of HTML the auto-linker must not rewrite.
//! Character references (`&amp;`, `&#233;`, `&#x20AC;`) count as markup.
//!
//! Regions are collected once per call from the literal HTML, then merged
//! into a sorted, non-overlapping set. Candidate matches are tested with a
//! binary search.

use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::{shortcodes::extract_shortcodes, span::Span};

/// Elements whose whole content is off limits.
pub const PROTECTED_ELEMENTS: &[&str] = &[
    "a", "h1", "h2", "h3", "h4", "h5", "h6", "code", "pre", "script", "style",
];

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));
static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("comment pattern is valid"));
static ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(?:#[0-9]+|#[xX][0-9a-fA-F]+|[A-Za-z][A-Za-z0-9]*);").expect("entity pattern is valid")
});
static ELEMENTS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    PROTECTED_ELEMENTS
        .iter()
        .map(|name| {
            Regex::new(&format!(r"(?is)<{name}\b[^>]*>.*?</{name}\s*>"))
                .unwrap_or_else(|e| panic!("invalid pattern for <{name}>: {e}"))
        })
        .collect()
});

/// Sorts spans by start and coalesces overlapping or adjacent ones.
///
/// Empty spans are dropped.
pub fn merge_intervals(mut spans: Vec<Span>) -> Vec<Span> {
    spans.retain(|s| !s.is_empty());
    spans.sort_unstable();

    let mut merged: Vec<Span> = Vec::with_capacity(spans.len());
    for s in spans {
        match merged.last_mut() {
            Some(last) if last.touches(s) => last.end = last.end.max(s.end),
            _ => merged.push(s),
        }
    }
    merged
}

/// Sorted, non-overlapping set of protected spans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProtectedRegions {
    spans: Vec<Span>,
}

impl ProtectedRegions {
    /// Scans `html` for every tag, comment, character reference, protected
    /// element and shortcode.
    pub fn scan(html: &str) -> Self {
        let mut raw: Vec<Span> = Vec::new();
        raw.extend(TAG.find_iter(html).map(|m| Span::from(m.range())));
        raw.extend(COMMENT.find_iter(html).map(|m| Span::from(m.range())));
        raw.extend(ENTITY.find_iter(html).map(|m| Span::from(m.range())));
        for re in ELEMENTS.iter() {
            raw.extend(re.find_iter(html).map(|m| Span::from(m.range())));
        }
        raw.extend(extract_shortcodes(html).iter().map(|sc| sc.span()));

        let regions = Self::from_spans(raw);
        log::trace!("{} protected regions", regions.spans.len());
        regions
    }

    pub fn from_spans(spans: Vec<Span>) -> Self {
        Self {
            spans: merge_intervals(spans),
        }
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// True if `candidate` overlaps, is contained in, or contains any region.
    pub fn overlaps(&self, candidate: Span) -> bool {
        let idx = self.spans.partition_point(|r| r.end <= candidate.start);
        self.spans.get(idx).is_some_and(|r| r.overlaps(candidate))
    }

    /// Adds a span, keeping the set sorted and merged.
    pub fn insert(&mut self, span: Span) {
        if span.is_empty() {
            return;
        }
        let idx = self.spans.partition_point(|r| r.end < span.start);
        let mut merged = span;
        let mut end_idx = idx;
        while let Some(r) = self.spans.get(end_idx) {
            if !r.touches(merged) {
                break;
            }
            merged = Span::new(merged.start.min(r.start), merged.end.max(r.end));
            end_idx += 1;
        }
        self.spans.splice(idx..end_idx, [merged]);
    }
}
