//! Finding and removing anchors inserted by the auto-linker.
//!
//! An auto-link is an `<a>` whose `class` attribute carries the
//! [`AUTO_LINK_CLASS`] token, closed by the next `</a>`. Opening tags are
//! scanned one by one so an unclosed ordinary anchor earlier in the document
//! cannot swallow a later auto-link. Other anchors are never touched.

use std::{collections::HashMap, sync::LazyLock};

use regex::Regex;

use super::AUTO_LINK_CLASS;
use crate::parsing::{attrs::attribute, span::Span};

static OPEN_ANCHOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<a\b([^>]*)>").expect("anchor pattern is valid"));
static CLOSE_ANCHOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</a\s*>").expect("anchor close pattern is valid"));

/// Location of one auto-link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoLinkSpan {
    /// Opening tag through closing tag.
    pub full: Span,
    /// Anchor content.
    pub inner: Span,
}

fn is_auto_link(attrs: &str) -> bool {
    attribute(attrs, "class").is_some_and(|class| class.split_whitespace().any(|t| t == AUTO_LINK_CLASS))
}

/// Every auto-link in `html`, in document order. An auto-link without a
/// closing tag is ignored.
pub fn find_auto_links(html: &str) -> Vec<AutoLinkSpan> {
    let mut out = Vec::new();
    let mut at = 0;
    for caps in OPEN_ANCHOR.captures_iter(html) {
        let Some(open) = caps.get(0) else { continue };
        if open.start() < at || !caps.get(1).is_some_and(|m| is_auto_link(m.as_str())) {
            continue;
        }
        let Some(close) = CLOSE_ANCHOR.find_at(html, open.end()) else {
            log::debug!("unclosed auto-link at byte {}", open.start());
            continue;
        };
        out.push(AutoLinkSpan {
            full: Span::new(open.start(), close.end()),
            inner: Span::new(open.end(), close.start()),
        });
        at = close.end();
    }
    out
}

/// Replaces every auto-link with its inner content.
pub fn remove_auto_links(html: &str) -> String {
    let links = find_auto_links(html);
    if links.is_empty() {
        return html.to_string();
    }
    let mut out = String::with_capacity(html.len());
    let mut at = 0;
    for link in links {
        out.push_str(&html[at..link.full.start]);
        out.push_str(link.inner.slice(html));
        at = link.full.end;
    }
    out.push_str(&html[at..]);
    out
}

/// Number of auto-links in `html`.
pub fn count_auto_links(html: &str) -> usize {
    find_auto_links(html).len()
}

/// Existing auto-links per lower-cased anchor text.
pub(crate) fn auto_link_tally(html: &str) -> HashMap<String, usize> {
    let mut tally = HashMap::new();
    for link in find_auto_links(html) {
        *tally.entry(link.inner.slice(html).trim().to_lowercase()).or_insert(0) += 1;
    }
    tally
}
