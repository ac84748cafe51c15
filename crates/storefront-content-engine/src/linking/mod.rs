//! # Auto-Linking
//!
//! Wraps mentions of known product and category names in anchors to their
//! canonical pages.
//!
//! ## Rules
//!
//! - Matching is case-insensitive and whole-word: a match edge that is a
//!   word character (alphanumeric or `_`) must not touch another one
//! - Names are processed longest first, so "Gaming Mouse Pro X" claims its
//!   text before "Gaming Mouse" is considered
//! - Each distinct name is linked at most `max_links_per_term` times per
//!   document, counting auto-links already present whose text the name's
//!   matcher accepts
//! - Text inside tags, comments, character references, shortcodes, `<a>`,
//!   `<h1>`-`<h6>`, `<code>`, `<pre>`, `<script>` and `<style>` is never
//!   rewritten
//!
//! Names are escaped before compilation. Linking output fed back in with
//! the same items and cap comes out unchanged.
//!
//! ## Modules
//!
//! - **`regions`**: protected-region scanning and interval merging
//! - **`strip`**: removing and counting existing auto-links

pub mod regions;
pub mod strip;

use std::collections::HashMap;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::parsing::span::Span;
use regions::ProtectedRegions;
pub use strip::{count_auto_links, remove_auto_links};

/// Class token marking anchors inserted by [`auto_link`].
pub const AUTO_LINK_CLASS: &str = "auto-link";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkType {
    Product,
    Category,
}

impl LinkType {
    pub fn as_str(self) -> &'static str {
        match self {
            LinkType::Product => "product",
            LinkType::Category => "category",
        }
    }

    /// URL segment under the site root.
    pub fn path_segment(self) -> &'static str {
        match self {
            LinkType::Product => "products",
            LinkType::Category => "categories",
        }
    }
}

/// Something whose display name can be auto-linked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LinkableItem {
    pub slug: String,
    pub name: String,
    #[serde(rename = "type")]
    pub link_type: LinkType,
}

impl LinkableItem {
    pub fn product(slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            link_type: LinkType::Product,
        }
    }

    pub fn category(slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            link_type: LinkType::Category,
        }
    }

    /// `/{site}/products/{slug}` or `/{site}/categories/{slug}`.
    ///
    /// An empty site slug yields `/products/{slug}`.
    pub fn href(&self, site_slug: &str) -> String {
        if site_slug.is_empty() {
            format!("/{}/{}", self.link_type.path_segment(), self.slug)
        } else {
            format!("/{site_slug}/{}/{}", self.link_type.path_segment(), self.slug)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoLinkOptions {
    pub site_slug: String,
    /// Zero disables linking.
    pub max_links_per_term: usize,
}

impl AutoLinkOptions {
    pub const DEFAULT_MAX_LINKS_PER_TERM: usize = 1;

    pub fn new(site_slug: impl Into<String>) -> Self {
        Self {
            site_slug: site_slug.into(),
            max_links_per_term: Self::DEFAULT_MAX_LINKS_PER_TERM,
        }
    }

    pub fn with_max_links_per_term(mut self, max: usize) -> Self {
        self.max_links_per_term = max;
        self
    }
}

impl Default for AutoLinkOptions {
    fn default() -> Self {
        Self::new("")
    }
}

/// Links the first occurrences of each item's name in `html`.
pub fn auto_link(html: &str, items: &[LinkableItem], options: &AutoLinkOptions) -> String {
    if html.is_empty() || items.is_empty() || options.max_links_per_term == 0 {
        return html.to_string();
    }

    let links = plan_links(html, items, options.max_links_per_term);
    if links.is_empty() {
        return html.to_string();
    }
    log::debug!("auto-linking {} mentions", links.len());

    let mut out = String::with_capacity(html.len() + links.len() * 64);
    let mut at = 0;
    for (span, item) in links {
        out.push_str(&html[at..span.start]);
        out.push_str(&anchor(item, span.slice(html), &options.site_slug));
        at = span.end;
    }
    out.push_str(&html[at..]);
    out
}

/// Chooses the spans to link, ordered by position.
fn plan_links<'i>(html: &str, items: &'i [LinkableItem], max: usize) -> Vec<(Span, &'i LinkableItem)> {
    let mut protected = ProtectedRegions::scan(html);
    let existing = strip::find_auto_links(html);
    // Items whose names differ only in case share one cap.
    let mut tally: HashMap<String, usize> = HashMap::new();

    let mut ordered: Vec<&LinkableItem> = items.iter().filter(|i| !i.name.trim().is_empty()).collect();
    // Stable: equal lengths keep caller order.
    ordered.sort_by_key(|i| std::cmp::Reverse(i.name.trim().chars().count()));

    let mut links = Vec::new();
    for item in ordered {
        let name = item.name.trim();
        let pattern = match RegexBuilder::new(&regex::escape(name)).case_insensitive(true).build() {
            Ok(re) => re,
            Err(e) => {
                log::warn!("cannot match item {:?}: {e}", item.slug);
                continue;
            }
        };

        // Existing links are counted with the same matcher that made them.
        let used = tally.entry(name.to_lowercase()).or_insert_with(|| {
            existing
                .iter()
                .filter(|link| matches_whole(&pattern, link.inner.slice(html).trim()))
                .count()
        });
        if *used >= max {
            continue;
        }

        let mut at = 0;
        while *used < max {
            let Some(m) = pattern.find_at(html, at) else {
                break;
            };
            let span = Span::from(m.range());
            if !is_whole_word(html, span) || protected.overlaps(span) {
                at = next_char_boundary(html, span.start);
                continue;
            }
            protected.insert(span);
            links.push((span, item));
            *used += 1;
            at = span.end;
        }
    }

    links.sort_by_key(|(span, _)| span.start);
    links
}

fn matches_whole(pattern: &Regex, text: &str) -> bool {
    pattern.find(text).is_some_and(|m| m.start() == 0 && m.end() == text.len())
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// `\b` on each edge of the match that is a word character. An edge that is
/// not a word character (`C++`, `.NET`) is unconstrained.
fn is_whole_word(html: &str, span: Span) -> bool {
    let text = span.slice(html);
    let first = text.chars().next().is_some_and(is_word_char);
    let last = text.chars().next_back().is_some_and(is_word_char);
    let before = html[..span.start].chars().next_back().is_some_and(is_word_char);
    let after = html[span.end..].chars().next().is_some_and(is_word_char);
    !(first && before) && !(last && after)
}

fn next_char_boundary(s: &str, i: usize) -> usize {
    s[i..].chars().next().map_or(s.len(), |c| i + c.len_utf8())
}

fn anchor(item: &LinkableItem, text: &str, site_slug: &str) -> String {
    format!(
        r#"<a href="{href}" class="{AUTO_LINK_CLASS}" data-link-type="{kind}">{text}</a>"#,
        href = html_escape::encode_double_quoted_attribute(&item.href(site_slug)),
        kind = item.link_type.as_str(),
    )
}

/// Existing auto-links in `html`, counted per lower-cased anchor text.
pub fn linked_terms(html: &str) -> HashMap<String, usize> {
    strip::auto_link_tally(html)
}
