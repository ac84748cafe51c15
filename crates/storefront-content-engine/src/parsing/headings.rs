//! Heading anchors for in-page navigation.
//!
//! `<h2>` and `<h3>` elements without an `id` get one derived from their
//! plain text; headings that already carry an `id` are left untouched.

use std::{collections::HashSet, sync::LazyLock};

use regex::{Captures, Regex};
use serde::Serialize;

use crate::parsing::attrs::attribute;

static HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<(h[23])(\s[^>]*)?>(.*?)</(h[23])\s*>").expect("heading pattern is valid")
});
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));
static ANY_TAG_WITH_ATTRS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[A-Za-z][^\s>/]*(\s[^>]*)>").expect("tag pattern is valid"));

/// One entry of a table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadingEntry {
    /// 2 or 3.
    pub level: u8,
    pub id: String,
    /// Plain text with tags stripped and entities decoded.
    pub text: String,
}

/// Lower-cases `text` and collapses every run of non-alphanumeric characters
/// into a single hyphen, trimming hyphens from both ends.
///
/// `"Best Gaming Mice (2025)!"` becomes `"best-gaming-mice-2025"`.
pub fn slugify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_hyphen = false;
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    out
}

/// Adds an `id` to every `<h2>`/`<h3>` lacking one.
///
/// Generated ids are unique within the document: a collision with an
/// existing or previously generated id gets a `-2`, `-3`, ... suffix.
/// Headings whose text has no alphanumeric characters are left as they are.
pub fn inject_heading_ids(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }
    walk_headings(html).0
}

/// Lists the `<h2>`/`<h3>` headings with the ids [`inject_heading_ids`]
/// would leave on them. Headings that end up without an id are omitted.
pub fn table_of_contents(html: &str) -> Vec<HeadingEntry> {
    if html.is_empty() {
        return vec![];
    }
    walk_headings(html).1
}

fn walk_headings(html: &str) -> (String, Vec<HeadingEntry>) {
    let mut used = existing_ids(html);
    let mut entries = Vec::new();

    let rewritten = HEADING.replace_all(html, |caps: &Captures<'_>| {
        let whole = caps[0].to_string();
        let open = &caps[1];
        if !open.eq_ignore_ascii_case(&caps[4]) {
            return whole;
        }
        let level = if open.eq_ignore_ascii_case("h2") { 2 } else { 3 };
        let attrs = caps.get(2).map_or("", |m| m.as_str());
        let text = plain_text(&caps[3]);

        // An empty id is kept as written but has nothing to link to.
        if let Some(id) = attribute(attrs, "id") {
            if !id.trim().is_empty() {
                entries.push(HeadingEntry {
                    level,
                    id: id.to_string(),
                    text,
                });
            }
            return whole;
        }

        let base = slugify(&text);
        if base.is_empty() {
            return whole;
        }
        let (Some(all), Some(inner)) = (caps.get(0), caps.get(3)) else {
            return whole;
        };
        let id = unique_id(&base, &mut used);
        let rebuilt = format!("<{open}{attrs} id=\"{id}\">{}", &html[inner.start()..all.end()]);
        entries.push(HeadingEntry { level, id, text });
        rebuilt
    });

    (rewritten.into_owned(), entries)
}

fn plain_text(inner: &str) -> String {
    let stripped = TAG.replace_all(inner, "");
    html_escape::decode_html_entities(&stripped).trim().to_string()
}

fn existing_ids(html: &str) -> HashSet<String> {
    ANY_TAG_WITH_ATTRS
        .captures_iter(html)
        .filter_map(|c| c.get(1).and_then(|m| attribute(m.as_str(), "id")))
        .filter(|id| !id.trim().is_empty())
        .map(str::to_string)
        .collect()
}

fn unique_id(base: &str, used: &mut HashSet<String>) -> String {
    let mut candidate = base.to_string();
    let mut n = 2;
    while used.contains(&candidate) {
        candidate = format!("{base}-{n}");
        n += 1;
    }
    used.insert(candidate.clone());
    candidate
}
