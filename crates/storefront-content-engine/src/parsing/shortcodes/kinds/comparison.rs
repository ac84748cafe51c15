use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::Serialize;

use super::{ARG_SEP, compile, render};
use crate::parsing::span::Span;

// Slug alphabet plus separators and whitespace; the list is split afterwards.
static PATTERN: LazyLock<Regex> =
    LazyLock::new(|| compile(ComparisonShortcode::KEYWORD, &format!(r"([a-z0-9{ARG_SEP}\s-]+)")));

/// `[comparison:<slug>,<slug>,...]`: a side-by-side comparison table.
///
/// Two or more slugs are expected. A list that trims down to a single slug
/// is still extracted; the renderer reports "not enough products".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonShortcode {
    pub slugs: Vec<String>,
    pub span: Span,
}

impl ComparisonShortcode {
    pub const KEYWORD: &'static str = "comparison";

    pub fn pattern() -> &'static Regex {
        &PATTERN
    }

    pub(crate) fn from_captures(caps: &Captures<'_>) -> Option<Self> {
        let full = caps.get(0)?;
        let slugs: Vec<String> = caps
            .get(1)?
            .as_str()
            .split(ARG_SEP)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        // Inner whitespace ("a b") is not a slug.
        if slugs.is_empty() || slugs.iter().any(|s| s.contains(char::is_whitespace)) {
            return None;
        }
        Some(Self {
            slugs,
            span: full.range().into(),
        })
    }

    pub fn to_canonical(&self) -> String {
        let args: Vec<&str> = self.slugs.iter().map(String::as_str).collect();
        render(Self::KEYWORD, &args)
    }
}
