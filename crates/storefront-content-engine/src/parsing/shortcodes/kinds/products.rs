use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::Serialize;

use super::{ARG_SEP, SLUG, compile, render};
use crate::parsing::span::Span;

static PATTERN: LazyLock<Regex> =
    LazyLock::new(|| compile(ProductsShortcode::KEYWORD, &format!(r"({SLUG})(?:{ARG_SEP}(\d+))?")));

/// `[products:<category>]` or `[products:<category>,<limit>]`: a grid of the
/// first `limit` products in a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductsShortcode {
    pub category_slug: String,
    /// Always >= 1.
    pub limit: u32,
    pub span: Span,
}

impl ProductsShortcode {
    pub const KEYWORD: &'static str = "products";
    pub const DEFAULT_LIMIT: u32 = 3;

    pub fn pattern() -> &'static Regex {
        &PATTERN
    }

    pub(crate) fn from_captures(caps: &Captures<'_>) -> Option<Self> {
        let full = caps.get(0)?;
        let category_slug = caps.get(1)?.as_str().to_string();
        let limit = caps
            .get(2)
            .and_then(|m| m.as_str().parse::<u32>().ok())
            .filter(|&n| n >= 1)
            .unwrap_or(Self::DEFAULT_LIMIT);
        Some(Self {
            category_slug,
            limit,
            span: full.range().into(),
        })
    }

    /// Canonical text. The default limit is never written out.
    pub fn to_canonical(&self) -> String {
        if self.limit == Self::DEFAULT_LIMIT {
            render(Self::KEYWORD, &[&self.category_slug])
        } else {
            render(Self::KEYWORD, &[&self.category_slug, &self.limit.to_string()])
        }
    }
}
