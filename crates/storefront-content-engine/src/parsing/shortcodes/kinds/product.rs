use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::{Serialize, Serializer};

use super::{ARG_SEP, SLUG, compile, render};
use crate::parsing::span::Span;

static PATTERN: LazyLock<Regex> =
    LazyLock::new(|| compile(ProductShortcode::KEYWORD, &format!(r"({SLUG})(?:{ARG_SEP}(\w+))?")));

/// Display variant requested for a single product card.
///
/// Unknown tokens are kept verbatim (lower-cased) in `Other`; the renderer
/// decides whether to reject them or fall back to the default card.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ProductVariant {
    #[default]
    Default,
    Compact,
    Featured,
    Other(String),
}

impl ProductVariant {
    /// Parses a variant token. Case is folded to lower.
    pub fn from_token(token: &str) -> Self {
        let token = token.to_lowercase();
        match token.as_str() {
            "default" => Self::Default,
            "compact" => Self::Compact,
            "featured" => Self::Featured,
            _ => Self::Other(token),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Default => "default",
            Self::Compact => "compact",
            Self::Featured => "featured",
            Self::Other(s) => s,
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, Self::Default)
    }
}

impl Serialize for ProductVariant {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// `[product:<slug>]` or `[product:<slug>,<variant>]`: a single product card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductShortcode {
    pub slug: String,
    pub variant: ProductVariant,
    /// Exact span of the directive in the source.
    pub span: Span,
}

impl ProductShortcode {
    pub const KEYWORD: &'static str = "product";

    pub fn pattern() -> &'static Regex {
        &PATTERN
    }

    pub(crate) fn from_captures(caps: &Captures<'_>) -> Option<Self> {
        let full = caps.get(0)?;
        let slug = caps.get(1)?.as_str().to_string();
        let variant = caps
            .get(2)
            .map(|m| ProductVariant::from_token(m.as_str()))
            .unwrap_or_default();
        Some(Self {
            slug,
            variant,
            span: full.range().into(),
        })
    }

    /// Canonical text. The default variant is never written out.
    pub fn to_canonical(&self) -> String {
        if self.variant.is_default() {
            render(Self::KEYWORD, &[&self.slug])
        } else {
            render(Self::KEYWORD, &[&self.slug, self.variant.as_str()])
        }
    }
}
