//! # Shortcode Kinds
//!
//! One type per shortcode form. Each owns its keyword, its recognition
//! pattern and its canonical serialization, so the forward grammar and the
//! reverse rendering are written once, side by side.
//!
//! ## Types
//!
//! - **`ProductShortcode`**: `[product:<slug>]`, `[product:<slug>,<variant>]`
//! - **`ProductsShortcode`**: `[products:<category>]`, `[products:<category>,<limit>]`
//! - **`ComparisonShortcode`**: `[comparison:<slug>,<slug>,...]`
//!
//! ## Shared delimiters
//!
//! The bracket, keyword separator and argument separator live here and are
//! spliced into every kind's pattern and canonical form. No other module
//! hardcodes `[` or `:`.

pub mod comparison;
pub mod product;
pub mod products;

pub use comparison::ComparisonShortcode;
pub use product::{ProductShortcode, ProductVariant};
pub use products::ProductsShortcode;

use regex::Regex;

/// Opening bracket of every shortcode.
pub const OPEN: char = '[';
/// Closing bracket of every shortcode.
pub const CLOSE: char = ']';
/// Separates the keyword from the first argument.
pub const KEYWORD_SEP: char = ':';
/// Separates arguments.
pub const ARG_SEP: char = ',';
/// Slug alphabet. Matched verbatim (case-sensitive).
pub const SLUG: &str = "[a-z0-9-]+";

/// Builds a shortcode pattern from a keyword and the argument sub-pattern.
///
/// The keyword is matched case-insensitively; everything else keeps the
/// case sensitivity of `args`.
pub(crate) fn compile(keyword: &str, args: &str) -> Regex {
    let pattern = format!(
        "{open}(?i:{keyword}){sep}{args}{close}",
        open = regex::escape(&OPEN.to_string()),
        keyword = regex::escape(keyword),
        sep = regex::escape(&KEYWORD_SEP.to_string()),
        close = regex::escape(&CLOSE.to_string()),
    );
    Regex::new(&pattern).unwrap_or_else(|e| panic!("invalid `{keyword}` shortcode grammar: {e}"))
}

/// Renders the canonical `[keyword:arg,arg]` form.
pub(crate) fn render(keyword: &str, args: &[&str]) -> String {
    let mut out = String::new();
    out.push(OPEN);
    out.push_str(keyword);
    out.push(KEYWORD_SEP);
    out.push_str(&args.join(&ARG_SEP.to_string()));
    out.push(CLOSE);
    out
}
