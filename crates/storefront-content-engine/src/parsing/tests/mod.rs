//! Fixture tests for the parsing module.
//!
//! Fixtures (.html) live in `fixtures/`; expected block listings are inline
//! snapshots rendered with `Snap::to_text`.

use crate::parsing::{
    blocks::{ContentBlock, ParseOptions, parse_content_with, reconstruct},
    snapshot,
};

fn parse_fixture(name: &str, options: ParseOptions) -> (String, Vec<ContentBlock>) {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let html = std::fs::read_to_string(format!("{fixtures_dir}/{name}.html")).unwrap();
    let blocks = parse_content_with(&html, options);
    snapshot::invariants(&html, &blocks, options);
    (html, blocks)
}

#[test]
fn fixture_review_article() {
    let (_, blocks) = parse_fixture("review_article", ParseOptions::default());
    insta::assert_snapshot!(snapshot::normalize(&blocks).to_text(), @r"
    Html: <h2>Best Gaming Mice (2025)</h2>\n<p>Our favourite right now:...
    Product: [product:viper-ultimate,featured]
      slug = viper-ultimate
      variant = featured
    Html: \n<p>Runners up:</p>\n
    Products: [products:gaming-mice,4]
      category = gaming-mice
      limit = 4
    Comparison: [comparison:viper-ultimate, g-pro-x]
      slugs = viper-ultimate,g-pro-x
    Html: \n<p>Happy clicking.</p>\n
    ");
}

#[test]
fn fixture_malformed_brackets() {
    let (html, blocks) = parse_fixture("malformed_brackets", ParseOptions::default());
    assert_eq!(reconstruct(&blocks), html);
    insta::assert_snapshot!(snapshot::normalize(&blocks).to_text(), @r"
    Html: <p>Prices [from $20] and [product:] or [products:mice,lots]....
    Product: [PRODUCT:deathadder,Compact]
      slug = deathadder
      variant = compact
    Html:  still counts.</p>\n
    ");
}

#[test]
fn fixture_adjacent_shortcodes_drop_whitespace_gap() {
    let (html, blocks) = parse_fixture("adjacent_shortcodes", ParseOptions::default());
    assert_eq!(blocks.len(), 3);
    assert_eq!(reconstruct(&blocks), html.replace("   ", ""));
}

#[test]
fn fixture_adjacent_shortcodes_keep_whitespace_gap() {
    let options = ParseOptions {
        keep_whitespace_gaps: true,
    };
    let (html, blocks) = parse_fixture("adjacent_shortcodes", options);
    assert_eq!(reconstruct(&blocks), html);
    let kinds: Vec<String> = snapshot::normalize(&blocks).blocks.into_iter().map(|b| b.kind).collect();
    assert_eq!(kinds, ["Product", "Product", "Html", "Products"]);
    assert_eq!(blocks[2], ContentBlock::html("   "));
}

/// Shortcode text inside an attribute is still a shortcode; the parser is
/// not an HTML parser.
#[test]
fn shortcode_inside_attribute_is_extracted() {
    let html = r#"<img alt="[product:x]">"#;
    let blocks = parse_content_with(html, ParseOptions::default());
    snapshot::invariants(html, &blocks, ParseOptions::default());
    assert_eq!(blocks.len(), 3);
}
