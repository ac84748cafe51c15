//! Property-based tests for parsing and auto-linking.

use proptest::prelude::*;
use proptest::test_runner::Config;
use storefront_content_engine::{
    AutoLinkOptions, ContentBlock, LinkableItem, ParseOptions, auto_link, count_auto_links, inject_heading_ids,
    linking::linked_terms, parse_content, parse_content_with, parsing::snapshot, reconstruct, remove_auto_links,
};

const KEEP: ParseOptions = ParseOptions {
    keep_whitespace_gaps: true,
};

/// Literal HTML that cannot contain shortcode syntax.
fn literal() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 <>/=\"\n.,:-]{1,16}"
}

fn slug() -> impl Strategy<Value = String> {
    "[a-z0-9][a-z0-9-]{0,7}"
}

/// Shortcodes written in canonical form.
fn canonical_shortcode() -> impl Strategy<Value = String> {
    prop_oneof![
        slug().prop_map(|s| format!("[product:{s}]")),
        (slug(), prop_oneof![Just("compact"), Just("featured"), Just("hero")])
            .prop_map(|(s, v)| format!("[product:{s},{v}]")),
        slug().prop_map(|s| format!("[products:{s}]")),
        (slug(), 4u32..50).prop_map(|(s, n)| format!("[products:{s},{n}]")),
        prop::collection::vec(slug(), 2..5).prop_map(|v| format!("[comparison:{}]", v.join(","))),
    ]
}

fn document() -> impl Strategy<Value = String> {
    prop::collection::vec(prop_oneof![literal(), canonical_shortcode()], 0..12).prop_map(|parts| parts.concat())
}

/// Prose built from item names, filler words and markup.
fn prose() -> impl Strategy<Value = String> {
    let words = prop_oneof![
        Just("Widget"),
        Just("widget"),
        Just("Widgets"),
        Just("Gaming"),
        Just("Mouse"),
        Just("Gaming Mouse"),
        Just("Pro X"),
        Just("C++"),
        Just(".NET"),
        Just("the"),
        Just("a"),
        Just(","),
        Just("."),
        Just("<p>"),
        Just("</p>"),
        Just("<h2>"),
        Just("</h2>"),
        Just("<a href=\"/x\">"),
        Just("</a>"),
        Just("<code>"),
        Just("</code>"),
        Just("<img alt=\"Widget\">"),
        Just("[product:gaming-mouse]"),
    ];
    let sep = prop_oneof![Just(" "), Just(""), Just("\n")];
    prop::collection::vec((words, sep), 0..30).prop_map(|v| v.into_iter().flat_map(|(w, s)| [w, s]).collect())
}

fn items() -> Vec<LinkableItem> {
    vec![
        LinkableItem::product("widget", "Widget"),
        LinkableItem::product("gaming-mouse", "Gaming Mouse"),
        LinkableItem::product("gaming-mouse-pro-x", "Gaming Mouse Pro X"),
        LinkableItem::category("mice", "Mouse"),
        LinkableItem::product("cpp", "C++"),
        LinkableItem::product("dotnet", ".NET"),
    ]
}

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn any_text_round_trips_when_keeping_gaps(html in "\\PC{0,80}") {
        let blocks = parse_content_with(&html, KEEP);
        prop_assert_eq!(reconstruct(&blocks), html.clone());
        snapshot::invariants(&html, &blocks, KEEP);
    }

    #[test]
    fn default_parse_only_drops_whitespace(html in document()) {
        let blocks = parse_content(&html);
        snapshot::invariants(&html, &blocks, ParseOptions::default());
    }

    #[test]
    fn canonical_documents_reserialize_exactly(html in document()) {
        let rebuilt: String = parse_content_with(&html, KEEP)
            .iter()
            .map(|b| match b {
                ContentBlock::Html { content } => content.clone(),
                ContentBlock::Shortcode { shortcode, .. } => shortcode.to_canonical(),
            })
            .collect();
        prop_assert_eq!(rebuilt, html);
    }

    #[test]
    fn literal_only_is_single_block(html in literal()) {
        prop_assert_eq!(parse_content(&html), vec![ContentBlock::html(html.clone())]);
    }

    #[test]
    fn auto_link_is_idempotent(html in prose(), cap in 1usize..3) {
        let options = AutoLinkOptions::new("site").with_max_links_per_term(cap);
        let once = auto_link(&html, &items(), &options);
        let twice = auto_link(&once, &items(), &options);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn removing_links_restores_input(html in prose()) {
        let linked = auto_link(&html, &items(), &AutoLinkOptions::new("site"));
        prop_assert_eq!(remove_auto_links(&linked), html);
    }

    #[test]
    fn cap_is_respected(html in prose(), cap in 1usize..4) {
        let options = AutoLinkOptions::new("site").with_max_links_per_term(cap);
        let linked = auto_link(&html, &items(), &options);
        for (term, n) in linked_terms(&linked) {
            prop_assert!(n <= cap, "{} linked {} times", term, n);
        }
        prop_assert!(count_auto_links(&linked) <= cap * items().len());
    }

    #[test]
    fn heading_ids_are_idempotent(html in prose()) {
        let once = inject_heading_ids(&html);
        prop_assert_eq!(inject_heading_ids(&once), once);
    }
}
