use crate::parsing::{
    blocks::{ContentBlock, ParseOptions},
    shortcodes::extract_shortcodes,
};

/// Validates parser output invariants against the parsed `html`.
///
/// Asserts that:
/// - Blocks cover `html` in order, each at or after the previous one
/// - Every skipped gap is whitespace-only (and empty with `keep_whitespace_gaps`)
/// - No HTML block is empty
/// - Every shortcode block's source re-extracts to the same directive
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(html: &str, blocks: &[ContentBlock], options: ParseOptions) {
    let mut at = 0;
    for (i, b) in blocks.iter().enumerate() {
        let start = match b {
            ContentBlock::Html { content } => {
                assert!(!content.is_empty(), "block {i}: empty html block");
                html[at..]
                    .find(content.as_str())
                    .map(|off| at + off)
                    .unwrap_or_else(|| panic!("block {i}: html {content:?} not found after byte {at}"))
            }
            ContentBlock::Shortcode {
                kind,
                shortcode,
                source,
            } => {
                assert_eq!(*kind, shortcode.kind(), "block {i}: kind mismatch");
                let span = shortcode.span();
                assert!(span.start >= at, "block {i}: shortcode at {} precedes byte {at}", span.start);
                assert_eq!(span.slice(html), source, "block {i}: source differs from span");

                let again = extract_shortcodes(source);
                assert_eq!(again.len(), 1, "block {i}: {source:?} does not re-extract");
                assert_eq!(again[0].to_canonical(), shortcode.to_canonical(), "block {i}: re-extracted directive differs");
                span.start
            }
        };
        check_gap(&html[at..start], options, i);
        at = start + b.source_text().len();
    }
    check_gap(&html[at..], options, blocks.len());
}

fn check_gap(gap: &str, options: ParseOptions, i: usize) {
    if options.keep_whitespace_gaps {
        assert!(gap.is_empty(), "before block {i}: dropped gap {gap:?}");
    } else {
        assert!(gap.trim().is_empty(), "before block {i}: dropped non-whitespace {gap:?}");
    }
}
