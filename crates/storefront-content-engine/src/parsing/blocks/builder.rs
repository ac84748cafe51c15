use crate::parsing::{shortcodes::Shortcode, span::Span};

use super::types::{ContentBlock, ParseOptions};

/// Accumulates blocks while walking position-ordered shortcodes over a source.
///
/// Literal text between shortcodes is flushed lazily, when the next
/// shortcode arrives or on [`finish`](Self::finish).
pub struct BlockBuilder<'a> {
    source: &'a str,
    options: ParseOptions,
    /// End of the last consumed shortcode.
    cursor: usize,
    out: Vec<ContentBlock>,
}

impl<'a> BlockBuilder<'a> {
    pub fn new(source: &'a str, options: ParseOptions) -> Self {
        Self {
            source,
            options,
            cursor: 0,
            out: vec![],
        }
    }

    /// Consumes one shortcode. Shortcodes must arrive in position order.
    ///
    /// A shortcode starting inside the previous one, or with a span that
    /// does not lie on the source, is skipped.
    pub fn push(&mut self, shortcode: Shortcode) {
        let span = shortcode.span();
        if span.start < self.cursor {
            log::debug!(
                "skipping shortcode at {} overlapping previous one ending at {}",
                span.start,
                self.cursor
            );
            return;
        }
        let Some(source) = self.source.get(span.start..span.end) else {
            log::debug!("skipping shortcode with span {span:?} outside source");
            return;
        };

        self.flush_literal(span.start);
        self.out.push(ContentBlock::shortcode(shortcode, source));
        self.cursor = span.end;
    }

    pub fn finish(mut self) -> Vec<ContentBlock> {
        // EOF flush
        self.flush_literal(self.source.len());
        self.out
    }

    fn flush_literal(&mut self, end: usize) {
        let text = Span::new(self.cursor, end).slice(self.source);
        if text.is_empty() {
            return;
        }
        if !self.options.keep_whitespace_gaps && text.trim().is_empty() {
            return;
        }
        self.out.push(ContentBlock::html(text));
    }
}
