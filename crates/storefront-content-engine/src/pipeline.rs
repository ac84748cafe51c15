use serde::Serialize;

use crate::{
    linking::{AutoLinkOptions, LinkableItem, auto_link, remove_auto_links},
    parsing::{
        blocks::{ContentBlock, ParseOptions, parse_content_with},
        headings::{HeadingEntry, inject_heading_ids, table_of_contents},
        shortcodes::{ContentReferences, extract_references},
    },
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineOptions {
    /// `None` skips auto-linking.
    pub auto_link: Option<AutoLinkOptions>,
    /// Strip existing auto-links before linking again, so edited content
    /// and a changed item list are linked from scratch.
    pub relink: bool,
    pub inject_heading_ids: bool,
    pub parse: ParseOptions,
}

/// Everything the rendering layer needs for one article or description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessedContent {
    /// The HTML after linking and heading-id injection.
    pub html: String,
    pub blocks: Vec<ContentBlock>,
    pub references: ContentReferences,
    pub toc: Vec<HeadingEntry>,
}

/// Raw HTML to blocks: optional relinking, heading ids, then block parsing.
pub struct ContentPipeline<'a> {
    items: &'a [LinkableItem],
    options: PipelineOptions,
}

impl<'a> ContentPipeline<'a> {
    pub fn new(items: &'a [LinkableItem], options: PipelineOptions) -> Self {
        Self { items, options }
    }

    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    pub fn process(&self, html: &str) -> ProcessedContent {
        let mut current = html.to_string();

        if let Some(link_options) = &self.options.auto_link {
            if self.options.relink {
                current = remove_auto_links(&current);
            }
            current = auto_link(&current, self.items, link_options);
        }

        if self.options.inject_heading_ids {
            current = inject_heading_ids(&current);
        }

        let blocks = parse_content_with(&current, self.options.parse);
        let references = extract_references(&current);
        let toc = table_of_contents(&current);
        log::debug!(
            "processed {} bytes into {} blocks ({} headings)",
            html.len(),
            blocks.len(),
            toc.len()
        );

        ProcessedContent {
            html: current,
            blocks,
            references,
            toc,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linking::count_auto_links;
    use crate::parsing::blocks::reconstruct;

    const ARTICLE: &str = concat!(
        "<h2>Best Widget Picks</h2>",
        "<p>The Widget is great.</p>",
        "[product:widget,featured]",
        "<h3>Compared</h3>",
        "[comparison:widget,gizmo]",
    );

    fn items() -> Vec<LinkableItem> {
        vec![LinkableItem::product("widget", "Widget")]
    }

    #[test]
    fn full_pipeline() {
        let items = items();
        let pipeline = ContentPipeline::new(
            &items,
            PipelineOptions {
                auto_link: Some(AutoLinkOptions::new("tech")),
                inject_heading_ids: true,
                ..Default::default()
            },
        );
        let out = pipeline.process(ARTICLE);

        assert_eq!(count_auto_links(&out.html), 1);
        assert!(out.html.starts_with(r#"<h2 id="best-widget-picks">Best Widget Picks</h2>"#));
        assert_eq!(out.blocks.len(), 4);
        assert_eq!(reconstruct(&out.blocks), out.html);
        assert_eq!(out.toc.len(), 2);
        assert!(out.references.product_slugs.contains("gizmo"));
    }

    #[test]
    fn defaults_only_parse() {
        let items = items();
        let out = ContentPipeline::new(&items, PipelineOptions::default()).process(ARTICLE);
        assert_eq!(out.html, ARTICLE);
        assert_eq!(count_auto_links(&out.html), 0);
    }

    #[test]
    fn relink_replaces_stale_links() {
        let stale = r#"<p><a href="/old/products/w" class="auto-link">Widget</a> and Widget</p>"#;
        let items = items();
        let options = PipelineOptions {
            auto_link: Some(AutoLinkOptions::new("tech")),
            relink: true,
            ..Default::default()
        };
        let out = ContentPipeline::new(&items, options).process(stale);
        assert_eq!(count_auto_links(&out.html), 1);
        assert!(out.html.contains("/tech/products/widget"));
        assert!(!out.html.contains("/old/"));
    }

    #[test]
    fn empty_input() {
        let out = ContentPipeline::new(&[], PipelineOptions::default()).process("");
        assert_eq!(out.html, "");
        assert!(out.blocks.is_empty());
    }
}
