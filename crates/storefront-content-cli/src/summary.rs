//! One-line descriptions for terminal output.

use storefront_content_config::CatalogProduct;
use storefront_content_engine::{HeadingEntry, ResolvedBlock};

pub fn describe(block: &ResolvedBlock<'_, CatalogProduct>) -> String {
    match block {
        ResolvedBlock::Html(html) => format!("html ({} bytes)", html.len()),
        ResolvedBlock::Product { product, variant } => {
            format!("product {} ({}): {}", product.slug, variant.as_str(), product.name)
        }
        ResolvedBlock::ProductNotFound { slug } => format!("product {slug}: not found"),
        ResolvedBlock::ProductGrid {
            category_slug,
            products,
        } => format!("grid {category_slug}: {}", names(products.iter())),
        ResolvedBlock::NoProductsFound { category_slug } => format!("grid {category_slug}: no products found"),
        ResolvedBlock::Comparison { products } => format!("comparison: {}", names(products.iter().copied())),
        ResolvedBlock::NotEnoughProducts { requested, found } => {
            format!("comparison: not enough products ({found} of {requested} found)")
        }
    }
}

fn names<'a>(products: impl Iterator<Item = &'a CatalogProduct>) -> String {
    products.map(|p| p.name.as_str()).collect::<Vec<_>>().join(", ")
}

/// `h3` entries are indented under their `h2`.
pub fn toc_line(entry: &HeadingEntry) -> String {
    let indent = if entry.level > 2 { "  " } else { "" };
    format!("{indent}{} #{}", entry.text, entry.id)
}
