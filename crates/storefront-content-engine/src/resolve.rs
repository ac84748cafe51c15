//! Resolution of parsed blocks against pre-fetched records.
//!
//! The engine never fetches data. Callers batch-load what
//! [`extract_references`](crate::parsing::shortcodes::extract_references)
//! reports, hand the maps in through a [`Catalog`], and get back one
//! [`ResolvedBlock`] per block, fallback states included. Turning those into
//! markup is the rendering layer's job.

use std::collections::HashMap;

use crate::parsing::{
    blocks::ContentBlock,
    shortcodes::{ProductVariant, Shortcode},
};

/// Borrowed lookup tables for one render.
#[derive(Debug)]
pub struct Catalog<'a, P> {
    /// Product slug to record.
    pub products: &'a HashMap<String, P>,
    /// Category slug to its products, in display order.
    pub category_products: &'a HashMap<String, Vec<P>>,
}

impl<'a, P> Catalog<'a, P> {
    pub fn new(products: &'a HashMap<String, P>, category_products: &'a HashMap<String, Vec<P>>) -> Self {
        Self {
            products,
            category_products,
        }
    }
}

/// A block with its shortcode, if any, looked up.
#[derive(Debug, PartialEq)]
pub enum ResolvedBlock<'a, P> {
    Html(&'a str),
    Product {
        product: &'a P,
        variant: &'a ProductVariant,
    },
    ProductNotFound {
        slug: &'a str,
    },
    ProductGrid {
        category_slug: &'a str,
        /// At most `limit` products.
        products: &'a [P],
    },
    NoProductsFound {
        category_slug: &'a str,
    },
    Comparison {
        /// Resolved products in shortcode order; unknown slugs are skipped.
        products: Vec<&'a P>,
    },
    /// Fewer than two comparison slugs resolved.
    NotEnoughProducts {
        requested: usize,
        found: usize,
    },
}

/// Minimum number of resolved products for a comparison table.
pub const MIN_COMPARISON_PRODUCTS: usize = 2;

pub fn resolve_block<'a, P>(block: &'a ContentBlock, catalog: &Catalog<'a, P>) -> ResolvedBlock<'a, P> {
    let shortcode = match block {
        ContentBlock::Html { content } => return ResolvedBlock::Html(content),
        ContentBlock::Shortcode { shortcode, .. } => shortcode,
    };

    match shortcode {
        Shortcode::Product(p) => match catalog.products.get(&p.slug) {
            Some(product) => ResolvedBlock::Product {
                product,
                variant: &p.variant,
            },
            None => ResolvedBlock::ProductNotFound { slug: &p.slug },
        },
        Shortcode::Products(p) => {
            let listed = catalog
                .category_products
                .get(&p.category_slug)
                .map(Vec::as_slice)
                .unwrap_or_default();
            if listed.is_empty() {
                return ResolvedBlock::NoProductsFound {
                    category_slug: &p.category_slug,
                };
            }
            let n = listed.len().min(p.limit as usize);
            ResolvedBlock::ProductGrid {
                category_slug: &p.category_slug,
                products: &listed[..n],
            }
        }
        Shortcode::Comparison(c) => {
            let products: Vec<&P> = c.slugs.iter().filter_map(|s| catalog.products.get(s)).collect();
            if products.len() < MIN_COMPARISON_PRODUCTS {
                log::debug!(
                    "comparison resolved {} of {} products",
                    products.len(),
                    c.slugs.len()
                );
                return ResolvedBlock::NotEnoughProducts {
                    requested: c.slugs.len(),
                    found: products.len(),
                };
            }
            ResolvedBlock::Comparison { products }
        }
    }
}

pub fn resolve_blocks<'a, P>(blocks: &'a [ContentBlock], catalog: &Catalog<'a, P>) -> Vec<ResolvedBlock<'a, P>> {
    blocks.iter().map(|b| resolve_block(b, catalog)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::blocks::parse_content;

    #[derive(Debug, PartialEq)]
    struct Product(&'static str);

    fn fixtures() -> (HashMap<String, Product>, HashMap<String, Vec<Product>>) {
        let products = HashMap::from([
            ("mouse-a".to_string(), Product("Mouse A")),
            ("mouse-b".to_string(), Product("Mouse B")),
        ]);
        let categories = HashMap::from([
            (
                "mice".to_string(),
                vec![Product("A"), Product("B"), Product("C"), Product("D")],
            ),
            ("empty".to_string(), vec![]),
        ]);
        (products, categories)
    }

    #[test]
    fn product_found_and_missing() {
        let (products, categories) = fixtures();
        let catalog = Catalog::new(&products, &categories);
        let blocks = parse_content("[product:mouse-a,featured][product:ghost]");
        let resolved = resolve_blocks(&blocks, &catalog);
        assert_eq!(
            resolved,
            vec![
                ResolvedBlock::Product {
                    product: &Product("Mouse A"),
                    variant: &ProductVariant::Featured
                },
                ResolvedBlock::ProductNotFound { slug: "ghost" },
            ]
        );
    }

    #[test]
    fn grid_is_sliced_to_limit() {
        let (products, categories) = fixtures();
        let catalog = Catalog::new(&products, &categories);
        let blocks = parse_content("[products:mice][products:mice,10]");
        let resolved = resolve_blocks(&blocks, &catalog);
        match &resolved[0] {
            ResolvedBlock::ProductGrid { products, .. } => assert_eq!(products.len(), 3),
            other => panic!("expected grid, got {other:?}"),
        }
        match &resolved[1] {
            ResolvedBlock::ProductGrid { products, .. } => assert_eq!(products.len(), 4),
            other => panic!("expected grid, got {other:?}"),
        }
    }

    #[test]
    fn empty_or_unknown_category() {
        let (products, categories) = fixtures();
        let catalog = Catalog::new(&products, &categories);
        let blocks = parse_content("[products:empty][products:nowhere]");
        let resolved = resolve_blocks(&blocks, &catalog);
        assert_eq!(
            resolved,
            vec![
                ResolvedBlock::NoProductsFound {
                    category_slug: "empty"
                },
                ResolvedBlock::NoProductsFound {
                    category_slug: "nowhere"
                },
            ]
        );
    }

    #[test]
    fn comparison_needs_two_resolved() {
        let (products, categories) = fixtures();
        let catalog = Catalog::new(&products, &categories);
        let blocks = parse_content("[comparison:mouse-a,ghost,mouse-b][comparison:mouse-a,ghost]");
        let resolved = resolve_blocks(&blocks, &catalog);
        assert_eq!(
            resolved[0],
            ResolvedBlock::Comparison {
                products: vec![&Product("Mouse A"), &Product("Mouse B")]
            }
        );
        assert_eq!(
            resolved[1],
            ResolvedBlock::NotEnoughProducts {
                requested: 2,
                found: 1
            }
        );
    }

    #[test]
    fn html_passes_through() {
        let (products, categories) = fixtures();
        let catalog = Catalog::new(&products, &categories);
        let blocks = parse_content("<p>hi</p>");
        assert_eq!(resolve_blocks(&blocks, &catalog), vec![ResolvedBlock::Html("<p>hi</p>")]);
    }
}
