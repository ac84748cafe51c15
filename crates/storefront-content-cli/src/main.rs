mod summary;

use std::{
    io::{self, Read},
    path::PathBuf,
    process,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use storefront_content_config::{Config, ProductCatalog};
use storefront_content_engine::{
    AutoLinkOptions, Catalog, ContentPipeline, ProcessedContent, auto_link, count_auto_links, extract_references,
    inject_heading_ids, parse_content_with, parsing::snapshot, remove_auto_links, resolve_blocks, table_of_contents,
};

#[derive(Parser)]
#[command(
    name = "storefront-content",
    version,
    about = "Shortcodes, heading anchors and auto-links for storefront HTML"
)]
struct Cli {
    /// Config file [default: ~/.config/storefront-content/config.toml]
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the blocks a document parses into
    Parse(ParseArgs),

    /// List the product and category slugs a document references
    Refs(InputArgs),

    /// Link product and category names to their pages
    Link(LinkArgs),

    /// Remove auto-links, keeping their text
    Unlink(UnlinkArgs),

    /// Add ids to <h2>/<h3> headings
    Headings(HeadingsArgs),

    /// Run the full pipeline and resolve shortcodes against the catalog
    Render(RenderArgs),
}

#[derive(clap::Args)]
struct InputArgs {
    /// HTML file, or `-` for stdin
    #[arg(default_value = "-")]
    input: String,
}

#[derive(clap::Args)]
struct ParseArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Print blocks as JSON
    #[arg(long)]
    json: bool,

    /// Keep whitespace-only text between shortcodes
    #[arg(long)]
    keep_whitespace: bool,
}

#[derive(clap::Args)]
struct LinkFlags {
    /// Site slug used as the link prefix
    #[arg(long)]
    site: Option<String>,

    /// Maximum links per product or category name
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    max_links: Option<u32>,

    /// Catalog file listing linkable products and categories
    #[arg(long)]
    catalog: Option<PathBuf>,
}

#[derive(clap::Args)]
struct LinkArgs {
    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    link: LinkFlags,
}

#[derive(clap::Args)]
struct UnlinkArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Print the number of auto-links instead of removing them
    #[arg(long)]
    count: bool,
}

#[derive(clap::Args)]
struct HeadingsArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Print a table of contents instead of the rewritten HTML
    #[arg(long)]
    toc: bool,
}

#[derive(clap::Args)]
struct RenderArgs {
    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    link: LinkFlags,

    /// Print the processed content and resolution as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct RenderReport<'a> {
    #[serde(flatten)]
    content: &'a ProcessedContent,
    resolved: Vec<String>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config)?;

    match cli.command {
        Command::Parse(args) => {
            let html = read_input(&args.input.input)?;
            let mut options = config.parse_options();
            options.keep_whitespace_gaps |= args.keep_whitespace;
            let blocks = parse_content_with(&html, options);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&blocks)?);
            } else {
                print!("{}", snapshot::normalize(&blocks).to_text());
            }
        }
        Command::Refs(args) => {
            let html = read_input(&args.input)?;
            let refs = extract_references(&html);
            for slug in &refs.product_slugs {
                println!("product {slug}");
            }
            for slug in &refs.category_slugs {
                println!("category {slug}");
            }
        }
        Command::Link(args) => {
            let html = read_input(&args.input.input)?;
            let items = load_catalog(&config, &args.link)?.linkable_items();
            let before = count_auto_links(&html);
            let linked = auto_link(&html, &items, &link_options(&config, &args.link));
            log::info!("added {} auto-links", count_auto_links(&linked).saturating_sub(before));
            print!("{linked}");
        }
        Command::Unlink(args) => {
            let html = read_input(&args.input.input)?;
            if args.count {
                println!("{}", count_auto_links(&html));
            } else {
                print!("{}", remove_auto_links(&html));
            }
        }
        Command::Headings(args) => {
            let html = read_input(&args.input.input)?;
            if args.toc {
                for entry in table_of_contents(&html) {
                    println!("{}", summary::toc_line(&entry));
                }
            } else {
                print!("{}", inject_heading_ids(&html));
            }
        }
        Command::Render(args) => render(&config, args)?,
    }

    Ok(())
}

fn render(config: &Config, args: RenderArgs) -> Result<()> {
    let html = read_input(&args.input.input)?;
    let catalog = load_catalog(config, &args.link)?;
    let items = catalog.linkable_items();

    let mut options = config.pipeline_options();
    if options.auto_link.is_some() {
        options.auto_link = Some(link_options(config, &args.link));
    }
    let processed = ContentPipeline::new(&items, options).process(&html);

    let products = catalog.products_by_slug();
    let by_category = catalog.products_by_category();
    let resolved = resolve_blocks(&processed.blocks, &Catalog::new(&products, &by_category));
    let lines: Vec<String> = resolved.iter().map(summary::describe).collect();

    if args.json {
        let report = RenderReport {
            content: &processed,
            resolved: lines,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} blocks, {} auto-links, {} headings",
        processed.blocks.len(),
        count_auto_links(&processed.html),
        processed.toc.len()
    );
    for line in lines {
        println!("  {line}");
    }
    Ok(())
}

fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config_path = path.unwrap_or_else(Config::config_path);
    log::info!("Config path: {}", config_path.display());
    let config = Config::load_from_path(&config_path)?;
    if config.is_none() {
        log::info!("No config file found, using defaults");
    }
    Ok(config.unwrap_or_default())
}

/// `--catalog` wins over the configured catalog; with neither, nothing links.
fn load_catalog(config: &Config, flags: &LinkFlags) -> Result<ProductCatalog> {
    let catalog = match &flags.catalog {
        Some(path) => Some(ProductCatalog::load_from_path(path)?),
        None => config.load_catalog()?,
    };
    Ok(catalog.unwrap_or_else(|| {
        log::warn!("No catalog configured; nothing will be linked or resolved");
        ProductCatalog::default()
    }))
}

fn link_options(config: &Config, flags: &LinkFlags) -> AutoLinkOptions {
    let site = flags.site.as_deref().unwrap_or(&config.site_slug);
    let max = flags
        .max_links
        .map_or(config.auto_link.max_links_per_term, |n| n as usize);
    AutoLinkOptions::new(site).with_max_links_per_term(max)
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut html = String::new();
        io::stdin()
            .read_to_string(&mut html)
            .context("cannot read stdin")?;
        return Ok(html);
    }
    std::fs::read_to_string(input).with_context(|| format!("cannot read '{input}'"))
}
