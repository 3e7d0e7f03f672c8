//! Acme Product Management CLI
//!
//! Plays the browser: takes a navigation path, routes it and prints the page.

use std::path::PathBuf;
use std::sync::Arc;

use acme_products::{
    app::App,
    error::Result,
    models::{Config, ProductId},
    services::{self, InMemoryProductSource, LocalProductSource, ProductService, ProductSource},
    views::{Page, ProductListView},
};
use clap::{Parser, Subcommand};
use url::Url;

/// Acme Product Management
#[derive(Parser, Debug)]
#[command(
    name = "acme-products",
    version,
    about = "Browse the Acme product catalog"
)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, global = true, default_value = "acme.toml")]
    config: PathBuf,

    /// Product data: an http(s) URL or a path to products.json
    #[arg(long, global = true)]
    source: Option<String>,

    /// Use the built-in sample catalog
    #[arg(long, global = true, conflicts_with = "source")]
    sample: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Navigate to any path (e.g. /welcome, /products, /products/5)
    Navigate {
        #[arg(default_value = "/")]
        path: String,
    },

    /// Show the product list
    List {
        /// Only show products whose name contains this text
        #[arg(short, long)]
        filter: Option<String>,

        /// Show the image column
        #[arg(long)]
        show_image: bool,

        /// Click the star rating of this product
        #[arg(long)]
        rate: Option<u32>,
    },

    /// Show one product
    Detail {
        /// Product id as it would appear in the path
        id: String,
    },

    /// Validate configuration
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Pick the product source: CLI flags first, then the configuration.
fn build_source(cli: &Cli, config: &Config) -> Result<Arc<dyn ProductSource>> {
    if cli.sample {
        return Ok(Arc::new(InMemoryProductSource::sample()));
    }

    match cli.source.as_deref() {
        Some(source) => match Url::parse(source) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {
                Ok(Arc::new(ProductService::from_url(&config.client, url)?))
            }
            _ => Ok(Arc::new(LocalProductSource::new(source))),
        },
        None => services::from_config(&config.client),
    }
}

/// Click the stars of product `raw` in the list, warning when it is not shown.
fn rate_product(view: &mut ProductListView, raw: u32) -> Option<String> {
    let clicked = ProductId::new(raw).and_then(|id| view.click_rating(id));
    if clicked.is_none() {
        log::warn!("Product {} is not in the visible list", raw);
    }
    clicked
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load_or_default(&cli.config);
    log::debug!("Loaded configuration from {}", cli.config.display());

    if let Command::Validate = cli.command {
        log::info!("Validating configuration...");
        if let Err(e) = config.validate() {
            log::error!("Config validation failed: {}", e);
            return Err(e);
        }
        log::info!("✓ Config OK");
        return Ok(());
    }

    let source = build_source(&cli, &config)?;
    let app = App::new(config, source);

    let navigation = match &cli.command {
        Command::Navigate { path } => app.navigate(path).await?,
        Command::Detail { id } => app.navigate(&format!("/products/{id}")).await?,
        Command::List {
            filter,
            show_image,
            rate,
        } => {
            let mut navigation = app.navigate("/products").await?;
            if let Page::ProductList(view) = &mut navigation.page {
                if let Some(filter) = filter {
                    view.set_list_filter(filter.as_str());
                }
                if *show_image {
                    view.toggle_image();
                }
                if let Some(raw) = *rate {
                    rate_product(view, raw);
                }
            }
            navigation
        }
        Command::Validate => return Ok(()),
    };

    println!("{}", app.render(&navigation));
    Ok(())
}
