mod cli;

use popcorntv::config;
use popcorntv::recipes::CarouselItemFormatter;
use popcorntv_common::{Movie, Show};
use popcorntv_template::{BundledSource, TemplateSource};

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use serde::de::DeserializeOwned;
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag.
    // Logs go to stderr; stdout only carries markup.
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "popcorntv=trace,popcorntv_template=trace".to_string()
        } else {
            "popcorntv=info,popcorntv_template=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Product {
            movie,
            suggestions,
            in_watchlist,
        } => render_product(
            &movie,
            suggestions.as_deref(),
            in_watchlist,
            cli.config.as_deref(),
        ),
        Commands::Carousel { shows } => render_carousel(&shows),
        Commands::Placeholders { template } => {
            list_placeholders(template.as_deref(), cli.config.as_deref())
        }
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("popcorntv {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {:?}", path))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {:?}", path))
}

fn render_product(
    movie_path: &Path,
    suggestions_path: Option<&Path>,
    in_watchlist: bool,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;

    let movie: Movie = read_json(movie_path)?;
    let suggestions: Vec<Movie> = match suggestions_path {
        Some(path) => read_json(path)?,
        None => Vec::new(),
    };

    tracing::info!("Rendering product page for {:?}", movie.title);
    let xml = config
        .product_formatter()
        .format(&movie, &suggestions, in_watchlist)
        .with_context(|| format!("Failed to render product page for movie {}", movie.id))?;

    println!("{}", xml);
    Ok(())
}

fn render_carousel(shows_path: &Path) -> Result<()> {
    let shows: Vec<Show> = read_json(shows_path)?;

    tracing::info!("Rendering {} carousel tiles", shows.len());
    let xml = CarouselItemFormatter
        .format_all(&shows)
        .context("Failed to render carousel")?;

    println!("{}", xml);
    Ok(())
}

fn list_placeholders(template: Option<&str>, config_path: Option<&Path>) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let name = template.unwrap_or(&config.product.template);

    let template = config
        .template_source()
        .load_template(name)
        .with_context(|| format!("Failed to load template {:?}", name))?;

    for placeholder in template.placeholders() {
        println!("{}", placeholder);
    }
    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    let config = match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            config
        }
        None => {
            println!("No config file specified, using defaults");
            config::Config::default()
        }
    };

    match &config.templates.dir {
        Some(dir) => println!("  Templates: {}", dir.display()),
        None => println!(
            "  Templates: bundled ({})",
            BundledSource::names().collect::<Vec<_>>().join(", ")
        ),
    }
    println!("  Extension: {}", config.templates.extension);
    println!("  Cache: {}", config.templates.cache);
    println!("  Strict placeholders: {}", config.templates.strict);
    println!("  Product template: {}", config.product.template);
    println!("  Content type: {}", config.product.content_type);

    Ok(())
}
