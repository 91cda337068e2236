use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "popcorntv")]
#[command(author, version, about = "Render TV markup for movies and shows")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the product page for a movie
    Product {
        /// JSON file with the movie record
        #[arg(long, required = true)]
        movie: PathBuf,

        /// JSON file with an array of suggested movies
        #[arg(long)]
        suggestions: Option<PathBuf>,

        /// The movie is already in the watch list
        #[arg(long)]
        in_watchlist: bool,
    },

    /// Render carousel tiles for a list of shows
    Carousel {
        /// JSON file with an array of show records
        #[arg(long, required = true)]
        shows: PathBuf,
    },

    /// List the placeholders of a template
    Placeholders {
        /// Template name (defaults to the configured product template)
        #[arg(long)]
        template: Option<String>,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
