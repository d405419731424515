use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "catalog-search",
    about = "Look up and rank products in a JSON catalog",
    version
)]
pub struct Cli {
    /// Optional JSON config file (tie_break, parallel_threshold, max_results)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search by description and type tags
    Search {
        /// Catalog file: a JSON array of {model, type, name} records
        #[arg(short, long)]
        catalog: PathBuf,

        /// Description tag (repeatable)
        #[arg(short, long = "desc")]
        desc: Vec<String>,

        /// Type tag (repeatable)
        #[arg(short = 't', long = "type")]
        types: Vec<String>,

        /// Print hit counts next to each model
        #[arg(long)]
        scores: bool,
    },

    /// Look up one product by model
    Lookup {
        #[arg(short, long)]
        catalog: PathBuf,

        /// Model, matched case-insensitively
        model: String,
    },

    /// Check the catalog index invariants
    Verify {
        #[arg(short, long)]
        catalog: PathBuf,
    },

    /// Show index sizes
    Stats {
        #[arg(short, long)]
        catalog: PathBuf,
    },
}
