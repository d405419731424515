use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use catalog_search::{find_violations, verify_index, CatalogConfig, CatalogIndex, JsonCatalog};

mod cli;
use cli::{Cli, Commands};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli, &mut std::io::stdout().lock()) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    let config = match &cli.config {
        Some(path) => CatalogConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => CatalogConfig::default(),
    };

    match cli.command {
        Commands::Search {
            catalog,
            desc,
            types,
            scores,
        } => {
            let index = load(&catalog, config)?;
            for scored in index.search_scored(&desc, &types) {
                if scores {
                    writeln!(out, "{}\t{}", scored.hits, scored.product.model)?;
                } else {
                    writeln!(out, "{}", scored.product.model)?;
                }
            }
        }
        Commands::Lookup { catalog, model } => {
            let index = load(&catalog, config)?;
            match index.get_product(&model) {
                Some(product) => writeln!(out, "{}", serde_json::to_string_pretty(product)?)?,
                None => bail!("No product with model '{}'", model),
            }
        }
        Commands::Verify { catalog } => {
            let index = load(&catalog, config)?;
            match verify_index(&index) {
                Ok(report) => writeln!(out, "✓ {}", report)?,
                Err(_) => {
                    let violations = find_violations(&index);
                    for violation in &violations {
                        writeln!(out, "✗ {}", violation)?;
                    }
                    bail!("{} invariant violation(s)", violations.len());
                }
            }
        }
        Commands::Stats { catalog } => {
            let index = load(&catalog, config)?;
            writeln!(out, "products: {}", index.len())?;
            writeln!(out, "types:    {}", index.types().count())?;
            writeln!(out, "tokens:   {}", index.tokens().count())?;
        }
    }

    Ok(())
}

fn load(path: &Path, config: CatalogConfig) -> Result<CatalogIndex> {
    CatalogIndex::from_source(&JsonCatalog::new(path), config)
        .with_context(|| format!("Failed to build catalog index from {}", path.display()))
}
