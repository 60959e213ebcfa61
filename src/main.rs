//! Storegen - storefront route and pagination generator.
//!
//! Two-phase pipeline over a commerce catalog snapshot:
//!
//! 1. Ingestion: every entity streams through a per-kind assigner and
//!    receives its canonical route; blogs and articles go through the
//!    durable handle registry.
//! 2. Page generation: bulk reads per entity kind are expanded into page
//!    descriptors (with pagination for collections and blogs) and written
//!    as a route manifest.

mod catalog;
mod cli;
mod config;
mod ingest;
mod kv;
mod pages;
mod pagination;
mod utils;

use anyhow::{Context, Result};
use catalog::Catalog;
use clap::Parser;
use cli::{Cli, Commands};
use config::StoreConfig;
use ingest::registry::BlogRegistry;
use kv::FileKv;
use pages::Manifest;
use std::fs;

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));
    let config: &'static StoreConfig = Box::leak(Box::new(load_config(cli)?));

    match &cli.command {
        Commands::Build { .. } => build(config),
        Commands::Routes => routes(config),
    }
}

/// Load and validate configuration from CLI arguments
fn load_config(cli: &'static Cli) -> Result<StoreConfig> {
    let root = cli.root.as_deref().unwrap_or(std::path::Path::new("./"));
    let config_path = root.join(&cli.config);

    let mut config = if config_path.exists() {
        StoreConfig::from_path(&config_path)?
    } else {
        StoreConfig::default()
    };
    config.update_with_cli(cli);
    config.validate()?;

    Ok(config)
}

/// Run the pipeline and write the route manifest.
fn build(config: &'static StoreConfig) -> Result<()> {
    let manifest = generate(config)?;

    let output = &config.build.output;
    if config.build.clean && output.exists() {
        fs::remove_dir_all(output)
            .with_context(|| format!("Failed to clear output directory: {}", output.display()))?;
    }

    let path = manifest.write(output)?;
    log!("build"; "wrote {} routes to {}", manifest.len(), path.display());
    Ok(())
}

/// Run the pipeline and print every planned route.
fn routes(config: &'static StoreConfig) -> Result<()> {
    let manifest = generate(config)?;
    for page in manifest.iter() {
        println!("{}", page.path);
    }
    Ok(())
}

/// Ingest the catalog and expand it into a route manifest.
fn generate(config: &'static StoreConfig) -> Result<Manifest> {
    let mut catalog = Catalog::load(&config.build.catalog)?;
    log!("catalog"; "loaded {} entities from {}", catalog.len(), config.build.catalog.display());

    let kv = FileKv::new(&config.build.cache);
    let registry = BlogRegistry::new(&kv);
    ingest::annotate_catalog(&mut catalog, config, &registry)?;

    let mut manifest = Manifest::new();
    pages::build_pages(&catalog, config, &mut manifest)?;
    log!("routes"; "planned {} pages", manifest.len());

    Ok(manifest)
}
