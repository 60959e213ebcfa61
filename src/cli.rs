//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Storegen storefront route generator CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name (default: storegen.toml)
    #[arg(short = 'C', long, default_value = "storegen.toml")]
    pub config: PathBuf,

    /// Catalog snapshot path (relative to project root)
    #[arg(short = 'k', long)]
    pub catalog: Option<PathBuf>,

    /// Output directory path (relative to project root)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Build the route manifest from the catalog snapshot
    Build {
        /// Clear the output directory before writing
        #[arg(long)]
        clean: bool,
    },

    /// Print planned routes without writing the manifest
    Routes,
}

#[allow(unused)]
impl Cli {
    pub const fn is_build(&self) -> bool {
        matches!(self.command, Commands::Build { .. })
    }
    pub const fn is_routes(&self) -> bool {
        matches!(self.command, Commands::Routes)
    }
}
