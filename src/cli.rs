// src/cli.rs
//! CLI definitions for Larder
//!
//! This module contains all command-line interface definitions using clap.
//! The actual command implementations are in the `commands` module.

use clap::{Args, Parser, Subcommand};
use larder::catalog::{DEFAULT_OUTPUT_PATH, DEFAULT_RECIPES_DIR};

#[derive(Parser)]
#[command(name = "larder")]
#[command(author = "Larder Contributors")]
#[command(version)]
#[command(about = "Validate a recipe catalog and generate its JSON index", long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args)]
pub struct CatalogArgs {
    /// Recipes root directory
    #[arg(long, env = "LARDER_RECIPES_DIR", default_value = DEFAULT_RECIPES_DIR)]
    pub recipes_dir: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate every recipe and report all problems
    Check {
        #[command(flatten)]
        catalog: CatalogArgs,
    },

    /// Validate every recipe and write the JSON index
    Generate {
        #[command(flatten)]
        catalog: CatalogArgs,

        /// Output file for the index
        #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
        output: String,
    },
}
