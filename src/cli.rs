// src/cli.rs
//! CLI definitions for the package registry
//!
//! This module contains all command-line interface definitions using clap.
//! The actual command implementations are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "registry")]
#[command(version)]
#[command(about = "Read-only package catalog with version-aware search", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP server
    #[cfg(feature = "server")]
    Serve {
        /// Path to a TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the bind address (e.g. 0.0.0.0:8080)
        #[arg(long)]
        bind: Option<String>,

        /// Override the public directory
        #[arg(long)]
        public_dir: Option<PathBuf>,
    },

    /// Evaluate a search query and print the JSON result
    Search {
        /// Public directory containing package/*/manifest.yml
        #[arg(short, long, default_value = "./public")]
        public_dir: PathBuf,

        /// Only packages compatible with this Kibana version
        #[arg(long)]
        kibana: Option<String>,

        /// Only packages in this category
        #[arg(long)]
        category: Option<String>,

        /// Exact package name; lists every version
        #[arg(long)]
        package: Option<String>,

        /// Include internal packages
        #[arg(long)]
        internal: bool,
    },

    /// Print category counts for the newest packages
    Categories {
        /// Public directory containing package/*/manifest.yml
        #[arg(short, long, default_value = "./public")]
        public_dir: PathBuf,

        /// Include internal packages
        #[arg(long)]
        internal: bool,
    },
}
