// src/main.rs

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        #[cfg(feature = "server")]
        Some(Commands::Serve {
            config,
            bind,
            public_dir,
        }) => commands::cmd_serve(config, bind, public_dir).await,
        Some(Commands::Search {
            public_dir,
            kibana,
            category,
            package,
            internal,
        }) => commands::cmd_search(&public_dir, kibana, category, package, internal),
        Some(Commands::Categories {
            public_dir,
            internal,
        }) => commands::cmd_categories(&public_dir, internal),
        None => {
            // No command provided, show help
            println!("Integration Registry v{}", env!("CARGO_PKG_VERSION"));
            println!("Run 'registry --help' for usage information");
            Ok(())
        }
    }
}
