// src/commands.rs
//! Command handlers for the registry CLI

use anyhow::{Context, Result};
use integration_registry::store::{DirectorySource, ManifestSource};
use integration_registry::{categories, search, Query, SearchParams};
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Load every manifest under a public directory
fn load_manifests(public_dir: &Path) -> Result<Vec<integration_registry::Manifest>> {
    let source = DirectorySource::from_public_dir(public_dir);
    let manifests = source
        .load()
        .with_context(|| format!("Failed to load packages from {}", public_dir.display()))?;
    info!("{} package manifests loaded from {}", manifests.len(), source.describe());
    Ok(manifests)
}

fn print_json(body: &[u8]) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(body)?;
    stdout.write_all(b"\n")?;
    Ok(())
}

/// Evaluate a search from command-line arguments
pub fn cmd_search(
    public_dir: &Path,
    kibana: Option<String>,
    category: Option<String>,
    package: Option<String>,
    internal: bool,
) -> Result<()> {
    let params = SearchParams {
        kibana,
        category,
        package,
        internal: internal.then(|| "true".to_string()),
    };
    let query = Query::from_params(&params)?;

    let manifests = load_manifests(public_dir)?;
    let body = search::evaluate(&query, &manifests)?;
    print_json(&body)
}

/// Print the category listing
pub fn cmd_categories(public_dir: &Path, internal: bool) -> Result<()> {
    let manifests = load_manifests(public_dir)?;
    let listing = categories::aggregate(&manifests, internal);
    print_json(&categories::render(&listing)?)
}

/// Run the HTTP server, layering CLI overrides on top of the config file
#[cfg(feature = "server")]
pub async fn cmd_serve(
    config_path: Option<std::path::PathBuf>,
    bind: Option<String>,
    public_dir: Option<std::path::PathBuf>,
) -> Result<()> {
    use integration_registry::server::{self, RegistryConfig};

    let mut config = match config_path {
        Some(ref path) => RegistryConfig::load(path)?,
        None => RegistryConfig::default(),
    };
    if let Some(bind) = bind {
        config.server.bind = bind;
    }
    if let Some(dir) = public_dir {
        config.storage.public_dir = dir;
    }
    config.validate()?;

    server::run_server(config.to_server_config()?).await
}
