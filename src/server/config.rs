// src/server/config.rs
//! Configuration file parsing for the registry server
//!
//! Supports TOML configuration files with the following sections:
//! - [server] - Bind address
//! - [storage] - Public directory, snapshot reload interval
//! - [cache] - Cache-Control max-age per endpoint group

use crate::server::ServerConfig;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// TOML configuration file structure
#[derive(Debug, Default, Deserialize)]
pub struct RegistryConfig {
    /// Server settings
    #[serde(default)]
    pub server: ServerSection,

    /// Storage settings
    #[serde(default)]
    pub storage: StorageSection,

    /// Response caching settings
    #[serde(default)]
    pub cache: CacheSection,
}

/// Server configuration section
#[derive(Debug, Deserialize)]
pub struct ServerSection {
    /// Public API bind address
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:8080".to_string()
}

/// Storage configuration section
#[derive(Debug, Deserialize)]
pub struct StorageSection {
    /// Directory served as-is; packages live in `<public_dir>/package`
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,

    /// How often to reload manifests (e.g., "5m"; "0" disables reloading)
    #[serde(default = "default_reload_interval")]
    pub reload_interval: String,
}

impl Default for StorageSection {
    fn default() -> Self {
        Self {
            public_dir: default_public_dir(),
            reload_interval: default_reload_interval(),
        }
    }
}

fn default_public_dir() -> PathBuf {
    PathBuf::from("./public")
}

fn default_reload_interval() -> String {
    "0".to_string()
}

/// Cache-Control configuration section
#[derive(Debug, Deserialize)]
pub struct CacheSection {
    /// max-age for /search
    #[serde(default = "default_one_hour")]
    pub search: String,

    /// max-age for /categories
    #[serde(default = "default_one_hour")]
    pub categories: String,

    /// max-age for static files
    #[serde(default = "default_one_day")]
    pub catch_all: String,
}

impl Default for CacheSection {
    fn default() -> Self {
        Self {
            search: default_one_hour(),
            categories: default_one_hour(),
            catch_all: default_one_day(),
        }
    }
}

fn default_one_hour() -> String {
    "1h".to_string()
}

fn default_one_day() -> String {
    "24h".to_string()
}

impl RegistryConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: RegistryConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.server
            .bind
            .parse::<SocketAddr>()
            .with_context(|| format!("Invalid server.bind address: {}", self.server.bind))?;

        parse_duration(&self.storage.reload_interval)
            .context("Invalid storage.reload_interval")?;
        parse_duration(&self.cache.search).context("Invalid cache.search")?;
        parse_duration(&self.cache.categories).context("Invalid cache.categories")?;
        parse_duration(&self.cache.catch_all).context("Invalid cache.catch_all")?;

        if self.storage.public_dir.as_os_str().is_empty() {
            anyhow::bail!("storage.public_dir must not be empty");
        }

        Ok(())
    }

    /// Convert to the internal ServerConfig structure
    pub fn to_server_config(&self) -> Result<ServerConfig> {
        let bind_addr = self.server.bind.parse()?;
        let reload = parse_duration(&self.storage.reload_interval)?;

        Ok(ServerConfig {
            bind_addr,
            public_dir: self.storage.public_dir.clone(),
            reload_interval: (!reload.is_zero()).then_some(reload),
            search_cache: parse_duration(&self.cache.search)?,
            categories_cache: parse_duration(&self.cache.categories)?,
            catch_all_cache: parse_duration(&self.cache.catch_all)?,
        })
    }
}

/// Parse a human-readable duration string (e.g., "15m", "1h", "30s")
pub fn parse_duration(s: &str) -> Result<Duration> {
    let s = s.trim().to_lowercase();

    let (num_str, multiplier) = if let Some(n) = s.strip_suffix('d') {
        (n, 24 * 60 * 60)
    } else if let Some(n) = s.strip_suffix('h') {
        (n, 60 * 60)
    } else if let Some(n) = s.strip_suffix('m') {
        (n, 60)
    } else if let Some(n) = s.strip_suffix('s') {
        (n, 1)
    } else {
        // Assume seconds
        (s.as_str(), 1)
    };

    let num: u64 = num_str
        .trim()
        .parse()
        .with_context(|| format!("Invalid duration number: {}", num_str))?;

    Ok(Duration::from_secs(num * multiplier))
}
