// src/store/source.rs

//! Manifest sources
//!
//! A source hands back the complete, already-parsed manifest collection.
//! The on-disk layout is one directory per package version, each holding
//! a `manifest.yml`:
//!
//! ```text
//! public/package/
//!   example-0.9.0/manifest.yml
//!   example-1.0.0/manifest.yml
//! ```

use crate::error::{Error, Result};
use crate::manifest::Manifest;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the manifest file inside each package directory
pub const MANIFEST_FILE: &str = "manifest.yml";

/// Something that can supply the full manifest collection on demand
pub trait ManifestSource: Send + Sync {
    fn load(&self) -> Result<Vec<Manifest>>;

    /// Human-readable description for logs
    fn describe(&self) -> String;
}

/// Loads manifests from `<package_dir>/*/manifest.yml`
#[derive(Debug, Clone)]
pub struct DirectorySource {
    package_dir: PathBuf,
}

impl DirectorySource {
    pub fn new(package_dir: impl Into<PathBuf>) -> Self {
        Self {
            package_dir: package_dir.into(),
        }
    }

    /// Source for the `package` directory under a public directory
    pub fn from_public_dir(public_dir: &Path) -> Self {
        Self::new(public_dir.join("package"))
    }

    fn read_manifest(path: &Path) -> Result<Manifest> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::StoreUnavailable(format!("failed to read {}: {}", path.display(), e))
        })?;
        Manifest::from_yaml(&text).map_err(|e| {
            Error::StoreUnavailable(format!("failed to parse {}: {}", path.display(), e))
        })
    }
}

impl ManifestSource for DirectorySource {
    fn load(&self) -> Result<Vec<Manifest>> {
        let entries = std::fs::read_dir(&self.package_dir).map_err(|e| {
            Error::StoreUnavailable(format!(
                "failed to read package directory {}: {}",
                self.package_dir.display(),
                e
            ))
        })?;

        let mut dirs: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_dir())
            .collect();
        dirs.sort();

        let mut manifests = Vec::with_capacity(dirs.len());
        for dir in dirs {
            let manifest_path = dir.join(MANIFEST_FILE);
            if !manifest_path.is_file() {
                debug!("Skipping {} (no {})", dir.display(), MANIFEST_FILE);
                continue;
            }
            manifests.push(Self::read_manifest(&manifest_path)?);
        }

        Ok(manifests)
    }

    fn describe(&self) -> String {
        self.package_dir.display().to_string()
    }
}

/// Fixed in-memory collection
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    manifests: Vec<Manifest>,
}

#[cfg(test)]
impl StaticSource {
    pub fn new(manifests: Vec<Manifest>) -> Self {
        Self { manifests }
    }
}

#[cfg(test)]
impl ManifestSource for StaticSource {
    fn load(&self) -> Result<Vec<Manifest>> {
        Ok(self.manifests.clone())
    }

    fn describe(&self) -> String {
        format!("{} static manifests", self.manifests.len())
    }
}
