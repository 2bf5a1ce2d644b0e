// src/store/mod.rs

//! Package store
//!
//! Loads manifests from a [`ManifestSource`] into an immutable
//! [`Snapshot`] and installs refreshed snapshots atomically. Queries never
//! touch the source; they evaluate against whichever snapshot was current
//! when they started.

mod snapshot;
mod source;

pub use snapshot::{Snapshot, SnapshotHandle};
pub use source::{DirectorySource, ManifestSource, MANIFEST_FILE};

#[cfg(test)]
pub use source::StaticSource;

use crate::error::{Error, Result};
use crate::manifest::Manifest;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{info, warn};

/// Report duplicate `(name, version)` pairs
///
/// Duplicates are kept in the snapshot (resolution tolerates them) but
/// each one is logged as an upstream data defect.
pub fn find_duplicates(manifests: &[Manifest]) -> Vec<Error> {
    let mut seen = HashSet::with_capacity(manifests.len());
    manifests
        .iter()
        .filter(|m| !seen.insert((m.name.as_str(), m.version.to_string())))
        .map(|m| Error::DataQuality(format!("duplicate manifest {}@{}", m.name, m.version)))
        .collect()
}

/// Source plus the snapshot currently being served from it
pub struct PackageStore {
    source: Box<dyn ManifestSource>,
    handle: SnapshotHandle,
}

impl PackageStore {
    /// Create a store with an empty snapshot; call [`load_initial`] before serving
    ///
    /// [`load_initial`]: PackageStore::load_initial
    pub fn new(source: impl ManifestSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            handle: SnapshotHandle::default(),
        }
    }

    /// Create a store and prefill it
    pub fn open(source: impl ManifestSource + 'static) -> Result<Self> {
        let store = Self::new(source);
        store.load_initial()?;
        Ok(store)
    }

    /// Load the first snapshot
    pub fn load_initial(&self) -> Result<usize> {
        let count = self.refresh()?;
        info!("{} package manifests loaded into memory", count);
        Ok(count)
    }

    /// Reload from the source and swap in the new snapshot
    ///
    /// On failure the previous snapshot stays in place.
    pub fn refresh(&self) -> Result<usize> {
        let manifests = self.source.load()?;
        for problem in find_duplicates(&manifests) {
            warn!("{} (source: {})", problem, self.source.describe());
        }

        let count = manifests.len();
        self.handle.replace(Snapshot::new(manifests));
        Ok(count)
    }

    /// Current snapshot
    pub fn snapshot(&self) -> Arc<Snapshot> {
        self.handle.load()
    }

    pub fn describe(&self) -> String {
        self.source.describe()
    }
}
