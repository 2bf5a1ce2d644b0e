// src/store/snapshot.rs

//! Immutable package snapshots and the handle that swaps them

use crate::manifest::Manifest;
use parking_lot::RwLock;
use std::sync::Arc;

/// Point-in-time view of the full package collection
#[derive(Debug)]
pub struct Snapshot {
    manifests: Vec<Manifest>,
}

impl Snapshot {
    pub fn new(manifests: Vec<Manifest>) -> Self {
        Self { manifests }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn manifests(&self) -> &[Manifest] {
        &self.manifests
    }

    pub fn len(&self) -> usize {
        self.manifests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.manifests.is_empty()
    }
}

/// Shared handle to the current snapshot
///
/// The lock only guards the pointer. Readers clone the `Arc` and release
/// the lock before evaluating anything; writers build the replacement
/// outside the lock and hold it only for the swap.
#[derive(Debug, Clone)]
pub struct SnapshotHandle {
    current: Arc<RwLock<Arc<Snapshot>>>,
}

impl SnapshotHandle {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(snapshot))),
        }
    }

    /// Current snapshot; stays valid for as long as the caller holds it
    pub fn load(&self) -> Arc<Snapshot> {
        Arc::clone(&self.current.read())
    }

    /// Install a new snapshot, returning the previous one
    pub fn replace(&self, snapshot: Snapshot) -> Arc<Snapshot> {
        let next = Arc::new(snapshot);
        std::mem::replace(&mut *self.current.write(), next)
    }
}

impl Default for SnapshotHandle {
    fn default() -> Self {
        Self::new(Snapshot::empty())
    }
}
