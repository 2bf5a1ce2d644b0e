// src/search/resolve.rs

//! Version resolution
//!
//! Collapses filtered candidates into the exposed result set in a single
//! pass. Newest-only mode keeps one best-so-far manifest per name and
//! replaces it only when a strictly newer version arrives.

use crate::manifest::Manifest;
use crate::query::ResolveMode;
use crate::version::compare;
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::warn;

/// Exposed manifests keyed by name, then by version string
#[derive(Debug, Default)]
pub struct ResultSet<'a> {
    packages: HashMap<&'a str, HashMap<String, &'a Manifest>>,
    violations: usize,
}

impl<'a> ResultSet<'a> {
    /// Number of exposed manifests
    pub fn len(&self) -> usize {
        self.packages.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Duplicate (name, version) pairs seen during resolution
    pub fn data_quality_violations(&self) -> usize {
        self.violations
    }

    /// All exposed manifests in arbitrary order
    pub fn manifests(&self) -> impl Iterator<Item = &'a Manifest> + '_ {
        self.packages.values().flat_map(|versions| versions.values().copied())
    }
}

/// Single-pass resolver over filtered candidates
pub struct Resolver<'a> {
    mode: ResolveMode,
    newest: HashMap<&'a str, &'a Manifest>,
    all: HashMap<&'a str, HashMap<String, &'a Manifest>>,
    violations: usize,
}

impl<'a> Resolver<'a> {
    pub fn new(mode: ResolveMode) -> Self {
        Self {
            mode,
            newest: HashMap::new(),
            all: HashMap::new(),
            violations: 0,
        }
    }

    /// Offer a candidate that survived filtering
    pub fn offer(&mut self, manifest: &'a Manifest) {
        match self.mode {
            ResolveMode::NewestOnly => self.offer_newest(manifest),
            ResolveMode::AllVersions => self.offer_any(manifest),
        }
    }

    fn offer_newest(&mut self, manifest: &'a Manifest) {
        let Some(current) = self.newest.get_mut(manifest.name.as_str()) else {
            self.newest.insert(manifest.name.as_str(), manifest);
            return;
        };

        match compare(&manifest.version, &current.version) {
            Ordering::Greater => *current = manifest,
            Ordering::Less => {}
            Ordering::Equal => {
                // Duplicate key in the store; the later manifest wins
                warn!(
                    "Duplicate package version {}@{} (also seen as {}), keeping the later one",
                    manifest.name, manifest.version, current.version
                );
                self.violations += 1;
                *current = manifest;
            }
        }
    }

    fn offer_any(&mut self, manifest: &'a Manifest) {
        let versions = self.all.entry(manifest.name.as_str()).or_default();
        if versions
            .insert(manifest.version.to_string(), manifest)
            .is_some()
        {
            warn!(
                "Duplicate package version {}@{}, keeping the later one",
                manifest.name, manifest.version
            );
            self.violations += 1;
        }
    }

    /// Finish resolution and hand back the exposed set
    pub fn finish(self) -> ResultSet<'a> {
        let packages = match self.mode {
            ResolveMode::AllVersions => self.all,
            ResolveMode::NewestOnly => self
                .newest
                .into_iter()
                .map(|(name, manifest)| {
                    let mut versions = HashMap::with_capacity(1);
                    versions.insert(manifest.version.to_string(), manifest);
                    (name, versions)
                })
                .collect(),
        };

        ResultSet {
            packages,
            violations: self.violations,
        }
    }
}

/// Resolve a stream of filtered candidates
pub fn resolve<'a, I>(candidates: I, mode: ResolveMode) -> ResultSet<'a>
where
    I: IntoIterator<Item = &'a Manifest>,
{
    let mut resolver = Resolver::new(mode);
    for manifest in candidates {
        resolver.offer(manifest);
    }
    resolver.finish()
}
