// src/lib.rs

//! Integration Registry
//!
//! Read-only package catalog: answers filtered search queries over an
//! in-memory collection of versioned package manifests and renders a
//! deterministic JSON projection of the matches.
//!
//! # Architecture
//!
//! - Store: manifests loaded once into an immutable snapshot, swapped
//!   atomically on reload
//! - Query: request parameters validated once into a typed value
//! - Search: filter, resolve newest (or all) versions, render sorted JSON
//! - Server: thin axum layer mapping the above onto HTTP

pub mod categories;
mod error;
mod json;
pub mod manifest;
pub mod query;
pub mod search;
pub mod store;
pub mod version;

#[cfg(feature = "server")]
pub mod server;

pub use categories::Category;
pub use error::{Error, Result};
pub use manifest::{Manifest, Requirement};
pub use query::{Query, ResolveMode, SearchParams};
pub use search::evaluate;
pub use store::{DirectorySource, ManifestSource, PackageStore, Snapshot, SnapshotHandle};
pub use version::PlatformRequirement;
