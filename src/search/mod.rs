// src/search/mod.rs

//! Query evaluation engine
//!
//! Manifests flow through three stages:
//! - [`filter`] drops manifests the query excludes
//! - [`resolve`] collapses versions per package name
//! - [`render`] sorts and projects the survivors to JSON
//!
//! Evaluation is synchronous and request-local; the manifest slice is only
//! ever borrowed.

pub mod filter;
pub mod render;
pub mod resolve;

pub use render::PackageSummary;
pub use resolve::{Resolver, ResultSet};

use crate::error::Result;
use crate::manifest::Manifest;
use crate::query::Query;
use tracing::debug;

/// Filter and resolve without rendering
pub fn select<'a>(query: &'a Query, manifests: &'a [Manifest]) -> ResultSet<'a> {
    resolve::resolve(filter::apply(manifests, query), query.mode())
}

/// Evaluate a query against a set of manifests, returning JSON bytes
pub fn evaluate(query: &Query, manifests: &[Manifest]) -> Result<Vec<u8>> {
    let results = select(query, manifests);
    debug!(
        "Query {:?} matched {} of {} manifests ({} duplicate versions)",
        query,
        results.len(),
        manifests.len(),
        results.data_quality_violations()
    );
    render::render(&results)
}
