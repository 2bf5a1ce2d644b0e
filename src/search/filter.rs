// src/search/filter.rs

//! Per-manifest inclusion predicates
//!
//! Each predicate is a pure function of `(manifest, query)`. Visibility
//! runs first so internal manifests never reach the resolver unless the
//! query asks for them.

use crate::manifest::Manifest;
use crate::query::Query;

/// Exclude internal manifests unless the query includes them
pub fn visible(manifest: &Manifest, query: &Query) -> bool {
    !manifest.internal || query.include_internal
}

/// Keep manifests tagged with the query's category, if any
pub fn in_category(manifest: &Manifest, query: &Query) -> bool {
    match query.category {
        Some(ref category) => manifest.has_category(category),
        None => true,
    }
}

/// Keep manifests compatible with the query's platform version, if any
pub fn compatible(manifest: &Manifest, query: &Query) -> bool {
    match query.platform_version {
        Some(ref platform) => manifest.supports_platform(platform),
        None => true,
    }
}

/// Keep manifests whose name matches the query's exact name, if any
pub fn name_matches(manifest: &Manifest, query: &Query) -> bool {
    match query.package {
        Some(ref name) => manifest.name == *name,
        None => true,
    }
}

/// Run the full pipeline
pub fn accepts(manifest: &Manifest, query: &Query) -> bool {
    visible(manifest, query)
        && in_category(manifest, query)
        && compatible(manifest, query)
        && name_matches(manifest, query)
}

/// Iterate over the manifests a query accepts, in input order
pub fn apply<'a>(
    manifests: &'a [Manifest],
    query: &'a Query,
) -> impl Iterator<Item = &'a Manifest> + 'a {
    manifests.iter().filter(move |m| accepts(m, query))
}
