// src/categories.rs

//! Category listing
//!
//! Counts how many packages carry each category. Only the newest visible
//! version of each package is counted, so a category dropped by a newer
//! release no longer counts the package.

use crate::error::Result;
use crate::json;
use crate::manifest::Manifest;
use crate::query::{Query, ResolveMode};
use crate::search::{filter, resolve};
use serde::Serialize;
use std::collections::BTreeMap;

/// One category in the listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: String,
    pub title: String,
    pub count: usize,
}

/// Display title for a category id
pub fn category_title(id: &str) -> String {
    match id {
        "logs" => "Logs".to_string(),
        "metrics" => "Metrics".to_string(),
        "security" => "Security".to_string(),
        "monitoring" => "Monitoring".to_string(),
        "network" => "Network".to_string(),
        "datastore" => "Datastore".to_string(),
        "cloud" => "Cloud".to_string(),
        "containers" => "Containers".to_string(),
        _ => id.to_string(),
    }
}

/// Count categories over the newest visible version of each package
pub fn aggregate(manifests: &[Manifest], include_internal: bool) -> Vec<Category> {
    let query = Query::new().with_internal(include_internal);
    let visible = manifests.iter().filter(|m| filter::visible(m, &query));
    let newest = resolve::resolve(visible, ResolveMode::NewestOnly);

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for manifest in newest.manifests() {
        for category in &manifest.categories {
            *counts.entry(category.as_str()).or_insert(0) += 1;
        }
    }

    counts
        .into_iter()
        .map(|(id, count)| Category {
            id: id.to_string(),
            title: category_title(id),
            count,
        })
        .collect()
}

/// Render the category listing as pretty-printed JSON
pub fn render(categories: &[Category]) -> Result<Vec<u8>> {
    if categories.is_empty() {
        return Ok(b"[]".to_vec());
    }
    json::to_vec_pretty(categories)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use semver::Version;

    fn manifest(name: &str, version: &str, categories: &[&str]) -> Manifest {
        let mut m = Manifest::new(name, Version::parse(version).unwrap());
        m.categories = categories.iter().map(|c| c.to_string()).collect();
        m
    }

    #[test]
    fn test_counts_newest_only() {
        let manifests = vec![
            manifest("example", "0.9.0", &["logs", "security"]),
            manifest("example", "1.0.0", &["logs"]),
            manifest("other", "2.0.0", &["logs", "metrics"]),
        ];
        let categories = aggregate(&manifests, false);
        assert_eq!(
            categories,
            vec![
                Category {
                    id: "logs".into(),
                    title: "Logs".into(),
                    count: 2,
                },
                Category {
                    id: "metrics".into(),
                    title: "Metrics".into(),
                    count: 1,
                },
            ]
        );
    }

    #[test]
    fn test_internal_excluded_by_default() {
        let mut hidden = manifest("hidden", "1.0.0", &["custom"]);
        hidden.internal = true;
        let manifests = vec![hidden];
        assert!(aggregate(&manifests, false).is_empty());

        let categories = aggregate(&manifests, true);
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].title, "custom");
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&[]).unwrap(), b"[]");
    }

    #[test]
    fn test_render_shape() {
        let out = render(&[Category {
            id: "logs".into(),
            title: "Logs".into(),
            count: 3,
        }])
        .unwrap();
        let expected = "[\n  {\n    \"id\": \"logs\",\n    \"title\": \"Logs\",\n    \"count\": 3\n  }\n]";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }
}
