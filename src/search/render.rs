// src/search/render.rs

//! Deterministic JSON projection of a result set
//!
//! Entries are ordered by the composite key `name@version`, compared as
//! plain strings. This is intentionally not a version-aware order: for
//! all-versions output `10.0.0` sorts before `9.0.0`.

use crate::error::Result;
use crate::json;
use crate::manifest::Manifest;
use crate::search::resolve::ResultSet;
use serde::Serialize;

const KEY_SEPARATOR: char = '@';

/// Minimal per-package projection
///
/// Fields are declared in key order: entries serialize with their keys
/// sorted alphabetically.
#[derive(Debug, Serialize)]
pub struct PackageSummary<'a> {
    pub description: &'a str,
    pub download: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icons: Option<&'a serde_json::Value>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub internal: bool,
    pub name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'a str>,
    #[serde(rename = "type")]
    pub package_type: &'a str,
    pub version: String,
}

impl<'a> From<&'a Manifest> for PackageSummary<'a> {
    fn from(m: &'a Manifest) -> Self {
        Self {
            description: &m.description,
            download: m.download_path(),
            icons: m.icons.as_ref(),
            internal: m.internal,
            name: &m.name,
            title: m.title.as_deref(),
            package_type: &m.package_type,
            version: m.version.to_string(),
        }
    }
}

/// Flatten a result set into output order
pub fn sorted<'a>(results: &ResultSet<'a>) -> Vec<&'a Manifest> {
    let mut keyed: Vec<(String, &'a Manifest)> = results
        .manifests()
        .map(|m| (format!("{}{}{}", m.name, KEY_SEPARATOR, m.version), m))
        .collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    keyed.into_iter().map(|(_, m)| m).collect()
}

/// Render a result set as pretty-printed JSON
///
/// An empty set renders as `[]`.
pub fn render(results: &ResultSet<'_>) -> Result<Vec<u8>> {
    let entries: Vec<PackageSummary<'_>> =
        sorted(results).into_iter().map(PackageSummary::from).collect();

    if entries.is_empty() {
        return Ok(b"[]".to_vec());
    }

    json::to_vec_pretty(&entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::ResolveMode;
    use crate::search::resolve::resolve;
    use pretty_assertions::assert_eq;
    use semver::Version;

    fn manifest(name: &str, version: &str) -> Manifest {
        let mut m = Manifest::new(name, Version::parse(version).unwrap());
        m.description = format!("{} package", name);
        m.package_type = "integration".to_string();
        m
    }

    #[test]
    fn test_render_empty() {
        let set = resolve(std::iter::empty(), ResolveMode::NewestOnly);
        assert_eq!(render(&set).unwrap(), b"[]".to_vec());
    }

    #[test]
    fn test_render_minimal_fields() {
        let manifests = vec![manifest("example", "1.0.0")];
        let set = resolve(&manifests, ResolveMode::NewestOnly);
        let out = String::from_utf8(render(&set).unwrap()).unwrap();
        let expected = r#"[
  {
    "description": "example package",
    "download": "/package/example-1.0.0.tar.gz",
    "name": "example",
    "type": "integration",
    "version": "1.0.0"
  }
]"#;
        assert_eq!(out, expected);
    }

    #[test]
    fn test_render_optional_fields() {
        let mut m = manifest("secret", "0.1.0");
        m.title = Some("Secret".to_string());
        m.icons = Some(serde_json::json!([{ "src": "/img/icon.svg", "size": "32x32" }]));
        m.internal = true;
        let manifests = vec![m];
        let set = resolve(&manifests, ResolveMode::NewestOnly);
        let out = String::from_utf8(render(&set).unwrap()).unwrap();
        let expected = r#"[
  {
    "description": "secret package",
    "download": "/package/secret-0.1.0.tar.gz",
    "icons": [
      {
        "src": "/img/icon.svg",
        "size": "32x32"
      }
    ],
    "internal": true,
    "name": "secret",
    "title": "Secret",
    "type": "integration",
    "version": "0.1.0"
  }
]"#;
        assert_eq!(out, expected);
    }

    #[test]
    fn test_render_sorted_keys_and_html_escapes() {
        let mut m = manifest("example", "1.0.0");
        m.description = "Logs & <metrics>".to_string();
        let manifests = vec![m];
        let set = resolve(&manifests, ResolveMode::NewestOnly);
        let out = String::from_utf8(render(&set).unwrap()).unwrap();
        let expected = r#"[
  {
    "description": "Logs \u0026 \u003cmetrics\u003e",
    "download": "/package/example-1.0.0.tar.gz",
    "name": "example",
    "type": "integration",
    "version": "1.0.0"
  }
]"#;
        assert_eq!(out, expected);
    }

    #[test]
    fn test_sort_is_string_order() {
        let manifests = vec![
            manifest("pkg", "9.0.0"),
            manifest("pkg", "10.0.0"),
            manifest("abc", "1.0.0"),
        ];
        let set = resolve(&manifests, ResolveMode::AllVersions);
        let order: Vec<String> = sorted(&set)
            .iter()
            .map(|m| format!("{}@{}", m.name, m.version))
            .collect();
        assert_eq!(order, vec!["abc@1.0.0", "pkg@10.0.0", "pkg@9.0.0"]);
    }
}
