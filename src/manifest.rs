// src/manifest.rs

//! Package manifest model
//!
//! A manifest describes one version of one package. Display fields are
//! opaque to filtering and flow through to search output untouched.

use crate::version::PlatformRequirement;
use semver::Version;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A single versioned package's metadata record
///
/// `(name, version)` is the natural key; a well-formed store never holds
/// two manifests with the same pair.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Manifest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub version: Version,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type", default)]
    pub package_type: String,
    #[serde(default)]
    pub categories: BTreeSet<String>,
    #[serde(default)]
    pub requirement: Requirement,
    /// Icon references, passed through verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icons: Option<serde_json::Value>,
    #[serde(default)]
    pub internal: bool,
}

/// Host platform requirements declared by a manifest
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Requirement {
    #[serde(default)]
    pub kibana: PlatformRequirement,
}

impl Manifest {
    /// Create a public manifest with empty display fields
    pub fn new(name: impl Into<String>, version: Version) -> Self {
        Self {
            name: name.into(),
            title: None,
            version,
            description: String::new(),
            package_type: String::new(),
            categories: BTreeSet::new(),
            requirement: Requirement::default(),
            icons: None,
            internal: false,
        }
    }

    /// Check if the manifest is tagged with a category
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.contains(category)
    }

    /// Check if the manifest is compatible with a platform version
    pub fn supports_platform(&self, platform: &Version) -> bool {
        self.requirement.kibana.satisfied_by(platform)
    }

    /// Archive location served for this manifest
    pub fn download_path(&self) -> String {
        format!("/package/{}-{}.tar.gz", self.name, self.version)
    }

    /// Parse a manifest from YAML text
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = r#"
name: example
title: Example Integration
version: 1.0.0
description: This is the example integration.
type: integration
categories: ["logs", "metrics"]
requirement:
  kibana:
    min: 6.0.0
    max: 7.5.0
icons:
  - src: /img/icon.svg
    size: 32x32
"#;

    #[test]
    fn test_parse_full_manifest() {
        let m = Manifest::from_yaml(EXAMPLE).unwrap();
        assert_eq!(m.name, "example");
        assert_eq!(m.title.as_deref(), Some("Example Integration"));
        assert_eq!(m.version, Version::new(1, 0, 0));
        assert_eq!(m.package_type, "integration");
        assert!(m.has_category("logs"));
        assert!(!m.has_category("security"));
        assert_eq!(m.requirement.kibana.min, Some(Version::new(6, 0, 0)));
        assert_eq!(m.requirement.kibana.max, Some(Version::new(7, 5, 0)));
        assert!(m.icons.is_some());
        assert!(!m.internal);
    }

    #[test]
    fn test_parse_minimal_manifest() {
        let m = Manifest::from_yaml("name: bare\nversion: 0.1.0\n").unwrap();
        assert!(m.categories.is_empty());
        assert_eq!(m.requirement.kibana, PlatformRequirement::default());
        assert!(m.title.is_none());
        assert_eq!(m.description, "");
    }

    #[test]
    fn test_parse_rejects_bad_version() {
        assert!(Manifest::from_yaml("name: bad\nversion: one\n").is_err());
    }

    #[test]
    fn test_supports_platform() {
        let m = Manifest::from_yaml(EXAMPLE).unwrap();
        assert!(m.supports_platform(&Version::new(6, 5, 2)));
        assert!(!m.supports_platform(&Version::new(5, 9, 0)));
        assert!(!m.supports_platform(&Version::new(7, 5, 1)));
    }

    #[test]
    fn test_download_path() {
        let m = Manifest::new("example", Version::new(1, 0, 0));
        assert_eq!(m.download_path(), "/package/example-1.0.0.tar.gz");
    }
}
