// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

#![allow(dead_code)]

use std::path::Path;
use tempfile::TempDir;

/// Write `public/package/<name>-<version>/manifest.yml`
pub fn write_manifest(public_dir: &Path, name: &str, version: &str, extra: &str) {
    let dir = public_dir.join("package").join(format!("{}-{}", name, version));
    std::fs::create_dir_all(&dir).unwrap();
    let body = format!(
        "name: {name}\nversion: {version}\ndescription: {name} integration\ntype: integration\n{extra}"
    );
    std::fs::write(dir.join("manifest.yml"), body).unwrap();
}

/// Create a public directory with a small catalog.
///
/// - `example` 0.9.0 and 1.0.0, category logs
/// - `other` 2.0.0, category metrics
/// - `foo` 1.0.0, metrics, requires Kibana >= 7.0.0
/// - `internal` 1.2.0, flagged internal
///
/// Returns the TempDir - keep it alive to prevent cleanup.
pub fn setup_public_dir() -> TempDir {
    let temp_dir = tempfile::tempdir().unwrap();
    let public = temp_dir.path();

    write_manifest(public, "example", "0.9.0", "categories: [logs]\n");
    write_manifest(
        public,
        "example",
        "1.0.0",
        "title: Example\ncategories: [logs]\nicons:\n  - src: /package/example-1.0.0/img/icon.svg\n",
    );
    write_manifest(public, "other", "2.0.0", "categories: [metrics]\n");
    write_manifest(
        public,
        "foo",
        "1.0.0",
        "categories: [metrics]\nrequirement:\n  kibana:\n    min: 7.0.0\n",
    );
    write_manifest(
        public,
        "internal",
        "1.2.0",
        "categories: [custom]\ninternal: true\n",
    );

    std::fs::write(public.join("index.json"), "{\n  \"version\": \"0.2.0\"\n}").unwrap();

    temp_dir
}

/// Names and versions in output order, e.g. `["example@1.0.0"]`
pub fn exposed(body: &[u8]) -> Vec<String> {
    let value: serde_json::Value = serde_json::from_slice(body).unwrap();
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| {
            format!(
                "{}@{}",
                entry["name"].as_str().unwrap(),
                entry["version"].as_str().unwrap()
            )
        })
        .collect()
}
