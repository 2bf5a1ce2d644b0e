// src/query.rs

//! Typed search queries
//!
//! Raw request parameters are validated once, here, into an immutable
//! [`Query`]. Everything downstream consumes the typed value.

use crate::error::{Error, Result};
use crate::version::parse_version;
use semver::Version;
use serde::Deserialize;
use tracing::debug;

/// Raw search parameters as they arrive from a request
///
/// Empty values are treated the same as absent ones.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    /// Target platform version
    pub kibana: Option<String>,
    pub category: Option<String>,
    /// Exact package name
    pub package: Option<String>,
    /// Boolean-ish flag to include internal packages
    pub internal: Option<String>,
}

/// How the resolver collapses versions of the same package
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveMode {
    /// One manifest per name, the newest
    NewestOnly,
    /// Every surviving version
    AllVersions,
}

/// A validated search query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub platform_version: Option<Version>,
    pub category: Option<String>,
    pub package: Option<String>,
    pub include_internal: bool,
}

impl Query {
    /// Query with no filters: newest public version of every package
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a query from raw request parameters
    ///
    /// A malformed platform version fails with [`Error::InvalidInput`].
    /// An unparseable `internal` flag is treated as false.
    pub fn from_params(params: &SearchParams) -> Result<Self> {
        let platform_version = match non_empty(&params.kibana) {
            Some(raw) => Some(parse_version(raw).map_err(|e| match e {
                Error::MalformedVersion { reason, .. } => {
                    Error::InvalidInput(format!("invalid Kibana version '{}': {}", raw, reason))
                }
                other => other,
            })?),
            None => None,
        };

        let include_internal = match non_empty(&params.internal) {
            Some(raw) => parse_bool(raw).unwrap_or_else(|| {
                debug!("Ignoring unparseable internal flag '{}'", raw);
                false
            }),
            None => false,
        };

        Ok(Self {
            platform_version,
            category: non_empty(&params.category).map(str::to_string),
            package: non_empty(&params.package).map(str::to_string),
            include_internal,
        })
    }

    pub fn with_platform_version(mut self, version: Version) -> Self {
        self.platform_version = Some(version);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_package(mut self, name: impl Into<String>) -> Self {
        self.package = Some(name.into());
        self
    }

    pub fn with_internal(mut self, include_internal: bool) -> Self {
        self.include_internal = include_internal;
        self
    }

    /// Resolution mode implied by this query
    pub fn mode(&self) -> ResolveMode {
        if self.package.is_some() {
            ResolveMode::AllVersions
        } else {
            ResolveMode::NewestOnly
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Parse a boolean the way query strings usually spell it
pub fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}
