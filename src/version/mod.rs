// src/version/mod.rs

//! Version comparison and platform compatibility constraints
//!
//! Package versions and platform versions are semantic versions. Ordering
//! follows semver precedence: major, minor, patch, then pre-release.
//! Build metadata never affects ordering, so `1.0.0+a` and `1.0.0+b`
//! compare equal here even though `semver::Version`'s own `Ord` does not
//! treat them as equal.

use crate::error::{Error, Result};
use semver::Version;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Parse a semantic version string
///
/// Anything that is not exactly a `major.minor.patch[-pre][+build]`
/// triple is rejected, surrounding whitespace included.
pub fn parse_version(s: &str) -> Result<Version> {
    Version::parse(s).map_err(|e| Error::MalformedVersion {
        input: s.to_string(),
        reason: e.to_string(),
    })
}

/// Compare two versions by semver precedence (build metadata ignored)
pub fn compare(a: &Version, b: &Version) -> Ordering {
    a.cmp_precedence(b)
}

/// Compatibility constraint against a host platform
///
/// Both bounds are inclusive. A constraint with neither bound accepts
/// every platform version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PlatformRequirement {
    /// Minimum required platform version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<Version>,
    /// Maximum supported platform version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<Version>,
}

impl PlatformRequirement {
    /// Check if a platform version satisfies this constraint
    pub fn satisfied_by(&self, target: &Version) -> bool {
        if let Some(ref min) = self.min {
            if compare(target, min) == Ordering::Less {
                return false;
            }
        }
        if let Some(ref max) = self.max {
            if compare(target, max) == Ordering::Greater {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        parse_version(s).unwrap()
    }

    #[test]
    fn test_parse_version_simple() {
        let version = v("1.2.3");
        assert_eq!(version.major, 1);
        assert_eq!(version.minor, 2);
        assert_eq!(version.patch, 3);
    }

    #[test]
    fn test_parse_version_rejects_whitespace() {
        let err = parse_version(" 7.0.0").unwrap_err();
        assert!(matches!(err, Error::MalformedVersion { ref input, .. } if input == " 7.0.0"));
        assert!(parse_version("7.0.0 ").is_err());
    }

    #[test]
    fn test_parse_version_rejects_partial() {
        let err = parse_version("7.0").unwrap_err();
        assert!(matches!(err, Error::MalformedVersion { ref input, .. } if input == "7.0"));
        assert!(parse_version("").is_err());
        assert!(parse_version("latest").is_err());
    }

    #[test]
    fn test_compare_numeric_components() {
        assert_eq!(compare(&v("10.0.0"), &v("9.0.0")), Ordering::Greater);
        assert_eq!(compare(&v("1.2.3"), &v("1.2.4")), Ordering::Less);
        assert_eq!(compare(&v("1.10.0"), &v("1.9.9")), Ordering::Greater);
    }

    #[test]
    fn test_compare_prerelease() {
        assert_eq!(compare(&v("1.0.0-alpha"), &v("1.0.0")), Ordering::Less);
        assert_eq!(compare(&v("1.0.0-alpha"), &v("1.0.0-beta")), Ordering::Less);
        assert_eq!(compare(&v("1.0.0-rc.2"), &v("1.0.0-rc.10")), Ordering::Less);
    }

    #[test]
    fn test_compare_ignores_build_metadata() {
        assert_eq!(compare(&v("1.0.0+build.1"), &v("1.0.0+build.2")), Ordering::Equal);
        assert_ne!(v("1.0.0+b"), v("1.0.0+a"));
    }

    #[test]
    fn test_requirement_min_boundary() {
        let req = PlatformRequirement {
            min: Some(v("7.0.0")),
            max: None,
        };
        assert!(req.satisfied_by(&v("7.0.0")));
        assert!(req.satisfied_by(&v("7.2.1")));
        assert!(!req.satisfied_by(&v("6.9.9")));
    }

    #[test]
    fn test_requirement_max_boundary() {
        let req = PlatformRequirement {
            min: Some(v("6.0.0")),
            max: Some(v("7.0.0")),
        };
        assert!(req.satisfied_by(&v("7.0.0")));
        assert!(!req.satisfied_by(&v("7.0.1")));
        assert!(!req.satisfied_by(&v("5.9.0")));
    }

    #[test]
    fn test_requirement_unconstrained() {
        let req = PlatformRequirement::default();
        assert!(req.satisfied_by(&v("0.0.1")));
        assert!(req.satisfied_by(&v("99.0.0")));
    }
}
