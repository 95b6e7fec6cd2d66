//! Semantic version comparer
//!
//! Accepts the lenient forms found in server banners and changelogs:
//! - Full versions: `1.2.3`
//! - Short versions: `1`, `0.4` (missing components are zero)
//! - Leading `v`: `v1.2.3`
//! - Prerelease and build metadata: `0.2.5-6`, `1.0.2-alpha`, `1.0.0+b42`
//!
//! Ordering follows semantic-versioning precedence; build metadata is
//! validated but ignored.

use crate::compare::VersionComparer;
use crate::error::ParseVersionError;
use regex::Regex;
use semver::{BuildMetadata, Prerelease, Version};
use std::cmp::Ordering;
use std::sync::LazyLock;

// v?MAJOR[.MINOR[.PATCH]][-PRERELEASE][+BUILD]
static SEMVER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^v?(\d+)(?:\.(\d+))?(?:\.(\d+))?(?:-([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?(?:\+([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?$",
    )
    .unwrap()
});

/// Default comparer using semantic-versioning precedence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SemanticComparer;

impl SemanticComparer {
    /// Parse a version string into a `semver::Version` with empty build metadata
    pub fn parse(version: &str) -> Result<Version, ParseVersionError> {
        let caps = SEMVER_RE
            .captures(version)
            .ok_or_else(|| ParseVersionError::new(version, "not a semantic version"))?;

        let component = |index: usize| -> Result<u64, ParseVersionError> {
            match caps.get(index) {
                Some(m) => m
                    .as_str()
                    .parse()
                    .map_err(|_| ParseVersionError::new(version, "version component overflow")),
                None => Ok(0),
            }
        };

        let mut parsed = Version::new(component(1)?, component(2)?, component(3)?);

        if let Some(pre) = caps.get(4) {
            parsed.pre = Prerelease::new(pre.as_str())
                .map_err(|e| ParseVersionError::new(version, e.to_string()))?;
        }

        // Build metadata must be well-formed but never takes part in ordering
        if let Some(build) = caps.get(5) {
            BuildMetadata::new(build.as_str())
                .map_err(|e| ParseVersionError::new(version, e.to_string()))?;
        }

        Ok(parsed)
    }
}

impl VersionComparer for SemanticComparer {
    fn compare(&self, a: &str, b: &str) -> Result<Ordering, ParseVersionError> {
        let a = Self::parse(a)?;
        let b = Self::parse(b)?;
        Ok(a.cmp(&b))
    }
}
