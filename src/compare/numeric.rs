//! Dotted build number comparer (e.g. `16.0.3.7`)

use crate::compare::VersionComparer;
use crate::error::ParseVersionError;
use std::cmp::Ordering;

/// Comparer for dotted integer versions of any length
///
/// Components are compared numerically from left to right; a missing
/// trailing component counts as zero, so `16.0` equals `16.0.0.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumericComparer;

impl NumericComparer {
    /// Parse a dotted integer version into its components
    pub fn parse(version: &str) -> Result<Vec<u64>, ParseVersionError> {
        if version.is_empty() {
            return Err(ParseVersionError::new(version, "empty version"));
        }

        version
            .split('.')
            .map(|part| {
                if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(ParseVersionError::new(
                        version,
                        format!("'{}' is not a numeric component", part),
                    ));
                }
                part.parse::<u64>()
                    .map_err(|_| ParseVersionError::new(version, "version component overflow"))
            })
            .collect()
    }
}

impl VersionComparer for NumericComparer {
    fn compare(&self, a: &str, b: &str) -> Result<Ordering, ParseVersionError> {
        let parts_a = Self::parse(a)?;
        let parts_b = Self::parse(b)?;

        let len = parts_a.len().max(parts_b.len());
        for i in 0..len {
            let pa = parts_a.get(i).copied().unwrap_or(0);
            let pb = parts_b.get(i).copied().unwrap_or(0);
            match pa.cmp(&pb) {
                Ordering::Equal => continue,
                other => return Ok(other),
            }
        }

        Ok(Ordering::Equal)
    }
}
