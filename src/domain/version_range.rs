//! Version intervals over which a capability exists
//!
//! A range is half-open: `introduced` is inclusive (the version the
//! capability appeared in), `removed` is exclusive (the first version
//! without it). Either bound may be absent and then leaves that side
//! unbounded, but a range without any bound never contains a version.

use crate::compare::VersionComparer;
use crate::error::CapabilityError;
use std::cmp::Ordering;
use std::fmt;

/// Interval `[introduced, removed)` of versions
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct VersionRange {
    introduced: Option<String>,
    removed: Option<String>,
}

/// Empty strings are the conventional spelling of an absent bound
fn bound(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl VersionRange {
    /// Creates a new VersionRange; empty strings are treated as absent bounds
    pub fn new(introduced: Option<impl Into<String>>, removed: Option<impl Into<String>>) -> Self {
        Self {
            introduced: bound(introduced.map(Into::into)),
            removed: bound(removed.map(Into::into)),
        }
    }

    /// Creates a VersionRange from two bound strings, `""` meaning absent
    pub fn from_bounds(introduced: impl Into<String>, removed: impl Into<String>) -> Self {
        Self {
            introduced: bound(Some(introduced.into())),
            removed: bound(Some(removed.into())),
        }
    }

    /// Range starting at `introduced` with no upper bound
    pub fn since(introduced: impl Into<String>) -> Self {
        Self::from_bounds(introduced, "")
    }

    /// Range of every version before `removed`
    pub fn until(removed: impl Into<String>) -> Self {
        Self::from_bounds("", removed)
    }

    /// Range `[introduced, removed)`
    pub fn between(introduced: impl Into<String>, removed: impl Into<String>) -> Self {
        Self::from_bounds(introduced, removed)
    }

    /// Range without bounds; contains no version at all
    pub fn never() -> Self {
        Self::default()
    }

    /// Inclusive lower bound
    pub fn introduced(&self) -> Option<&str> {
        self.introduced.as_deref()
    }

    /// Exclusive upper bound
    pub fn removed(&self) -> Option<&str> {
        self.removed.as_deref()
    }

    /// Returns true if neither bound is set
    pub fn is_never(&self) -> bool {
        self.introduced.is_none() && self.removed.is_none()
    }

    /// Check that the lower bound is strictly below the upper bound
    ///
    /// Ranges with at most one bound are always ordered.
    pub fn is_ordered<C>(&self, comparer: &C) -> Result<bool, CapabilityError>
    where
        C: VersionComparer + ?Sized,
    {
        match (&self.introduced, &self.removed) {
            (Some(lower), Some(upper)) => Ok(compare(comparer, lower, upper)? == Ordering::Less),
            _ => Ok(true),
        }
    }

    /// Check whether `version` lies inside this range
    pub fn contains<C>(&self, comparer: &C, version: &str) -> Result<bool, CapabilityError>
    where
        C: VersionComparer + ?Sized,
    {
        if self.is_never() {
            return Ok(false);
        }

        let after_lower = match &self.introduced {
            Some(lower) => compare(comparer, lower, version)? != Ordering::Greater,
            None => true,
        };

        let before_upper = match &self.removed {
            Some(upper) => compare(comparer, version, upper)? == Ordering::Less,
            None => true,
        };

        Ok(after_lower && before_upper)
    }
}

fn compare<C>(comparer: &C, left: &str, right: &str) -> Result<Ordering, CapabilityError>
where
    C: VersionComparer + ?Sized,
{
    comparer
        .compare(left, right)
        .map_err(|source| CapabilityError::malformed_version(left, right, source))
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' -> '{}'",
            self.introduced().unwrap_or_default(),
            self.removed().unwrap_or_default()
        )
    }
}
