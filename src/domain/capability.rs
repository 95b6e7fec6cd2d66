//! Capabilities: features or bugs tied to version ranges
//!
//! Bounds are usually declared as a flat list read in pairs:
//!
//! | bounds                                   | ranges                                  |
//! |------------------------------------------|-----------------------------------------|
//! | `0.1.0, 0.2.0, 0.5.0, 1.0.0`             | `[0.1.0, 0.2.0)`, `[0.5.0, 1.0.0)`      |
//! | `1.0.0`                                  | `[1.0.0, ∞)`                            |
//! | `1.0.0, ""`                              | `[1.0.0, ∞)`                            |
//! | `"", 5.1.0, 1.0.0, 2.0.0, 3.5.0`         | `(-∞, 5.1.0)`, `[1.0.0, 2.0.0)`, `[3.5.0, ∞)` |

use crate::domain::VersionRange;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a capability, unique for the lifetime of the process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CapabilityId(u64);

impl CapabilityId {
    fn next() -> Self {
        CapabilityId(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for CapabilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A feature or bug of an external system, present over some version ranges
///
/// Each capability carries its own [`CapabilityId`], so two declarations
/// with identical descriptions and ranges are still distinct capabilities.
/// The type is intentionally not `Clone`; share it through `Arc` instead.
#[derive(Debug)]
pub struct Capability {
    id: CapabilityId,
    description: String,
    ranges: Vec<VersionRange>,
}

impl Capability {
    /// Creates a new Capability from explicit ranges
    pub fn new(description: impl Into<String>, ranges: Vec<VersionRange>) -> Self {
        Self {
            id: CapabilityId::next(),
            description: description.into(),
            ranges,
        }
    }

    /// Creates a new Capability from a flat list of bounds
    ///
    /// Bounds are consumed as `(introduced, removed)` pairs, an empty string
    /// standing for an absent bound. A trailing unpaired bound becomes a
    /// range without upper bound unless it is empty.
    pub fn from_bounds<I, S>(description: impl Into<String>, bounds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ranges = Vec::new();
        let mut introduced: Option<String> = None;

        for bound in bounds {
            match introduced.take() {
                None => introduced = Some(bound.into()),
                Some(lower) => ranges.push(VersionRange::from_bounds(lower, bound)),
            }
        }

        if let Some(lower) = introduced.filter(|lower| !lower.is_empty()) {
            ranges.push(VersionRange::since(lower));
        }

        Self::new(description, ranges)
    }

    /// Returns the identity handle
    pub fn id(&self) -> CapabilityId {
        self.id
    }

    /// Returns the description; informational only
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the ranges in declaration order
    pub fn ranges(&self) -> &[VersionRange] {
        &self.ranges
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Capability {} -> (", self.description)?;
        for (i, range) in self.ranges.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", range)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bounds_pairs() {
        let cap = Capability::from_bounds("cap", ["0.1.0", "0.2.0", "0.5.0", "1.0.0"]);
        assert_eq!(
            cap.ranges(),
            &[
                VersionRange::between("0.1.0", "0.2.0"),
                VersionRange::between("0.5.0", "1.0.0"),
            ]
        );
    }

    #[test]
    fn test_from_bounds_single() {
        let cap = Capability::from_bounds("cap", ["1.0.0"]);
        assert_eq!(cap.ranges(), &[VersionRange::since("1.0.0")]);
    }

    #[test]
    fn test_from_bounds_explicit_open_upper() {
        let cap = Capability::from_bounds("cap", ["1.0.0", ""]);
        assert_eq!(cap.ranges(), &[VersionRange::since("1.0.0")]);
    }

    #[test]
    fn test_from_bounds_mixed() {
        let cap = Capability::from_bounds("cap", ["", "5.1.0", "1.0.0", "2.0.0", "3.5.0"]);
        assert_eq!(
            cap.ranges(),
            &[
                VersionRange::until("5.1.0"),
                VersionRange::between("1.0.0", "2.0.0"),
                VersionRange::since("3.5.0"),
            ]
        );
    }

    #[test]
    fn test_from_bounds_trailing_empty_dropped() {
        let cap = Capability::from_bounds("cap", ["0.1.0", "0.2.0", ""]);
        assert_eq!(cap.ranges(), &[VersionRange::between("0.1.0", "0.2.0")]);
    }

    #[test]
    fn test_from_bounds_empty_pair_kept() {
        let cap = Capability::from_bounds("cap", ["", ""]);
        assert_eq!(cap.ranges(), &[VersionRange::never()]);
    }

    #[test]
    fn test_from_bounds_no_bounds() {
        let cap = Capability::from_bounds("cap", Vec::<String>::new());
        assert!(cap.ranges().is_empty());
    }

    #[test]
    fn test_identity_is_unique() {
        let a = Capability::from_bounds("same", ["1.0.0"]);
        let b = Capability::from_bounds("same", ["1.0.0"]);
        assert_eq!(a.ranges(), b.ranges());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_display() {
        let caps = [
            Capability::from_bounds("cap1", ["0.2.5-6", "0.4"]),
            Capability::from_bounds("cap2", ["1.0.2-alpha"]),
            Capability::from_bounds("cap3", Vec::<&str>::new()),
            Capability::from_bounds("cap4", ["1.0.0", "", "0.2.5", "0.2.6"]),
        ];

        let rendered: Vec<String> = caps.iter().map(|c| c.to_string()).collect();
        assert_eq!(
            rendered,
            vec![
                "Capability cap1 -> ('0.2.5-6' -> '0.4')",
                "Capability cap2 -> ('1.0.2-alpha' -> '')",
                "Capability cap3 -> ()",
                "Capability cap4 -> ('1.0.0' -> '', '0.2.5' -> '0.2.6')",
            ]
        );
    }
}
