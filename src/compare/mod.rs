//! Version comparers
//!
//! A comparer orders two version strings of one versioning scheme:
//! - Semantic versions: `1.2.3`, `v0.4`, `1.0.2-alpha` (default)
//! - Dotted build numbers: `16.0.3.7`
//! - Dates: `2024-01-15`
//!
//! Any closure with the signature
//! `Fn(&str, &str) -> Result<Ordering, ParseVersionError>` is a comparer too.

mod date;
mod numeric;
mod semantic;

pub use date::DateComparer;
pub use numeric::NumericComparer;
pub use semantic::SemanticComparer;

use crate::error::ParseVersionError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Trait for three-way version comparison
///
/// `compare(a, b)` returns `Less`, `Equal` or `Greater` when `a` is lower
/// than, equal to or higher than `b`, or the error for whichever operand
/// could not be parsed (`a` is checked first).
pub trait VersionComparer: Send + Sync {
    /// Compare two version strings
    fn compare(&self, a: &str, b: &str) -> Result<Ordering, ParseVersionError>;
}

impl<F> VersionComparer for F
where
    F: Fn(&str, &str) -> Result<Ordering, ParseVersionError> + Send + Sync,
{
    fn compare(&self, a: &str, b: &str) -> Result<Ordering, ParseVersionError> {
        self(a, b)
    }
}

/// Built-in versioning schemes, selectable by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparerKind {
    /// Semantic versioning
    #[default]
    Semver,
    /// Dotted integer build numbers
    Numeric,
    /// Calendar dates
    Date,
}

impl ComparerKind {
    /// Returns all built-in schemes
    pub fn all() -> &'static [ComparerKind] {
        &[ComparerKind::Semver, ComparerKind::Numeric, ComparerKind::Date]
    }

    /// Returns the name used in declaration files and on the command line
    pub fn name(&self) -> &'static str {
        match self {
            ComparerKind::Semver => "semver",
            ComparerKind::Numeric => "numeric",
            ComparerKind::Date => "date",
        }
    }

    /// Build the comparer for this scheme
    ///
    /// `date_format` is only used by [`ComparerKind::Date`].
    pub fn build(&self, date_format: Option<&str>) -> Box<dyn VersionComparer> {
        match self {
            ComparerKind::Semver => Box::new(SemanticComparer),
            ComparerKind::Numeric => Box::new(NumericComparer),
            ComparerKind::Date => match date_format {
                Some(format) => Box::new(DateComparer::with_format(format)),
                None => Box::new(DateComparer::new()),
            },
        }
    }
}

impl fmt::Display for ComparerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ComparerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComparerKind::all()
            .iter()
            .find(|kind| kind.name() == s.trim())
            .copied()
            .ok_or_else(|| format!("unknown comparer '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparer_kind_default() {
        assert_eq!(ComparerKind::default(), ComparerKind::Semver);
    }

    #[test]
    fn test_comparer_kind_from_str() {
        assert_eq!("semver".parse::<ComparerKind>(), Ok(ComparerKind::Semver));
        assert_eq!("numeric".parse::<ComparerKind>(), Ok(ComparerKind::Numeric));
        assert_eq!(" date ".parse::<ComparerKind>(), Ok(ComparerKind::Date));
        assert!("calver".parse::<ComparerKind>().is_err());
    }

    #[test]
    fn test_comparer_kind_display_roundtrips_name() {
        for kind in ComparerKind::all() {
            assert_eq!(kind.to_string().parse::<ComparerKind>(), Ok(*kind));
        }
    }

    #[test]
    fn test_serde_comparer_kind() {
        let json = serde_json::to_string(&ComparerKind::Numeric).unwrap();
        assert_eq!(json, "\"numeric\"");
    }

    #[test]
    fn test_build_uses_scheme() {
        let semver = ComparerKind::Semver.build(None);
        assert_eq!(semver.compare("0.9.0", "0.10.0"), Ok(Ordering::Less));

        let numeric = ComparerKind::Numeric.build(None);
        assert_eq!(numeric.compare("16.0.3.7", "16.0.3.10"), Ok(Ordering::Less));

        let date = ComparerKind::Date.build(Some("%d/%m/%Y"));
        assert_eq!(date.compare("15/01/2024", "31/12/2023"), Ok(Ordering::Greater));
    }

    #[test]
    fn test_closure_is_comparer() {
        let by_len = |a: &str, b: &str| -> Result<Ordering, ParseVersionError> {
            if a.is_empty() {
                return Err(ParseVersionError::new(a, "empty"));
            }
            Ok(a.len().cmp(&b.len()))
        };

        assert_eq!(by_len.compare("aa", "a"), Ok(Ordering::Greater));
        assert!(by_len.compare("", "a").is_err());
    }
}
