//! Date-based version comparer (e.g. `2024-01-15`)

use crate::compare::VersionComparer;
use crate::error::ParseVersionError;
use chrono::NaiveDate;
use std::cmp::Ordering;

/// Default format for date versions
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Comparer for versions that are calendar dates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateComparer {
    /// chrono format string used to parse both operands
    format: String,
}

impl DateComparer {
    /// Create a comparer using `%Y-%m-%d`
    pub fn new() -> Self {
        Self::with_format(DEFAULT_DATE_FORMAT)
    }

    /// Create a comparer using a custom chrono format string
    pub fn with_format(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
        }
    }

    /// Returns the format string
    pub fn format(&self) -> &str {
        &self.format
    }

    /// Parse a date version
    pub fn parse(&self, version: &str) -> Result<NaiveDate, ParseVersionError> {
        NaiveDate::parse_from_str(version, &self.format)
            .map_err(|e| ParseVersionError::new(version, format!("{} ({})", e, self.format)))
    }
}

impl Default for DateComparer {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionComparer for DateComparer {
    fn compare(&self, a: &str, b: &str) -> Result<Ordering, ParseVersionError> {
        let a = self.parse(a)?;
        let b = self.parse(b)?;
        Ok(a.cmp(&b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_format() {
        let comparer = DateComparer::default();
        assert_eq!(comparer.format(), "%Y-%m-%d");
        assert_eq!(
            comparer.compare("2024-01-15", "2024-02-01"),
            Ok(Ordering::Less)
        );
        assert_eq!(
            comparer.compare("2024-01-15", "2024-01-15"),
            Ok(Ordering::Equal)
        );
    }

    #[test]
    fn test_custom_format() {
        let comparer = DateComparer::with_format("%Y.%m.%d");
        assert_eq!(
            comparer.compare("2023.12.31", "2023.06.01"),
            Ok(Ordering::Greater)
        );
    }

    #[test]
    fn test_malformed() {
        let comparer = DateComparer::new();
        let err = comparer.compare("2024-01-15", "2024-13-01").unwrap_err();
        assert_eq!(err.version, "2024-13-01");

        let err = comparer.compare("yesterday", "2024-01-01").unwrap_err();
        assert_eq!(err.version, "yesterday");
    }
}
