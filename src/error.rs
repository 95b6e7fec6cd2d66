//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ParseVersionError: A comparer could not parse a version string
//! - CapabilityError: Resolution of a target against a version failed
//! - ManifestError: Issues with capability declaration files
//! - ConfigError: Issues with CLI configuration

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Resolution related errors
    #[error(transparent)]
    Capability(#[from] CapabilityError),

    /// Declaration file related errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A version string that the active comparer cannot parse
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("malformed version '{version}': {reason}")]
pub struct ParseVersionError {
    /// The offending version string, verbatim
    pub version: String,
    /// Why the comparer rejected it
    pub reason: String,
}

impl ParseVersionError {
    /// Creates a new ParseVersionError
    pub fn new(version: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            reason: reason.into(),
        }
    }
}

/// Errors returned while resolving a target against a version
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CapabilityError {
    /// A bound or the queried version could not be parsed
    #[error("failed to compare '{left}' against '{right}': {source}")]
    MalformedVersion {
        left: String,
        right: String,
        #[source]
        source: ParseVersionError,
    },

    /// A range whose lower bound is not strictly below its upper bound
    #[error(
        "version range {range} of capability '{capability}' is invalid: lower bound is greater or equal to upper bound"
    )]
    InvalidRange { capability: String, range: String },
}

impl CapabilityError {
    /// Creates a new MalformedVersion error for the comparison `left` vs `right`
    pub fn malformed_version(
        left: impl Into<String>,
        right: impl Into<String>,
        source: ParseVersionError,
    ) -> Self {
        CapabilityError::MalformedVersion {
            left: left.into(),
            right: right.into(),
            source,
        }
    }

    /// Creates a new InvalidRange error
    pub fn invalid_range(capability: impl Into<String>, range: impl Into<String>) -> Self {
        CapabilityError::InvalidRange {
            capability: capability.into(),
            range: range.into(),
        }
    }

    /// Returns the unparsable version string, if this is a MalformedVersion error
    pub fn malformed(&self) -> Option<&str> {
        match self {
            CapabilityError::MalformedVersion { source, .. } => Some(&source.version),
            CapabilityError::InvalidRange { .. } => None,
        }
    }
}

/// Errors related to capability declaration files
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Declaration file not found
    #[error("declaration file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read declaration file
    #[error("failed to read declaration file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing error
    #[error("failed to parse JSON in {path}: {message}")]
    JsonParseError { path: PathBuf, message: String },

    /// TOML parsing error
    #[error("failed to parse TOML in {path}: {message}")]
    TomlParseError { path: PathBuf, message: String },

    /// Unsupported file extension
    #[error("unsupported declaration format: {path} (expected .toml or .json)")]
    UnsupportedFormat { path: PathBuf },

    /// Unknown comparer name
    #[error("unknown comparer '{name}': expected 'semver', 'numeric' or 'date'")]
    UnknownComparer { name: String },

    /// Two capabilities declared with the same description
    #[error("capability '{description}' is declared more than once")]
    DuplicateCapability { description: String },

    /// Declared ranges fail validation
    #[error("invalid capability declaration: {0}")]
    Invalid(#[source] CapabilityError),
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A capability named on the command line is not declared
    #[error("unknown capability '{name}': not declared in {path}")]
    UnknownCapability { name: String, path: PathBuf },

    /// Conflicting options
    #[error("conflicting options: {message}")]
    ConflictingOptions { message: String },
}

impl ManifestError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        ManifestError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new JsonParseError
    pub fn json_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ManifestError::JsonParseError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new TomlParseError
    pub fn toml_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ManifestError::TomlParseError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new UnknownComparer error
    pub fn unknown_comparer(name: impl Into<String>) -> Self {
        ManifestError::UnknownComparer { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_version_error_display() {
        let err = ParseVersionError::new("random text", "not a semantic version");
        let msg = format!("{}", err);
        assert!(msg.contains("malformed version 'random text'"));
        assert!(msg.contains("not a semantic version"));
    }

    #[test]
    fn test_malformed_version_names_operands() {
        let err = CapabilityError::malformed_version(
            "0.5.0",
            "1 1 0",
            ParseVersionError::new("1 1 0", "invalid"),
        );
        let msg = format!("{}", err);
        assert!(msg.contains("failed to compare '0.5.0' against '1 1 0'"));
        assert_eq!(err.malformed(), Some("1 1 0"));
    }

    #[test]
    fn test_malformed_version_source() {
        use std::error::Error as _;

        let err = CapabilityError::malformed_version(
            "scrambled",
            "0.5.0",
            ParseVersionError::new("scrambled", "invalid"),
        );
        let source = err.source().unwrap();
        assert!(source.to_string().contains("scrambled"));
    }

    #[test]
    fn test_invalid_range_display() {
        let err = CapabilityError::invalid_range("feature1", "'1.0.0' -> '0.5.0'");
        let msg = format!("{}", err);
        assert!(msg.contains("feature1"));
        assert!(msg.contains("'1.0.0' -> '0.5.0'"));
        assert!(err.malformed().is_none());
    }

    #[test]
    fn test_manifest_error_not_found() {
        let err = ManifestError::not_found("/path/to/capabilities.toml");
        let msg = format!("{}", err);
        assert!(msg.contains("declaration file not found"));
        assert!(msg.contains("capabilities.toml"));
    }

    #[test]
    fn test_manifest_error_toml_parse() {
        let err = ManifestError::toml_parse_error("/path/to/capabilities.toml", "invalid key");
        let msg = format!("{}", err);
        assert!(msg.contains("failed to parse TOML"));
        assert!(msg.contains("invalid key"));
    }

    #[test]
    fn test_manifest_error_unknown_comparer() {
        let err = ManifestError::unknown_comparer("calver");
        let msg = format!("{}", err);
        assert!(msg.contains("unknown comparer 'calver'"));
    }

    #[test]
    fn test_config_error_unknown_capability() {
        let err = ConfigError::UnknownCapability {
            name: "bugfix9".to_string(),
            path: PathBuf::from("caps.toml"),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("unknown capability 'bugfix9'"));
        assert!(msg.contains("caps.toml"));
    }

    #[test]
    fn test_app_error_from_capability_error() {
        let err: AppError = CapabilityError::invalid_range("cap", "'2' -> '1'").into();
        let msg = format!("{}", err);
        assert!(msg.contains("capability 'cap' is invalid"));
    }

    #[test]
    fn test_app_error_from_manifest_error() {
        let err: AppError = ManifestError::not_found("/path").into();
        let msg = format!("{}", err);
        assert!(msg.contains("declaration file not found"));
    }

    #[test]
    fn test_app_error_from_config_error() {
        let err: AppError = ConfigError::ConflictingOptions {
            message: "--quiet and --verbose cannot be used together".to_string(),
        }
        .into();
        let msg = format!("{}", err);
        assert!(msg.contains("conflicting options"));
    }

    #[test]
    fn test_error_debug_trait() {
        let err = ManifestError::not_found("/test");
        let debug = format!("{:?}", err);
        assert!(debug.contains("NotFound"));
    }
}
