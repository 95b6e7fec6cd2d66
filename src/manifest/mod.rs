//! Capability declaration files
//!
//! This module provides functionality to:
//! - Detect the declaration format from the file extension
//! - Parse TOML and JSON declarations
//! - Turn a declaration into a validated [`Target`](crate::target::Target)

mod declaration;

pub use declaration::{CapabilityDeclaration, Declaration};

use crate::error::ManifestError;
use std::path::Path;
use tracing::debug;

/// Supported declaration formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    /// `.toml`
    Toml,
    /// `.json`
    Json,
}

impl ManifestFormat {
    /// Returns all supported formats
    pub fn all() -> &'static [ManifestFormat] {
        &[ManifestFormat::Toml, ManifestFormat::Json]
    }

    /// Returns the file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            ManifestFormat::Toml => "toml",
            ManifestFormat::Json => "json",
        }
    }

    /// Detect the format from a path's extension (case-insensitive)
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        ManifestFormat::all()
            .iter()
            .find(|format| format.extension() == ext)
            .copied()
    }
}

/// Parse a declaration from a string in the given format
///
/// `path` is only used for error messages.
pub fn parse_declaration(
    content: &str,
    format: ManifestFormat,
    path: &Path,
) -> Result<Declaration, ManifestError> {
    match format {
        ManifestFormat::Toml => toml::from_str(content)
            .map_err(|e| ManifestError::toml_parse_error(path, e.to_string())),
        ManifestFormat::Json => serde_json::from_str(content)
            .map_err(|e| ManifestError::json_parse_error(path, e.to_string())),
    }
}

/// Read and parse a declaration file
pub fn load_declaration(path: &Path) -> Result<Declaration, ManifestError> {
    if !path.exists() {
        return Err(ManifestError::not_found(path));
    }

    let format = ManifestFormat::from_path(path).ok_or_else(|| ManifestError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let content =
        std::fs::read_to_string(path).map_err(|e| ManifestError::read_error(path, e))?;

    let declaration = parse_declaration(&content, format, path)?;
    debug!(
        path = %path.display(),
        capabilities = declaration.capabilities.len(),
        "loaded capability declaration"
    );
    Ok(declaration)
}
