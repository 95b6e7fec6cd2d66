//! Capability declaration documents
//!
//! TOML layout (JSON uses the same shape):
//!
//! ```toml
//! comparer = "semver"
//!
//! [[capability]]
//! description = "feature2"
//! versions = ["0.6.0", "0.9.0", "1.1.0"]
//! ```

use crate::compare::ComparerKind;
use crate::domain::Capability;
use crate::error::ManifestError;
use crate::target::Target;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

/// A declared capability: description plus flat list of bounds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CapabilityDeclaration {
    /// Unique, human-readable name
    pub description: String,
    /// Bounds read pairwise as (introduced, removed); `""` is an absent bound
    #[serde(default)]
    pub versions: Vec<String>,
}

impl CapabilityDeclaration {
    /// Creates a new CapabilityDeclaration
    pub fn new<I, S>(description: impl Into<String>, versions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            description: description.into(),
            versions: versions.into_iter().map(Into::into).collect(),
        }
    }

    /// Build the capability this entry declares
    pub fn to_capability(&self) -> Capability {
        Capability::from_bounds(self.description.clone(), self.versions.iter().cloned())
    }
}

/// A whole declaration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Declaration {
    /// Name of the versioning scheme; semantic versioning when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparer: Option<String>,
    /// chrono format for the `date` comparer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_format: Option<String>,
    /// Declared capabilities in order
    #[serde(default, rename = "capability", alias = "capabilities")]
    pub capabilities: Vec<CapabilityDeclaration>,
}

impl Declaration {
    /// Returns the declared versioning scheme
    pub fn comparer_kind(&self) -> Result<ComparerKind, ManifestError> {
        match &self.comparer {
            None => Ok(ComparerKind::default()),
            Some(name) => name
                .parse::<ComparerKind>()
                .map_err(|_| ManifestError::unknown_comparer(name.as_str())),
        }
    }

    /// Build and validate the target, optionally overriding the comparer
    ///
    /// Fails on duplicate descriptions and on ranges whose lower bound is
    /// not below the upper bound.
    pub fn to_target(&self, comparer: Option<ComparerKind>) -> Result<Target, ManifestError> {
        let kind = match comparer {
            Some(kind) => kind,
            None => self.comparer_kind()?,
        };

        let mut seen = HashSet::new();
        let mut builder = Target::builder().boxed_comparer(kind.build(self.date_format.as_deref()));

        for declared in &self.capabilities {
            if !seen.insert(declared.description.as_str()) {
                return Err(ManifestError::DuplicateCapability {
                    description: declared.description.clone(),
                });
            }
            builder = builder.capability(Arc::new(declared.to_capability()));
        }

        let target = builder.build();
        target.validate().map_err(ManifestError::Invalid)?;
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn declaration(caps: Vec<CapabilityDeclaration>) -> Declaration {
        Declaration {
            capabilities: caps,
            ..Default::default()
        }
    }

    #[test]
    fn test_to_capability_uses_flat_bounds() {
        let declared = CapabilityDeclaration::new("feature2", ["0.6.0", "0.9.0", "1.1.0"]);
        let cap = declared.to_capability();
        assert_eq!(
            cap.to_string(),
            "Capability feature2 -> ('0.6.0' -> '0.9.0', '1.1.0' -> '')"
        );
    }

    #[test]
    fn test_comparer_kind_default() {
        assert_eq!(
            Declaration::default().comparer_kind().unwrap(),
            ComparerKind::Semver
        );
    }

    #[test]
    fn test_comparer_kind_unknown() {
        let decl = Declaration {
            comparer: Some("calver".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            decl.comparer_kind(),
            Err(ManifestError::UnknownComparer { .. })
        ));
    }

    #[test]
    fn test_to_target_preserves_order() {
        let decl = declaration(vec![
            CapabilityDeclaration::new("b", ["1.0.0"]),
            CapabilityDeclaration::new("a", ["2.0.0"]),
        ]);
        let target = decl.to_target(None).unwrap();
        let names: Vec<&str> = target
            .capabilities()
            .iter()
            .map(|c| c.description())
            .collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_to_target_duplicate() {
        let decl = declaration(vec![
            CapabilityDeclaration::new("a", ["1.0.0"]),
            CapabilityDeclaration::new("a", ["2.0.0"]),
        ]);
        assert!(matches!(
            decl.to_target(None),
            Err(ManifestError::DuplicateCapability { description }) if description == "a"
        ));
    }

    #[test]
    fn test_to_target_invalid_range() {
        let decl = declaration(vec![CapabilityDeclaration::new("a", ["2.0.0", "1.0.0"])]);
        assert!(matches!(
            decl.to_target(None),
            Err(ManifestError::Invalid(_))
        ));
    }

    #[test]
    fn test_to_target_comparer_override() {
        let decl = declaration(vec![CapabilityDeclaration::new("a", ["16.0.3.7"])]);
        // Four components are not a semantic version
        let target = decl.to_target(None).unwrap();
        assert!(target.resolve("16.0.3.8").is_err());

        let target = decl.to_target(Some(ComparerKind::Numeric)).unwrap();
        let cap = target.get("a").unwrap();
        assert!(target.resolve("16.0.3.8").unwrap().has(cap));
    }

    #[test]
    fn test_to_target_date_comparer() {
        let decl = Declaration {
            comparer: Some("date".to_string()),
            date_format: Some("%Y.%m.%d".to_string()),
            capabilities: vec![CapabilityDeclaration::new("a", ["2024.01.01"])],
        };
        let target = decl.to_target(None).unwrap();
        let cap = target.get("a").unwrap();
        assert!(target.resolve("2024.02.15").unwrap().has(cap));
        assert!(!target.resolve("2023.12.31").unwrap().has(cap));
    }
}
