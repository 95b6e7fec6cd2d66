//! Capability check workflow
//!
//! This module provides:
//! - Workflow coordination: load → build target → select → resolve → judge
//! - Capability selection by description with unknown-name detection
//! - Requirement judgment across all queried versions
//! - Partial continuation: a malformed version does not stop the others

use crate::cli::CliArgs;
use crate::domain::Capability;
use crate::error::{AppError, ConfigError};
use crate::manifest::load_declaration;
use crate::report::VersionReport;
use crate::target::Target;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

/// A required capability that is disabled at a queried version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmetRequirement {
    /// Queried version string
    pub version: String,
    /// Description of the disabled capability
    pub capability: String,
}

/// Result of running the checker
#[derive(Debug, Clone, Default)]
pub struct CheckResult {
    /// One report per queried version, in query order
    pub reports: Vec<VersionReport>,
    /// Required capabilities found disabled
    pub unmet: Vec<UnmetRequirement>,
}

impl CheckResult {
    /// Returns true if any version failed to resolve
    pub fn has_errors(&self) -> bool {
        self.reports.iter().any(VersionReport::is_failed)
    }

    /// Returns true if every required capability is enabled everywhere
    pub fn requirements_met(&self) -> bool {
        self.unmet.is_empty()
    }
}

/// Checker for resolving versions against a declared target
pub struct Checker {
    /// Target built from the declaration
    target: Target,
    /// Capabilities to report (empty means all)
    selected: Vec<Arc<Capability>>,
    /// Capabilities that must be enabled
    required: Vec<Arc<Capability>>,
}

impl Checker {
    /// Create a checker for an already built target
    pub fn new(target: Target) -> Self {
        Self {
            target,
            selected: Vec::new(),
            required: Vec::new(),
        }
    }

    /// Create a checker from CLI arguments, loading the declaration file
    pub fn from_cli(args: &CliArgs) -> Result<Self, AppError> {
        let declaration = load_declaration(&args.file)?;
        let target = declaration.to_target(args.comparer)?;

        let checker = Self::new(target);
        let selected = checker.lookup(&args.capabilities, &args.file)?;
        let required = checker.lookup(&args.require, &args.file)?;

        Ok(checker.with_selected(selected).with_required(required))
    }

    /// Set capabilities to report
    pub fn with_selected(mut self, selected: Vec<Arc<Capability>>) -> Self {
        self.selected = selected;
        self
    }

    /// Set capabilities that must be enabled
    pub fn with_required(mut self, required: Vec<Arc<Capability>>) -> Self {
        self.required = required;
        self
    }

    /// Returns the target
    pub fn target(&self) -> &Target {
        &self.target
    }

    /// Look up capabilities by description
    pub fn lookup(&self, names: &[String], path: &Path) -> Result<Vec<Arc<Capability>>, ConfigError> {
        names
            .iter()
            .map(|name| {
                self.target
                    .get(name)
                    .cloned()
                    .ok_or_else(|| ConfigError::UnknownCapability {
                        name: name.clone(),
                        path: path.to_path_buf(),
                    })
            })
            .collect()
    }

    /// Resolve every version and judge the requirements
    pub fn run<S: AsRef<str>>(&self, versions: &[S]) -> CheckResult {
        let mut result = CheckResult::default();

        for version in versions {
            let version = version.as_ref();
            let report = VersionReport::resolve(&self.target, version, &self.selected);

            if let Some(error) = report.error() {
                warn!(version, error, "resolution failed");
                result.reports.push(report);
                continue;
            }

            if !self.required.is_empty() {
                let required = VersionReport::resolve(&self.target, version, &self.required);
                for state in required.states().iter().filter(|s| !s.enabled) {
                    debug!(version, capability = %state.description, "requirement not met");
                    result.unmet.push(UnmetRequirement {
                        version: version.to_string(),
                        capability: state.description.clone(),
                    });
                }
            }

            result.reports.push(report);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn target() -> Target {
        Target::new([
            Capability::from_bounds("feature1", ["0.5.0", ""]),
            Capability::from_bounds("feature2", ["0.6.0", "0.9.0", "1.1.0", ""]),
            Capability::from_bounds("bugfix3", Vec::<&str>::new()),
        ])
    }

    #[test]
    fn test_lookup_known() {
        let checker = Checker::new(target());
        let found = checker
            .lookup(&["feature2".to_string()], Path::new("caps.toml"))
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].description(), "feature2");
    }

    #[test]
    fn test_lookup_unknown() {
        let checker = Checker::new(target());
        let err = checker
            .lookup(&["feature9".to_string()], &PathBuf::from("caps.toml"))
            .unwrap_err();
        assert!(err.to_string().contains("unknown capability 'feature9'"));
    }

    #[test]
    fn test_run_reports_every_version() {
        let checker = Checker::new(target());
        let result = checker.run(&["0.7.0", "0.9.0", "1.1.0"]);

        assert_eq!(result.reports.len(), 3);
        assert!(result.reports[0].is_enabled("feature2"));
        assert!(!result.reports[1].is_enabled("feature2"));
        assert!(result.reports[2].is_enabled("feature2"));
        assert!(!result.has_errors());
        assert!(result.requirements_met());
    }

    #[test]
    fn test_run_selected_only() {
        let checker = Checker::new(target());
        let selected = checker
            .lookup(&["bugfix3".to_string()], Path::new("caps.toml"))
            .unwrap();
        let checker = checker.with_selected(selected);

        let result = checker.run(&["1.0.0"]);
        assert_eq!(result.reports[0].states().len(), 1);
        assert_eq!(result.reports[0].states()[0].description, "bugfix3");
    }

    #[test]
    fn test_run_requirements() {
        let checker = Checker::new(target());
        let required = checker
            .lookup(&["feature2".to_string()], Path::new("caps.toml"))
            .unwrap();
        let checker = checker.with_required(required);

        let result = checker.run(&["0.7.0", "0.9.0"]);
        assert_eq!(
            result.unmet,
            vec![UnmetRequirement {
                version: "0.9.0".to_string(),
                capability: "feature2".to_string(),
            }]
        );
        assert!(!result.requirements_met());
    }

    #[test]
    fn test_run_continues_after_malformed_version() {
        let checker = Checker::new(target());
        let result = checker.run(&["random text", "1.0.0"]);

        assert!(result.has_errors());
        assert!(result.reports[0].is_failed());
        assert!(result.reports[0].error().unwrap().contains("random text"));
        assert!(result.reports[1].is_enabled("feature1"));
    }
}
