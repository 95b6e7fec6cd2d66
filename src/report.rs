//! Resolution reports for display
//!
//! A report pairs each queried version string with the state of the
//! selected capabilities, or with the error that aborted its resolution.

use crate::domain::Capability;
use crate::target::Target;
use std::sync::Arc;

/// State of one capability at one version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilityState {
    /// Capability description
    pub description: String,
    /// Declared ranges, rendered as `'lo' -> 'hi'`
    pub ranges: Vec<String>,
    /// Whether the capability is enabled
    pub enabled: bool,
}

/// Outcome of resolving one version string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Resolution succeeded
    Resolved(Vec<CapabilityState>),
    /// Resolution failed; no capability state is known
    Failed(String),
}

/// Report for one queried version string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionReport {
    /// The queried version string
    pub version: String,
    /// Capability states or the resolution error
    pub outcome: Outcome,
}

impl VersionReport {
    /// Resolve `version` against `target` and keep the states of `selected`
    ///
    /// When `selected` is empty every registered capability is reported.
    pub fn resolve(target: &Target, version: &str, selected: &[Arc<Capability>]) -> Self {
        let capabilities = if selected.is_empty() {
            target.capabilities()
        } else {
            selected
        };

        let outcome = match target.resolve(version) {
            Ok(resolved) => Outcome::Resolved(
                capabilities
                    .iter()
                    .map(|capability| CapabilityState {
                        description: capability.description().to_string(),
                        ranges: capability.ranges().iter().map(|r| r.to_string()).collect(),
                        enabled: resolved.has(capability),
                    })
                    .collect(),
            ),
            Err(e) => Outcome::Failed(e.to_string()),
        };

        Self {
            version: version.to_string(),
            outcome,
        }
    }

    /// Returns true if resolution failed
    pub fn is_failed(&self) -> bool {
        matches!(self.outcome, Outcome::Failed(_))
    }

    /// Returns the capability states, empty on failure
    pub fn states(&self) -> &[CapabilityState] {
        match &self.outcome {
            Outcome::Resolved(states) => states,
            Outcome::Failed(_) => &[],
        }
    }

    /// Returns the error message if resolution failed
    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Resolved(_) => None,
            Outcome::Failed(message) => Some(message),
        }
    }

    /// Number of enabled capabilities
    pub fn enabled_count(&self) -> usize {
        self.states().iter().filter(|s| s.enabled).count()
    }

    /// Returns true if the named capability is reported as enabled
    pub fn is_enabled(&self, description: &str) -> bool {
        self.states()
            .iter()
            .any(|s| s.description == description && s.enabled)
    }
}
