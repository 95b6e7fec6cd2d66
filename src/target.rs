//! Capability registries and version resolution
//!
//! A [`Target`] describes an external system (server, API, library) by the
//! capabilities it gained or lost over time. It is assembled once through
//! [`TargetBuilder`] and is read-only afterwards, so a single instance can
//! be shared across threads and resolved concurrently without locking.
//!
//! ```
//! use capver::domain::Capability;
//! use capver::target::Target;
//! use std::sync::Arc;
//!
//! let speedy = Arc::new(Capability::from_bounds("speedy action", ["1.0.0"]));
//! let target = Target::builder().capability(Arc::clone(&speedy)).build();
//!
//! let version = target.resolve("1.0.5").unwrap();
//! assert!(version.has(&speedy));
//! ```

use crate::compare::{SemanticComparer, VersionComparer};
use crate::domain::{Capability, VersionRange};
use crate::error::CapabilityError;
use crate::version::Version;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// Immutable registry of capabilities and the comparer used for all of them
#[derive(Clone)]
pub struct Target {
    comparer: Arc<dyn VersionComparer>,
    capabilities: Vec<Arc<Capability>>,
}

/// Builder for [`Target`]; the only way to register capabilities
#[derive(Default)]
pub struct TargetBuilder {
    comparer: Option<Arc<dyn VersionComparer>>,
    capabilities: Vec<Arc<Capability>>,
}

impl TargetBuilder {
    /// Create an empty builder using the semantic comparer
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom comparer instead of semantic versioning
    pub fn comparer(mut self, comparer: impl VersionComparer + 'static) -> Self {
        self.comparer = Some(Arc::new(comparer));
        self
    }

    /// Use an already boxed comparer, e.g. from [`ComparerKind::build`](crate::compare::ComparerKind::build)
    pub fn boxed_comparer(mut self, comparer: Box<dyn VersionComparer>) -> Self {
        self.comparer = Some(Arc::from(comparer));
        self
    }

    /// Register a capability; registering the same capability twice is a no-op
    pub fn capability(mut self, capability: impl Into<Arc<Capability>>) -> Self {
        let capability = capability.into();
        if !self.capabilities.iter().any(|c| c.id() == capability.id()) {
            self.capabilities.push(capability);
        }
        self
    }

    /// Register several capabilities in order
    pub fn capabilities<I, C>(self, capabilities: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Arc<Capability>>,
    {
        capabilities
            .into_iter()
            .fold(self, |builder, capability| builder.capability(capability))
    }

    /// Freeze the registry
    pub fn build(self) -> Target {
        Target {
            comparer: self.comparer.unwrap_or_else(|| Arc::new(SemanticComparer)),
            capabilities: self.capabilities,
        }
    }
}

impl Target {
    /// Create a builder
    pub fn builder() -> TargetBuilder {
        TargetBuilder::new()
    }

    /// Create a target with the semantic comparer
    pub fn new<I, C>(capabilities: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Arc<Capability>>,
    {
        TargetBuilder::new().capabilities(capabilities).build()
    }

    /// Returns the registered capabilities in registration order
    pub fn capabilities(&self) -> &[Arc<Capability>] {
        &self.capabilities
    }

    /// Returns the comparer
    pub fn comparer(&self) -> &dyn VersionComparer {
        self.comparer.as_ref()
    }

    /// Find a registered capability by description
    pub fn get(&self, description: &str) -> Option<&Arc<Capability>> {
        self.capabilities
            .iter()
            .find(|c| c.description() == description)
    }

    /// Number of registered capabilities
    pub fn len(&self) -> usize {
        self.capabilities.len()
    }

    /// Returns true if no capability is registered
    pub fn is_empty(&self) -> bool {
        self.capabilities.is_empty()
    }

    /// Check every range with both bounds for `introduced < removed`
    ///
    /// The same check runs during [`Target::resolve`]; this allows failing
    /// early, before any concrete version is known.
    pub fn validate(&self) -> Result<(), CapabilityError> {
        for capability in &self.capabilities {
            for range in capability.ranges() {
                self.check_range(capability, range)?;
            }
        }
        Ok(())
    }

    /// Resolve the capability states at `version`
    ///
    /// Each capability is enabled by the first of its ranges containing
    /// `version`. Overlapping ranges are not detected; declaration order
    /// decides. Any unparsable version string or misordered range aborts
    /// the whole resolution.
    pub fn resolve(&self, version: &str) -> Result<Version, CapabilityError> {
        debug!(
            version,
            capabilities = self.capabilities.len(),
            "resolving capabilities"
        );

        let mut resolved = Version::new(version, self.capabilities.len());

        for capability in &self.capabilities {
            let mut enabled = false;

            for range in capability.ranges() {
                self.check_range(capability, range)?;

                if range.contains(self.comparer.as_ref(), version)? {
                    enabled = true;
                    break;
                }
            }

            trace!(
                capability = capability.description(),
                enabled,
                "capability resolved"
            );
            resolved.record(capability.id(), enabled);
        }

        Ok(resolved)
    }

    fn check_range(
        &self,
        capability: &Capability,
        range: &VersionRange,
    ) -> Result<(), CapabilityError> {
        if range.is_ordered(self.comparer.as_ref())? {
            Ok(())
        } else {
            Err(CapabilityError::invalid_range(
                capability.description(),
                range.to_string(),
            ))
        }
    }
}

impl fmt::Debug for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Target")
            .field("capabilities", &self.capabilities)
            .finish_non_exhaustive()
    }
}
