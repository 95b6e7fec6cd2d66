//! Resolved capability snapshots
//!
//! A [`Version`] is produced by [`Target::resolve`](crate::target::Target::resolve)
//! and records, for every capability of that target, whether it is enabled
//! at the resolved version string. Snapshots are plain owned values: they
//! are never shared between resolutions and never change after creation.

use crate::domain::{Capability, CapabilityId};
use std::collections::HashMap;

/// Capability states of one target at one concrete version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    version: String,
    states: HashMap<CapabilityId, bool>,
}

impl Version {
    pub(crate) fn new(version: impl Into<String>, capacity: usize) -> Self {
        Self {
            version: version.into(),
            states: HashMap::with_capacity(capacity),
        }
    }

    pub(crate) fn record(&mut self, id: CapabilityId, enabled: bool) {
        self.states.insert(id, enabled);
    }

    /// Returns the version string this snapshot was resolved from
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns true if the capability is enabled
    ///
    /// Capabilities the originating target does not register are reported
    /// as disabled.
    pub fn has(&self, capability: &Capability) -> bool {
        self.has_id(capability.id())
    }

    /// Same as [`Version::has`], by identity handle
    pub fn has_id(&self, id: CapabilityId) -> bool {
        self.states.get(&id).copied().unwrap_or(false)
    }

    /// Returns true if the capability was evaluated during resolution
    pub fn knows(&self, capability: &Capability) -> bool {
        self.states.contains_key(&capability.id())
    }

    /// Iterate over the ids of enabled capabilities, in no particular order
    pub fn enabled(&self) -> impl Iterator<Item = CapabilityId> + '_ {
        self.states
            .iter()
            .filter(|(_, enabled)| **enabled)
            .map(|(id, _)| *id)
    }

    /// Number of capabilities recorded
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Returns true if no capability was recorded
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
