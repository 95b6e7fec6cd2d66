//! Core domain models for capver
//!
//! This module contains the declaration types resolved against versions:
//! - Version ranges with inclusive lower and exclusive upper bounds
//! - Capabilities composed of ranges, each with a stable identity

mod capability;
mod version_range;

pub use capability::{Capability, CapabilityId};
pub use version_range::VersionRange;
