//! capver - Version-gated capability negotiation
//!
//! This library answers "is behavior X available at version V of some
//! external system" from declarations instead of scattered comparisons:
//! - Capabilities: features or bugs valid over version ranges
//! - Targets: immutable registries of capabilities plus a version comparer
//! - Versions: snapshots of capability states at one version string
//!
//! ```
//! use capver::domain::Capability;
//! use capver::target::Target;
//! use std::sync::Arc;
//!
//! // Implemented in 0.6.0, removed in 0.9.0, reintroduced in 1.1.0
//! let feature = Arc::new(Capability::from_bounds("feature", ["0.6.0", "0.9.0", "1.1.0"]));
//! let target = Target::new([Arc::clone(&feature)]);
//!
//! assert!(target.resolve("0.7.0").unwrap().has(&feature));
//! assert!(!target.resolve("0.9.0").unwrap().has(&feature));
//! assert!(target.resolve("1.1.0").unwrap().has(&feature));
//! ```

pub mod checker;
pub mod cli;
pub mod compare;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod output;
pub mod report;
pub mod target;
pub mod version;
