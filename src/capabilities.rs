//! # Runtime Capability Facts
//!
//! Read-only facts about the host runtime that predicates may consult in
//! addition to the dispatch arguments. Facts are resolved exactly once per
//! dispatch so a predicate sees a consistent snapshot; predicates must not
//! reach for any other mutable global state.

use serde::{Deserialize, Serialize};

/// Snapshot of host runtime facts taken at dispatch time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    /// Major version of the host OS
    pub os_major_version: u32,
    /// Whether the current foreground push will show a native visible alert
    pub foreground_alert_visible: bool,
}

impl Capabilities {
    pub fn new(os_major_version: u32, foreground_alert_visible: bool) -> Self {
        Self {
            os_major_version,
            foreground_alert_visible,
        }
    }
}

/// Source of capability snapshots, resolved once per dispatch
///
/// Production builds wire this to the mobile OS bridge; tests use
/// [`StaticCapabilitySource`].
pub trait CapabilitySource: Send + Sync {
    fn snapshot(&self) -> Capabilities;
}

/// Capability source returning a fixed snapshot
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCapabilitySource {
    capabilities: Capabilities,
}

impl StaticCapabilitySource {
    pub fn new(capabilities: Capabilities) -> Self {
        Self { capabilities }
    }
}

impl CapabilitySource for StaticCapabilitySource {
    fn snapshot(&self) -> Capabilities {
        self.capabilities
    }
}
