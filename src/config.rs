//! # Framework Configuration
//!
//! Policy tables and tunables for the action framework. The default
//! rejection rule for foreground pushes is deliberately a configuration
//! value rather than hard-coded logic: only the documented threshold is
//! shipped as a default, and integrators can adjust it without touching
//! predicate code.

use crate::error::{ActionError, Result};
use serde::{Deserialize, Serialize};

/// Policy for suppressing actions that would duplicate a native alert
///
/// When a foreground push will show a visible native alert on a new enough
/// OS, running a feature-enable action as well would produce double UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForegroundAlertPolicy {
    /// Minimum OS major version on which the runtime shows native
    /// foreground alerts
    pub min_os_major_version: u32,
}

impl Default for ForegroundAlertPolicy {
    fn default() -> Self {
        Self {
            min_os_major_version: 10,
        }
    }
}

impl ForegroundAlertPolicy {
    /// Check whether a dispatch should be suppressed under this policy
    pub fn suppresses(&self, os_major_version: u32, foreground_alert_visible: bool) -> bool {
        foreground_alert_visible && os_major_version >= self.min_os_major_version
    }
}

/// Top-level framework configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BeaconConfig {
    pub foreground_alert_policy: ForegroundAlertPolicy,
}

impl BeaconConfig {
    /// Load configuration from the environment, falling back to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(min_version) = std::env::var("BEACON_FOREGROUND_ALERT_MIN_OS_MAJOR") {
            config.foreground_alert_policy.min_os_major_version =
                min_version.parse().map_err(|e| {
                    ActionError::configuration(format!(
                        "Invalid BEACON_FOREGROUND_ALERT_MIN_OS_MAJOR: {e}"
                    ))
                })?;
        }

        Ok(config)
    }
}
