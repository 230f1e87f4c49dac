//! # Feature-Enable Action
//!
//! Enables an SDK feature on request. Registered under `enable_feature` and
//! the short alias `^ef`.
//!
//! Expected argument values:
//! - `"user_notifications"`: enable user-visible notifications.
//!
//! Any other value is a validation failure. The successful result is empty.
//!
//! Default predicate: accepts foreground pushes, launches from push, web view
//! invocations, manual invocations, foreground interactive buttons, and
//! automation - and within those, rejects a foreground push that will show a
//! visible native alert on OS versions at or above the configured threshold,
//! so the user is not shown duplicate UI.

use crate::arguments::{ActionArguments, ActionResult};
use crate::capabilities::Capabilities;
use crate::config::ForegroundAlertPolicy;
use crate::constants::values;
use crate::error::{ActionError, Result};
use crate::predicate::Predicate;
use crate::situation::Situation;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

use super::Action;

/// OS notification-permission bridge the action delegates to
///
/// The permission APIs themselves live outside the SDK core; this trait is
/// the seam production code and tests implement.
#[async_trait]
pub trait NotificationPermissionGateway: Send + Sync {
    /// Request that user-visible notifications be enabled
    async fn enable_user_notifications(
        &self,
    ) -> std::result::Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

/// Action that enables SDK features by name
pub struct EnableFeatureAction {
    gateway: Arc<dyn NotificationPermissionGateway>,
}

impl EnableFeatureAction {
    pub fn new(gateway: Arc<dyn NotificationPermissionGateway>) -> Self {
        Self { gateway }
    }

    /// The situations this action is documented to run in
    fn valid_situations() -> [Situation; 6] {
        [
            Situation::ForegroundPush,
            Situation::LaunchedFromPush,
            Situation::WebViewInvocation,
            Situation::ManualInvocation,
            Situation::ForegroundInteractiveButton,
            Situation::Automation,
        ]
    }

    /// Default registration predicate
    ///
    /// Composes the valid-situation gate with the foreground-alert
    /// suppression policy: a foreground push that will already show a
    /// visible native alert must not also trigger this action.
    pub fn default_predicate(policy: ForegroundAlertPolicy) -> Predicate {
        let situation_gate = Predicate::for_situations(&Self::valid_situations());

        let alert_suppression = Predicate::new(
            move |arguments: &ActionArguments, capabilities: &Capabilities| {
                if arguments.situation != Situation::ForegroundPush {
                    return true;
                }
                !policy.suppresses(
                    capabilities.os_major_version,
                    capabilities.foreground_alert_visible,
                )
            },
        );

        situation_gate.and(alert_suppression)
    }
}

#[async_trait]
impl Action for EnableFeatureAction {
    async fn perform(&self, arguments: &ActionArguments) -> Result<ActionResult> {
        let feature = arguments.value.as_str().ok_or_else(|| {
            ActionError::validation("enable_feature requires a string argument value")
        })?;

        if feature != values::ENABLE_USER_NOTIFICATIONS {
            warn!(feature = feature, "Unrecognized enable_feature argument");
            return Err(ActionError::validation(format!(
                "Unrecognized enable_feature argument value: {feature}"
            )));
        }

        debug!(
            situation = %arguments.situation,
            "Enabling user notifications"
        );

        self.gateway
            .enable_user_notifications()
            .await
            .map_err(|e| ActionError::perform_failure(self.name(), e.to_string()))?;

        Ok(ActionResult::empty())
    }

    fn name(&self) -> &str {
        crate::constants::names::ENABLE_FEATURE
    }
}
