//! # Action Handlers
//!
//! The polymorphic handler interface the registry dispatches to, plus the
//! SDK's built-in actions and their default registrations.
//!
//! ## Overview
//!
//! An [`Action`] is resolved by name from the
//! [`ActionRegistry`](crate::registry::ActionRegistry), gated by its
//! registered [`Predicate`](crate::predicate::Predicate), and then asked to
//! perform with the dispatch [`ActionArguments`]. Actions validate their own
//! argument shapes; the framework carries values opaquely.
//!
//! ## Usage
//!
//! ```rust
//! use beacon_core::actions::{register_default_actions, NotificationPermissionGateway};
//! use beacon_core::config::BeaconConfig;
//! use beacon_core::registry::ActionRegistry;
//! use std::sync::Arc;
//!
//! # struct Gateway;
//! # #[async_trait::async_trait]
//! # impl NotificationPermissionGateway for Gateway {
//! #     async fn enable_user_notifications(
//! #         &self,
//! #     ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//! #         Ok(())
//! #     }
//! # }
//! # async fn example() -> beacon_core::error::Result<()> {
//! let registry = ActionRegistry::new();
//! register_default_actions(&registry, Arc::new(Gateway), &BeaconConfig::default()).await?;
//! # Ok(())
//! # }
//! ```

pub mod enable_feature;

pub use enable_feature::{EnableFeatureAction, NotificationPermissionGateway};

use crate::arguments::{ActionArguments, ActionResult};
use crate::config::BeaconConfig;
use crate::constants::names;
use crate::error::Result;
use crate::registry::ActionRegistry;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

/// Handler interface for named actions
#[async_trait]
pub trait Action: Send + Sync {
    /// Run the action with the dispatch arguments
    ///
    /// Argument validation belongs here: a malformed value is a
    /// `Validation` error, never a silent no-op.
    async fn perform(&self, arguments: &ActionArguments) -> Result<ActionResult>;

    /// Name hint used for logging and perform-failure reporting
    fn name(&self) -> &str {
        "unnamed_action"
    }
}

/// Register the SDK's built-in actions under their default names,
/// aliases, and default predicates
pub async fn register_default_actions(
    registry: &ActionRegistry,
    notification_gateway: Arc<dyn NotificationPermissionGateway>,
    config: &BeaconConfig,
) -> Result<()> {
    registry
        .register(
            &[names::ENABLE_FEATURE, names::ENABLE_FEATURE_ALIAS],
            EnableFeatureAction::default_predicate(config.foreground_alert_policy),
            Arc::new(EnableFeatureAction::new(notification_gateway)),
        )
        .await?;

    info!("Registered default actions");
    Ok(())
}
