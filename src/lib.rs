#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Beacon Core
//!
//! Client-side action execution framework for the Beacon push and in-app
//! messaging SDK.
//!
//! ## Overview
//!
//! The framework maps named, aliased actions to handler objects and
//! dispatches them only when the calling [`Situation`](situation::Situation)
//! passes a per-action [`Predicate`](predicate::Predicate). Push transport,
//! UI rendering, theming, persistence, and the OS permission APIs are
//! external collaborators: the framework calls into them or is invoked by
//! them, but never owns them.
//!
//! ## Architecture
//!
//! ```text
//! caller -> ActionRegistry::lookup(name)
//!        -> Predicate::evaluate(arguments, capabilities)
//!        -> Action::perform(arguments)
//!        -> DispatchOutcome::{Completed | Rejected | Failed}
//! ```
//!
//! ## Module Organization
//!
//! - [`situation`] - Trigger contexts a dispatch originates from
//! - [`arguments`] - Argument/result envelopes and dispatch outcomes
//! - [`capabilities`] - Per-dispatch runtime capability facts
//! - [`predicate`] - Composable accept/reject gates
//! - [`registry`] - Name/alias resolution with atomic re-registration
//! - [`dispatch`] - The per-attempt dispatch state machine
//! - [`actions`] - Handler trait and built-in actions
//! - [`message`] - Validated builders for immutable message content values
//! - [`config`] - Policy tables and tunables
//! - [`error`] - Structured error handling
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use beacon_core::actions::{register_default_actions, NotificationPermissionGateway};
//! use beacon_core::arguments::ActionArguments;
//! use beacon_core::capabilities::{Capabilities, StaticCapabilitySource};
//! use beacon_core::config::BeaconConfig;
//! use beacon_core::constants::{names, values};
//! use beacon_core::dispatch::Dispatcher;
//! use beacon_core::registry::ActionRegistry;
//! use beacon_core::situation::Situation;
//! use std::sync::Arc;
//!
//! # struct OsGateway;
//! # #[async_trait::async_trait]
//! # impl NotificationPermissionGateway for OsGateway {
//! #     async fn enable_user_notifications(
//! #         &self,
//! #     ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//! #         Ok(())
//! #     }
//! # }
//! # async fn example() -> beacon_core::error::Result<()> {
//! let registry = Arc::new(ActionRegistry::new());
//! register_default_actions(&registry, Arc::new(OsGateway), &BeaconConfig::default()).await?;
//!
//! let dispatcher = Dispatcher::new(
//!     registry,
//!     Arc::new(StaticCapabilitySource::new(Capabilities::new(14, false))),
//! );
//!
//! let outcome = dispatcher
//!     .dispatch(
//!         names::ENABLE_FEATURE,
//!         ActionArguments::new(Situation::ManualInvocation, values::ENABLE_USER_NOTIFICATIONS),
//!     )
//!     .await;
//! assert!(outcome.is_completed());
//! # Ok(())
//! # }
//! ```

pub mod actions;
pub mod arguments;
pub mod capabilities;
pub mod config;
pub mod constants;
pub mod dispatch;
pub mod error;
pub mod logging;
pub mod message;
pub mod predicate;
pub mod registry;
pub mod situation;

pub use actions::{Action, EnableFeatureAction, NotificationPermissionGateway};
pub use arguments::{ActionArguments, ActionResult, ActionValue, DispatchOutcome};
pub use capabilities::{Capabilities, CapabilitySource, StaticCapabilitySource};
pub use config::{BeaconConfig, ForegroundAlertPolicy};
pub use dispatch::{DispatchState, Dispatcher};
pub use error::{ActionError, Result};
pub use message::{ButtonBehavior, ButtonInfo, ButtonInfoBuilder, Color, TextInfo};
pub use predicate::Predicate;
pub use registry::{ActionRegistration, ActionRegistry, RegistryStats};
pub use situation::Situation;
