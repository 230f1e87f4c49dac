//! # Action Registry
//!
//! Name and alias resolution for action handlers.
//!
//! ## Overview
//!
//! The registry owns every [`ActionRegistration`]: a handler, its composed
//! predicate, and the full set of names (primary plus aliases) it answers to.
//! Lookups are alias-transparent and concurrent; (re)registration is a single
//! atomic swap so a concurrent lookup never observes a registration with some
//! names updated and others stale.
//!
//! ## Usage
//!
//! ```rust
//! use beacon_core::predicate::Predicate;
//! use beacon_core::registry::ActionRegistry;
//! use beacon_core::actions::Action;
//! use beacon_core::arguments::{ActionArguments, ActionResult};
//! use std::sync::Arc;
//!
//! # struct NoopAction;
//! # #[async_trait::async_trait]
//! # impl Action for NoopAction {
//! #     async fn perform(
//! #         &self,
//! #         _arguments: &ActionArguments,
//! #     ) -> beacon_core::error::Result<ActionResult> {
//! #         Ok(ActionResult::empty())
//! #     }
//! # }
//! # async fn example() -> beacon_core::error::Result<()> {
//! let registry = ActionRegistry::new();
//! registry
//!     .register(&["noop", "^n"], Predicate::accept_all(), Arc::new(NoopAction))
//!     .await?;
//!
//! let registration = registry.lookup("^n").await;
//! assert!(registration.is_some());
//! # Ok(())
//! # }
//! ```

pub mod action_registry;

pub use action_registry::{ActionRegistration, ActionRegistry, RegistryStats};
