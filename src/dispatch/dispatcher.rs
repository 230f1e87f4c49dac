//! # Action Dispatcher
//!
//! Runs the per-attempt state machine: resolve the name, snapshot
//! capabilities, evaluate the predicate, perform, and report a structured
//! [`DispatchOutcome`]. The dispatcher never retries a failed perform step;
//! retry policy belongs to the caller or the service the action wraps.

use crate::arguments::{ActionArguments, DispatchOutcome};
use crate::capabilities::CapabilitySource;
use crate::error::ActionError;
use crate::registry::ActionRegistry;
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

use super::states::DispatchState;

/// Dispatches named actions against a registry
pub struct Dispatcher {
    registry: Arc<ActionRegistry>,
    capabilities: Arc<dyn CapabilitySource>,
}

impl Dispatcher {
    pub fn new(registry: Arc<ActionRegistry>, capabilities: Arc<dyn CapabilitySource>) -> Self {
        Self {
            registry,
            capabilities,
        }
    }

    /// Dispatch an action by name or alias
    ///
    /// Unknown names fail with `UnknownAction`; a declining predicate yields
    /// `Rejected` (a successful no-op, not an error); perform errors are
    /// propagated as `Failed` with the action's own error detail.
    pub async fn dispatch(&self, name: &str, arguments: ActionArguments) -> DispatchOutcome {
        let dispatch_id = Uuid::new_v4();

        debug!(
            dispatch_id = %dispatch_id,
            name = name,
            situation = %arguments.situation,
            state = %DispatchState::Created,
            "Dispatch created"
        );

        let registration = match self.registry.lookup(name).await {
            Some(registration) => registration,
            None => {
                warn!(
                    dispatch_id = %dispatch_id,
                    name = name,
                    state = %DispatchState::Failed,
                    "No action registered under dispatch name"
                );
                return DispatchOutcome::Failed(ActionError::unknown_action(name));
            }
        };
        debug!(
            dispatch_id = %dispatch_id,
            action = registration.action.name(),
            state = %DispatchState::Resolved,
            "Dispatch resolved"
        );

        // Capability facts are snapshotted once so the predicate sees a
        // consistent view for the whole attempt
        let capabilities = self.capabilities.snapshot();

        if !registration.predicate.evaluate(&arguments, &capabilities) {
            debug!(
                dispatch_id = %dispatch_id,
                action = registration.action.name(),
                situation = %arguments.situation,
                state = %DispatchState::Rejected,
                "Predicate declined dispatch"
            );
            return DispatchOutcome::Rejected;
        }
        debug!(
            dispatch_id = %dispatch_id,
            state = %DispatchState::PredicateChecked,
            "Predicate accepted"
        );

        debug!(
            dispatch_id = %dispatch_id,
            state = %DispatchState::Performing,
            "Performing action"
        );

        match registration.action.perform(&arguments).await {
            Ok(result) => {
                debug!(
                    dispatch_id = %dispatch_id,
                    action = registration.action.name(),
                    state = %DispatchState::Completed,
                    "Dispatch completed"
                );
                DispatchOutcome::Completed(result)
            }
            Err(error) => {
                warn!(
                    dispatch_id = %dispatch_id,
                    action = registration.action.name(),
                    error = %error,
                    state = %DispatchState::Failed,
                    "Dispatch failed"
                );
                DispatchOutcome::Failed(error)
            }
        }
    }
}
