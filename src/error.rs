//! # Action Framework Error Types
//!
//! Structured error handling for the action framework using thiserror
//! for typed errors instead of `Box<dyn Error>` patterns.
//!
//! Note that a predicate declining to run an action is *not* an error;
//! it is reported as [`DispatchOutcome::Rejected`](crate::arguments::DispatchOutcome)
//! so callers can tell a deliberate no-op apart from a failure.

use thiserror::Error;

/// Errors produced by action construction, registration, and dispatch
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ActionError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("No action registered under name: {name}")]
    UnknownAction { name: String },

    #[error("Action perform failed: {action}: {message}")]
    PerformFailure { action: String, message: String },

    #[error("Registration error: {message}")]
    Registration { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl ActionError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an unknown-action error for a dispatch name
    pub fn unknown_action(name: impl Into<String>) -> Self {
        Self::UnknownAction { name: name.into() }
    }

    /// Create a perform failure for a named action
    pub fn perform_failure(action: impl Into<String>, message: impl Into<String>) -> Self {
        Self::PerformFailure {
            action: action.into(),
            message: message.into(),
        }
    }

    /// Create a registration error
    pub fn registration(message: impl Into<String>) -> Self {
        Self::Registration {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Check if this error is recoverable by fixing caller input
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

pub type Result<T> = std::result::Result<T, ActionError>;
