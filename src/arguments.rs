//! # Action Arguments and Results
//!
//! The typed envelope carried through a dispatch: the triggering
//! [`Situation`], an opaque argument value, and per-dispatch metadata.
//! Arguments are created per dispatch, immutable, and discarded when the
//! call completes.
//!
//! Argument values arrive from loosely-typed channels (deep links, push
//! payloads, inline script invocations), so [`ActionValue`] carries JSON and
//! each action validates the shape it expects before use. An unrecognized
//! shape is a validation failure, never a crash.

use crate::error::ActionError;
use crate::situation::Situation;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Opaque caller-supplied argument for an action
///
/// Validity is action-specific: the framework only carries the value,
/// the resolved action decides whether the shape is acceptable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionValue(Value);

impl ActionValue {
    /// The empty value, used both for argument-less dispatches and for
    /// actions whose successful result carries no payload
    pub fn empty() -> Self {
        Self(Value::Null)
    }

    /// Wrap a raw JSON value
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Check if this is the empty value
    pub fn is_empty(&self) -> bool {
        self.0.is_null()
    }

    /// View the value as a string, if it is one
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_str()
    }

    /// View the value as a mapping, if it is one
    pub fn as_object(&self) -> Option<&serde_json::Map<String, Value>> {
        self.0.as_object()
    }

    /// Access the underlying JSON value
    pub fn as_json(&self) -> &Value {
        &self.0
    }
}

impl From<&str> for ActionValue {
    fn from(value: &str) -> Self {
        Self(Value::String(value.to_string()))
    }
}

impl From<String> for ActionValue {
    fn from(value: String) -> Self {
        Self(Value::String(value))
    }
}

impl From<Value> for ActionValue {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Immutable per-dispatch envelope handed to predicates and actions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionArguments {
    /// The trigger context for this dispatch
    pub situation: Situation,
    /// The caller-supplied argument value
    pub value: ActionValue,
    /// Additional context keyed by the well-known
    /// [`metadata`](crate::constants::metadata) constants
    #[serde(default)]
    pub metadata: HashMap<String, Value>,
}

impl ActionArguments {
    /// Create arguments with an empty metadata mapping
    pub fn new(situation: Situation, value: impl Into<ActionValue>) -> Self {
        Self {
            situation,
            value: value.into(),
            metadata: HashMap::new(),
        }
    }

    /// Create arguments with explicit metadata
    pub fn with_metadata(
        situation: Situation,
        value: impl Into<ActionValue>,
        metadata: HashMap<String, Value>,
    ) -> Self {
        Self {
            situation,
            value: value.into(),
            metadata,
        }
    }

    /// Look up a metadata entry by key
    pub fn metadata_value(&self, key: &str) -> Option<&Value> {
        self.metadata.get(key)
    }
}

/// Successful result payload of a performed action
///
/// An empty value is a legitimate success (e.g. the feature-enable action
/// completes with no payload).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionResult {
    pub value: ActionValue,
}

impl ActionResult {
    /// The empty (unit) result
    pub fn empty() -> Self {
        Self {
            value: ActionValue::empty(),
        }
    }

    /// A result carrying a payload value
    pub fn with_value(value: impl Into<ActionValue>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// Terminal outcome of a dispatch attempt
///
/// `Rejected` is a deliberate no-op signal from the predicate, distinct from
/// failure: callers must treat it as a successful decision not to run.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchOutcome {
    /// The action ran and produced a result
    Completed(ActionResult),
    /// The predicate declined to run the action for this situation
    Rejected,
    /// Resolution, validation, or the perform step failed
    Failed(ActionError),
}

impl DispatchOutcome {
    /// Check if the action ran to completion
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }

    /// Check if the predicate declined the dispatch
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected)
    }

    /// Check if the dispatch failed
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Access the result when completed
    pub fn result(&self) -> Option<&ActionResult> {
        match self {
            Self::Completed(result) => Some(result),
            _ => None,
        }
    }

    /// Access the error when failed
    pub fn error(&self) -> Option<&ActionError> {
        match self {
            Self::Failed(error) => Some(error),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_action_value_accessors() {
        let string_value = ActionValue::from("user_notifications");
        assert_eq!(string_value.as_str(), Some("user_notifications"));
        assert!(string_value.as_object().is_none());
        assert!(!string_value.is_empty());

        let map_value = ActionValue::new(json!({"set": true}));
        assert!(map_value.as_str().is_none());
        assert!(map_value.as_object().is_some());

        assert!(ActionValue::empty().is_empty());
    }

    #[test]
    fn test_arguments_metadata_lookup() {
        let mut metadata = HashMap::new();
        metadata.insert(
            crate::constants::metadata::IN_APP_BUTTON_ID.to_string(),
            json!("dismiss_button"),
        );

        let arguments = ActionArguments::with_metadata(
            Situation::ManualInvocation,
            ActionValue::empty(),
            metadata,
        );

        assert_eq!(
            arguments.metadata_value(crate::constants::metadata::IN_APP_BUTTON_ID),
            Some(&json!("dismiss_button"))
        );
        assert!(arguments.metadata_value("missing").is_none());
    }

    #[test]
    fn test_outcome_classification() {
        let completed = DispatchOutcome::Completed(ActionResult::empty());
        assert!(completed.is_completed());
        assert!(completed.result().is_some());
        assert!(completed.error().is_none());

        let rejected = DispatchOutcome::Rejected;
        assert!(rejected.is_rejected());
        assert!(!rejected.is_failed());

        let failed = DispatchOutcome::Failed(ActionError::unknown_action("frobnicate"));
        assert!(failed.is_failed());
        assert!(failed.error().is_some());
    }
}
