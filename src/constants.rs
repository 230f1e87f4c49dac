//! # Framework Constants
//!
//! Registry names, argument values, metadata keys, and limits shared
//! across the action framework.

/// Registry and action name constants
pub mod names {
    /// Primary registry name for the feature-enable action
    pub const ENABLE_FEATURE: &str = "enable_feature";

    /// Short alias for the feature-enable action, used in compact
    /// serialized action references
    pub const ENABLE_FEATURE_ALIAS: &str = "^ef";
}

/// Recognized argument values for built-in actions
pub mod values {
    /// Argument value requesting that user-visible notifications be enabled
    pub const ENABLE_USER_NOTIFICATIONS: &str = "user_notifications";
}

/// Well-known keys for [`ActionArguments`](crate::arguments::ActionArguments) metadata
pub mod metadata {
    /// The raw push payload that triggered the dispatch, when one exists
    pub const PUSH_PAYLOAD: &str = "push_payload";

    /// Identifier of the interactive notification button that triggered
    /// the dispatch, when one exists
    pub const USER_NOTIFICATION_ACTION_ID: &str = "user_notification_action_id";

    /// Identifier of the in-app message button that triggered the dispatch
    pub const IN_APP_BUTTON_ID: &str = "in_app_button_id";
}

/// Message content limits
pub mod limits {
    /// Inclusive upper bound on button identifier length, in characters
    pub const BUTTON_IDENTIFIER_LIMIT: usize = 100;
}
