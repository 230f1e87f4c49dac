//! # Dispatch Situations
//!
//! The trigger context an action is dispatched from. Situations are closed
//! and SDK-defined: callers pick one at dispatch time and predicates gate
//! on it, but the set itself is not user-extensible.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Runtime context in which an action dispatch was triggered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Situation {
    /// A push was received while the app is in the foreground
    ForegroundPush,
    /// The app was launched by the user tapping a push notification
    LaunchedFromPush,
    /// Invoked from an embedded web view (e.g. a landing page script)
    WebViewInvocation,
    /// Invoked directly by application code
    ManualInvocation,
    /// An interactive notification button was tapped with the app foregrounded
    ForegroundInteractiveButton,
    /// An interactive notification button was tapped with the app backgrounded
    BackgroundInteractiveButton,
    /// Triggered by the automation subsystem
    Automation,
    /// A push was received while the app is in the background
    BackgroundPush,
}

impl Situation {
    /// Check if this situation runs while the app is backgrounded
    pub fn is_background(&self) -> bool {
        matches!(self, Self::BackgroundPush | Self::BackgroundInteractiveButton)
    }

    /// Check if this situation originates from a push delivery or tap
    pub fn is_from_push(&self) -> bool {
        matches!(
            self,
            Self::ForegroundPush | Self::LaunchedFromPush | Self::BackgroundPush
        )
    }

    /// Check if this situation originates from an interactive notification button
    pub fn is_interactive_button(&self) -> bool {
        matches!(
            self,
            Self::ForegroundInteractiveButton | Self::BackgroundInteractiveButton
        )
    }
}

impl fmt::Display for Situation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ForegroundPush => write!(f, "foreground_push"),
            Self::LaunchedFromPush => write!(f, "launched_from_push"),
            Self::WebViewInvocation => write!(f, "web_view_invocation"),
            Self::ManualInvocation => write!(f, "manual_invocation"),
            Self::ForegroundInteractiveButton => write!(f, "foreground_interactive_button"),
            Self::BackgroundInteractiveButton => write!(f, "background_interactive_button"),
            Self::Automation => write!(f, "automation"),
            Self::BackgroundPush => write!(f, "background_push"),
        }
    }
}

impl std::str::FromStr for Situation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "foreground_push" => Ok(Self::ForegroundPush),
            "launched_from_push" => Ok(Self::LaunchedFromPush),
            "web_view_invocation" => Ok(Self::WebViewInvocation),
            "manual_invocation" => Ok(Self::ManualInvocation),
            "foreground_interactive_button" => Ok(Self::ForegroundInteractiveButton),
            "background_interactive_button" => Ok(Self::BackgroundInteractiveButton),
            "automation" => Ok(Self::Automation),
            "background_push" => Ok(Self::BackgroundPush),
            _ => Err(format!("Invalid situation: {s}")),
        }
    }
}
