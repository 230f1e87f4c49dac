//! # Button Info Value
//!
//! Immutable in-app message button descriptor and its validating builder.
//!
//! Required fields: a label and an identifier of 1 to 100 characters,
//! bounds inclusive. An out-of-bound identifier is a validation failure,
//! never a silent truncation. All other fields default at builder
//! construction time.

use crate::arguments::ActionValue;
use crate::constants::limits::BUTTON_IDENTIFIER_LIMIT;
use crate::error::{ActionError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::color::Color;
use super::text_info::TextInfo;

/// Button tap behavior
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonBehavior {
    /// Dismiss the message when tapped
    #[default]
    Dismiss,
    /// Cancel the message's future display when tapped
    Cancel,
}

/// Mutable builder for [`ButtonInfo`]
///
/// Short-lived, single-owner scaffolding; defaults are applied at
/// construction so a fresh builder only lacks its required fields.
#[derive(Debug, Clone, Default)]
pub struct ButtonInfoBuilder {
    /// Button label. Required.
    pub label: Option<TextInfo>,
    /// Button identifier. Required, 1 to 100 characters inclusive.
    pub identifier: Option<String>,
    /// Tap behavior. Optional, defaults to dismiss.
    pub behavior: ButtonBehavior,
    /// Border radius in points. Optional, defaults to 0.
    pub border_radius: u32,
    /// Background color. Optional, defaults to transparent.
    pub background_color: Color,
    /// Border color. Optional, defaults to transparent.
    pub border_color: Color,
    /// Actions to dispatch on tap, keyed by registry name. Optional.
    pub actions: Option<HashMap<String, ActionValue>>,
}

impl ButtonInfoBuilder {
    pub fn new() -> Self {
        Self {
            label: None,
            identifier: None,
            behavior: ButtonBehavior::Dismiss,
            border_radius: 0,
            background_color: Color::TRANSPARENT,
            border_color: Color::TRANSPARENT,
            actions: None,
        }
    }

    /// Check if the builder will produce a button info value
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    fn validate(&self) -> Result<()> {
        if self.label.is_none() {
            return Err(ActionError::validation("Button info requires a label"));
        }

        match &self.identifier {
            None => Err(ActionError::validation(
                "Button info requires an identifier",
            )),
            Some(identifier) => {
                let length = identifier.chars().count();
                if length == 0 || length > BUTTON_IDENTIFIER_LIMIT {
                    Err(ActionError::validation(format!(
                        "Button identifier must be between 1 and {BUTTON_IDENTIFIER_LIMIT} characters, got {length}"
                    )))
                } else {
                    Ok(())
                }
            }
        }
    }

    /// Seal the builder into an immutable value
    ///
    /// No partial or invalid value is ever observable: either every
    /// invariant holds, or construction did not happen.
    pub fn build(self) -> Result<ButtonInfo> {
        self.validate()?;

        let label = self
            .label
            .ok_or_else(|| ActionError::validation("Button info requires a label"))?;
        let identifier = self
            .identifier
            .ok_or_else(|| ActionError::validation("Button info requires an identifier"))?;

        Ok(ButtonInfo {
            label,
            identifier,
            behavior: self.behavior,
            border_radius: self.border_radius,
            background_color: self.background_color,
            border_color: self.border_color,
            actions: self.actions,
        })
    }
}

/// Immutable in-app message button descriptor
///
/// Constructed only via [`ButtonInfoBuilder`]; deep-immutable and safe to
/// share across threads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonInfo {
    label: TextInfo,
    identifier: String,
    behavior: ButtonBehavior,
    border_radius: u32,
    background_color: Color,
    border_color: Color,
    actions: Option<HashMap<String, ActionValue>>,
}

impl ButtonInfo {
    /// Build a button info with a builder mutator
    ///
    /// The mutator is invoked synchronously exactly once with a live
    /// builder; validity is checked after it returns.
    pub fn build_with(block: impl FnOnce(&mut ButtonInfoBuilder)) -> Result<ButtonInfo> {
        let mut builder = ButtonInfoBuilder::new();
        block(&mut builder);
        builder.build()
    }

    pub fn label(&self) -> &TextInfo {
        &self.label
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn behavior(&self) -> ButtonBehavior {
        self.behavior
    }

    pub fn border_radius(&self) -> u32 {
        self.border_radius
    }

    pub fn background_color(&self) -> Color {
        self.background_color
    }

    pub fn border_color(&self) -> Color {
        self.border_color
    }

    pub fn actions(&self) -> Option<&HashMap<String, ActionValue>> {
        self.actions.as_ref()
    }

    /// Seed a fresh builder from this value's fields, every field copied
    /// verbatim, optional ones included
    pub fn to_builder(&self) -> ButtonInfoBuilder {
        ButtonInfoBuilder {
            label: Some(self.label.clone()),
            identifier: Some(self.identifier.clone()),
            behavior: self.behavior,
            border_radius: self.border_radius,
            background_color: self.background_color,
            border_color: self.border_color,
            actions: self.actions.clone(),
        }
    }

    /// Non-destructively create a modified copy
    ///
    /// The mutator runs against a builder seeded from this value and the
    /// result is re-validated; extension can fail exactly like initial
    /// construction, and this value remains valid and usable afterwards.
    pub fn extend(&self, block: impl FnOnce(&mut ButtonInfoBuilder)) -> Result<ButtonInfo> {
        let mut builder = self.to_builder();
        block(&mut builder);
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label() -> TextInfo {
        TextInfo::with_text("Dismiss").unwrap()
    }

    #[test]
    fn test_build_with_valid_fields() {
        let mut invocations = 0u32;
        let button = ButtonInfo::build_with(|builder| {
            invocations += 1;
            builder.label = Some(label());
            builder.identifier = Some("dismiss_button".to_string());
        })
        .unwrap();

        // The mutator runs synchronously exactly once
        assert_eq!(invocations, 1);
        assert_eq!(button.identifier(), "dismiss_button");
        assert_eq!(button.label().text(), "Dismiss");
        assert_eq!(button.behavior(), ButtonBehavior::Dismiss);
        assert_eq!(button.border_radius(), 0);
        assert_eq!(button.background_color(), Color::TRANSPARENT);
        assert_eq!(button.border_color(), Color::TRANSPARENT);
        assert!(button.actions().is_none());
    }

    #[test]
    fn test_missing_required_fields() {
        assert!(ButtonInfo::build_with(|_| {}).is_err());

        let missing_identifier = ButtonInfo::build_with(|builder| {
            builder.label = Some(label());
        });
        assert!(missing_identifier.is_err());

        let missing_label = ButtonInfo::build_with(|builder| {
            builder.identifier = Some("id".to_string());
        });
        assert!(missing_label.is_err());
    }

    #[test]
    fn test_identifier_bounds_are_inclusive() {
        let build_with_len = |len: usize| {
            ButtonInfo::build_with(|builder| {
                builder.label = Some(label());
                builder.identifier = Some("x".repeat(len));
            })
        };

        assert!(build_with_len(0).is_err());
        assert!(build_with_len(1).is_ok());
        assert!(build_with_len(100).is_ok());
        assert!(build_with_len(101).is_err());
    }

    #[test]
    fn test_is_valid_mirrors_build() {
        let mut builder = ButtonInfoBuilder::new();
        assert!(!builder.is_valid());

        builder.label = Some(label());
        builder.identifier = Some("dismiss_button".to_string());
        assert!(builder.is_valid());
        assert!(builder.build().is_ok());
    }

    #[test]
    fn test_noop_extend_equals_original() {
        let original = ButtonInfo::build_with(|builder| {
            builder.label = Some(label());
            builder.identifier = Some("dismiss_button".to_string());
            builder.behavior = ButtonBehavior::Cancel;
            builder.border_radius = 4;
            builder.background_color = Color::WHITE;
            builder.actions = Some(HashMap::from([(
                "enable_feature".to_string(),
                ActionValue::from("user_notifications"),
            )]));
        })
        .unwrap();

        let mut invocations = 0u32;
        let extended = original.extend(|_| invocations += 1).unwrap();
        assert_eq!(invocations, 1);
        assert_eq!(extended, original);
    }

    #[test]
    fn test_failing_extend_leaves_original_usable() {
        let original = ButtonInfo::build_with(|builder| {
            builder.label = Some(label());
            builder.identifier = Some("dismiss_button".to_string());
        })
        .unwrap();

        let failed = original.extend(|builder| {
            builder.identifier = Some("x".repeat(101));
        });
        assert!(failed.is_err());

        // Original remains valid after the failed extension
        assert_eq!(original.identifier(), "dismiss_button");
        let retried = original
            .extend(|builder| builder.border_radius = 8)
            .unwrap();
        assert_eq!(retried.border_radius(), 8);
        assert_eq!(retried.identifier(), "dismiss_button");
    }
}
