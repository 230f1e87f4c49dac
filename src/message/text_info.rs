//! # Text Info Value
//!
//! Immutable text descriptor for message labels, built through a validating
//! builder. Required: non-empty text. Everything else defaults.

use crate::error::{ActionError, Result};
use serde::{Deserialize, Serialize};

use super::color::Color;

/// Text alignment within its rendered container
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Mutable builder for [`TextInfo`]
///
/// Defaults are applied at construction time, so a fresh builder only lacks
/// its required field.
#[derive(Debug, Clone)]
pub struct TextInfoBuilder {
    /// Text content. Required, non-empty.
    pub text: Option<String>,
    /// Font size in points. Optional, defaults to 14.
    pub size: u32,
    /// Text color. Optional, defaults to black.
    pub color: Color,
    /// Alignment. Optional, defaults to left.
    pub alignment: TextAlignment,
}

impl Default for TextInfoBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TextInfoBuilder {
    pub fn new() -> Self {
        Self {
            text: None,
            size: 14,
            color: Color::BLACK,
            alignment: TextAlignment::Left,
        }
    }

    /// Check if the builder will produce a text info value
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    fn validate(&self) -> Result<()> {
        match &self.text {
            None => Err(ActionError::validation("Text info requires text")),
            Some(text) if text.is_empty() => {
                Err(ActionError::validation("Text info text cannot be empty"))
            }
            Some(_) => Ok(()),
        }
    }

    /// Seal the builder into an immutable value
    pub fn build(self) -> Result<TextInfo> {
        self.validate()?;

        let text = self
            .text
            .ok_or_else(|| ActionError::validation("Text info requires text"))?;

        Ok(TextInfo {
            text,
            size: self.size,
            color: self.color,
            alignment: self.alignment,
        })
    }
}

/// Immutable text descriptor, constructed only via a validated builder
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextInfo {
    text: String,
    size: u32,
    color: Color,
    alignment: TextAlignment,
}

impl TextInfo {
    /// Build a text info with a builder mutator, invoked exactly once
    pub fn build_with(block: impl FnOnce(&mut TextInfoBuilder)) -> Result<TextInfo> {
        let mut builder = TextInfoBuilder::new();
        block(&mut builder);
        builder.build()
    }

    /// Convenience constructor for a plain label with defaults
    pub fn with_text(text: impl Into<String>) -> Result<TextInfo> {
        let text = text.into();
        Self::build_with(|builder| builder.text = Some(text))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn alignment(&self) -> TextAlignment {
        self.alignment
    }

    /// Seed a fresh builder from this value's fields
    pub fn to_builder(&self) -> TextInfoBuilder {
        TextInfoBuilder {
            text: Some(self.text.clone()),
            size: self.size,
            color: self.color,
            alignment: self.alignment,
        }
    }

    /// Non-destructively create a modified copy
    ///
    /// The mutator runs against a builder seeded from this value; the result
    /// is re-validated and this value is never touched.
    pub fn extend(&self, block: impl FnOnce(&mut TextInfoBuilder)) -> Result<TextInfo> {
        let mut builder = self.to_builder();
        block(&mut builder);
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_requires_text() {
        // The mutator runs exactly once even when validation then fails
        let mut invocations = 0u32;
        assert!(TextInfo::build_with(|_| invocations += 1).is_err());
        assert_eq!(invocations, 1);
        assert!(TextInfo::build_with(|builder| builder.text = Some(String::new())).is_err());
        assert!(TextInfo::with_text("Dismiss").is_ok());
    }

    #[test]
    fn test_defaults_applied_at_construction() {
        let builder = TextInfoBuilder::new();
        assert_eq!(builder.size, 14);
        assert_eq!(builder.color, Color::BLACK);
        assert_eq!(builder.alignment, TextAlignment::Left);
    }

    #[test]
    fn test_extend_overrides_fields() {
        let original = TextInfo::with_text("Dismiss").unwrap();
        let extended = original
            .extend(|builder| {
                builder.alignment = TextAlignment::Center;
                builder.size = 18;
            })
            .unwrap();

        assert_eq!(extended.text(), "Dismiss");
        assert_eq!(extended.alignment(), TextAlignment::Center);
        assert_eq!(extended.size(), 18);

        // Original untouched
        assert_eq!(original.alignment(), TextAlignment::Left);
        assert_eq!(original.size(), 14);
    }
}
