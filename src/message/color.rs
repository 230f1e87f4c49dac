//! # Color Value
//!
//! Plain RGBA data carrier for message content payloads. Theme and
//! appearance resolution happen outside the SDK core; this type only
//! round-trips the hex encoding used on the wire.

use crate::error::{ActionError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// RGBA color carried by message content payloads
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Fully transparent, the default for message content colors
    pub const TRANSPARENT: Color = Color {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    pub const BLACK: Color = Color {
        r: 0,
        g: 0,
        b: 0,
        a: 255,
    };

    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
        a: 255,
    };

    pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from RGB components
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse a `#RRGGBB` or `#AARRGGBB` hex string as used in payloads
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.is_ascii() {
            return Err(ActionError::validation(format!(
                "Invalid color hex string: {hex}"
            )));
        }

        let parse_pair = |pair: &str| -> Result<u8> {
            u8::from_str_radix(pair, 16)
                .map_err(|_| ActionError::validation(format!("Invalid color hex string: {hex}")))
        };

        match digits.len() {
            6 => Ok(Self::rgb(
                parse_pair(&digits[0..2])?,
                parse_pair(&digits[2..4])?,
                parse_pair(&digits[4..6])?,
            )),
            8 => Ok(Self::rgba(
                parse_pair(&digits[2..4])?,
                parse_pair(&digits[4..6])?,
                parse_pair(&digits[6..8])?,
                parse_pair(&digits[0..2])?,
            )),
            _ => Err(ActionError::validation(format!(
                "Invalid color hex string: {hex}"
            ))),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
    }
}
