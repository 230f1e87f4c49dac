//! # Message Content Values
//!
//! Immutable in-app message content values and their validating builders.
//!
//! ## Overview
//!
//! Content values are sealed: they can only be constructed through a builder
//! whose `build` step enforces required fields and bounds, so no partial or
//! invalid value is ever observable. An existing value can be *extended* -
//! a fresh builder is seeded from every current field, a caller mutator runs
//! against it, and `build` re-validates - without the original ever being
//! touched.
//!
//! Builders are short-lived, single-owner construction scaffolding and are
//! not thread-safe; the produced values are deep-immutable and freely
//! shareable across threads.

pub mod button_info;
pub mod color;
pub mod text_info;

pub use button_info::{ButtonBehavior, ButtonInfo, ButtonInfoBuilder};
pub use color::Color;
pub use text_info::{TextAlignment, TextInfo, TextInfoBuilder};
