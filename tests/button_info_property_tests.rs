//! Property-based tests for the button info builder invariants.

use beacon_core::message::{ButtonBehavior, ButtonInfo, Color, TextInfo};
use proptest::prelude::*;

fn label() -> TextInfo {
    TextInfo::with_text("Dismiss").expect("static label is valid")
}

proptest! {
    /// Property: any identifier of 1 to 100 characters builds, and the
    /// sealed value's fields equal the builder's fields at build time.
    #[test]
    fn identifiers_within_bounds_build(identifier in "[a-z0-9_]{1,100}") {
        let button = ButtonInfo::build_with(|builder| {
            builder.label = Some(label());
            builder.identifier = Some(identifier.clone());
            builder.border_radius = 2;
            builder.background_color = Color::WHITE;
        });

        let button = button.expect("in-bounds identifier must build");
        prop_assert_eq!(button.identifier(), identifier.as_str());
        prop_assert_eq!(button.label().text(), "Dismiss");
        prop_assert_eq!(button.border_radius(), 2);
        prop_assert_eq!(button.background_color(), Color::WHITE);
    }

    /// Property: identifiers longer than 100 characters never build.
    #[test]
    fn oversized_identifiers_fail(identifier in "[a-z0-9_]{101,160}") {
        let button = ButtonInfo::build_with(|builder| {
            builder.label = Some(label());
            builder.identifier = Some(identifier);
        });

        prop_assert!(button.is_err());
    }

    /// Property: a noop extension reproduces the original field-wise.
    #[test]
    fn noop_extend_is_identity(
        identifier in "[a-z0-9_]{1,100}",
        border_radius in 0u32..64,
        cancel in any::<bool>(),
    ) {
        let original = ButtonInfo::build_with(|builder| {
            builder.label = Some(label());
            builder.identifier = Some(identifier);
            builder.border_radius = border_radius;
            builder.behavior = if cancel {
                ButtonBehavior::Cancel
            } else {
                ButtonBehavior::Dismiss
            };
        })
        .expect("in-bounds identifier must build");

        let extended = original.extend(|_| {}).expect("noop extend must build");
        prop_assert_eq!(&extended, &original);
    }

    /// Property: a failing extension never disturbs the original.
    #[test]
    fn failing_extend_preserves_original(identifier in "[a-z0-9_]{1,100}") {
        let original = ButtonInfo::build_with(|builder| {
            builder.label = Some(label());
            builder.identifier = Some(identifier.clone());
        })
        .expect("in-bounds identifier must build");

        let failed = original.extend(|builder| {
            builder.identifier = Some(String::new());
        });
        prop_assert!(failed.is_err());
        prop_assert_eq!(original.identifier(), identifier.as_str());

        // Still extendable after the failure
        let retried = original.extend(|builder| builder.border_radius = 1);
        prop_assert!(retried.is_ok());
    }
}

#[test]
fn test_identifier_limit_boundary() {
    let build_with_len = |len: usize| {
        ButtonInfo::build_with(|builder| {
            builder.label = Some(label());
            builder.identifier = Some("x".repeat(len));
        })
    };

    // Inclusive bounds on both ends
    assert!(build_with_len(1).is_ok());
    assert!(build_with_len(100).is_ok());
    assert!(build_with_len(0).is_err());
    assert!(build_with_len(101).is_err());
}

#[test]
fn test_multibyte_identifiers_count_characters_not_bytes() {
    // 100 two-byte characters exceed 100 bytes but not 100 characters
    let button = ButtonInfo::build_with(|builder| {
        builder.label = Some(label());
        builder.identifier = Some("é".repeat(100));
    });

    assert!(button.is_ok());
}
