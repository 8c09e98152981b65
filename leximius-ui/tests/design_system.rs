//! Integration tests covering the design-system contracts end to end

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use leximius_ui::components::{Alert, Avatar, AvatarContent, Badge, Button, Card, CardVariant};
use leximius_ui::{cn, ClassValue, Size, Variant};

#[test]
fn test_class_lists_are_deterministic() {
    // Same configuration, same class list, every time
    for variant in Variant::ALL {
        for size in Size::ALL {
            let first = Button::new()
                .with_variant(variant)
                .with_size(size)
                .class_list();
            let second = Button::new()
                .with_variant(variant)
                .with_size(size)
                .class_list();
            assert_eq!(first, second);
        }
    }
}

#[test]
fn test_structural_flags_only_add_tokens() {
    let plain = Button::new().class_list();
    let full = Button::new().full_width(true).class_list();

    for token in plain.split_whitespace() {
        assert!(full.contains(token), "flag removed token {token}");
    }
    assert!(full.contains("w-full"));
}

#[test]
fn test_cn_matches_component_composition() {
    // A component's class list is exactly what cn yields for its bundles
    let badge = Badge::new().with_variant(Variant::Success);
    let expected = cn([
        ClassValue::from("inline-flex items-center font-medium rounded-full"),
        ClassValue::from("bg-green-100 text-green-800"),
        ClassValue::from("px-2.5 py-0.5 text-sm"),
    ]);
    assert_eq!(badge.class_list(), expected);
}

#[test]
fn test_card_surfaces_are_distinct() {
    let variants = [
        CardVariant::Default,
        CardVariant::Outlined,
        CardVariant::Elevated,
        CardVariant::Glass,
        CardVariant::Gradient,
    ];
    let mut seen = std::collections::HashSet::new();
    for variant in variants {
        let classes = Card::new().with_variant(variant).class_list();
        assert!(seen.insert(classes), "duplicate surface for {variant:?}");
    }
}

#[test]
fn test_alert_dismiss_invokes_handler() {
    let fired = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&fired);

    let alert = Alert::new()
        .with_variant(Variant::Warning)
        .with_title("Maintenance window")
        .dismissible(move || {
            flag.store(true, Ordering::SeqCst);
        });

    assert!(alert.dismissible);
    alert.dismiss();
    assert!(fired.load(Ordering::SeqCst));
}

#[test]
fn test_avatar_failure_lifecycle() {
    let mut avatar = Avatar::new()
        .with_image("https://cdn.leximius.dev/u/42.png")
        .with_fallback("ML");

    assert!(matches!(avatar.content(), AvatarContent::Image { .. }));
    avatar.mark_image_failed();
    assert_eq!(avatar.content(), AvatarContent::Fallback("ML".to_string()));
}
