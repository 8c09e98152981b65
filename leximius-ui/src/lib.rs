//! Leximius UI
//!
//! The Leximius design system as a library of presentational contracts:
//! every component is a plain configuration struct whose styling is an
//! exhaustive match from closed variant/size enumerations to fixed class
//! bundles, joined through the [`cn`] class-token utility. Nothing here
//! renders; the crate answers "given this configuration, what classes and
//! structure does the component get".
//!
//! # Example
//!
//! ```rust
//! use leximius_ui::{cn, Button, ClassValue, Size, Variant};
//!
//! let button = Button::new()
//!     .with_variant(Variant::Gradient)
//!     .with_size(Size::Lg)
//!     .loading(true);
//!
//! // Loading buttons keep their styling but stop being interactive
//! assert!(!button.is_interactive());
//! assert!(button.class_list().contains("px-8 py-4"));
//!
//! // The same joiner the components use is available directly
//! let classes = cn([
//!     ClassValue::from("rounded-lg"),
//!     ClassValue::from(("shadow-lg", true)),
//!     ClassValue::from(("hidden", false)),
//! ]);
//! assert_eq!(classes, "rounded-lg shadow-lg");
//! ```

pub mod class_name;
pub mod components;
pub mod types;
pub mod utils;

// Class-token joiner
pub use class_name::{cn, ClassValue};

// Shared enumerations
pub use types::{Size, Variant};

// Component contracts
pub use components::{
    Alert, Avatar, AvatarContent, Badge, Button, Card, CardVariant, DismissHandler, Input,
    InputKind,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_full_component_workflow() {
        // Configure a form row: labelled email input plus submit button
        let input = Input::new()
            .with_kind(InputKind::Email)
            .with_label("Work email")
            .required(true);
        assert!(input.shows_required_marker());
        assert!(!input.has_error());

        let submit = Button::new()
            .with_variant(Variant::Primary)
            .full_width(true);
        assert!(submit.is_interactive());
        assert!(submit.class_list().contains("w-full"));

        // Validate what the user typed before enabling submission
        assert!(utils::validate::email("dev@leximius.dev"));
        assert!(!utils::validate::email("dev@leximius"));

        // Surface the failure state on the input
        let input = input.with_error("Enter a valid email address");
        assert!(input.has_error());
        assert!(input.class_list().contains("border-red-500"));
    }
}
