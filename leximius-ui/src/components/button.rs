//! Button contract

use crate::class_name::{cn, ClassValue};
use crate::types::{Size, Variant};

const BASE_CLASSES: &str = "inline-flex items-center justify-center font-medium rounded-lg transition-all duration-200 focus:outline-none focus:ring-2 focus:ring-offset-2";

/// Button configuration
///
/// Defaults: `Primary` variant, `Md` size, enabled, not loading, shrink to
/// content. Disabled and loading buttons render but do not act.
#[derive(Debug, Clone)]
pub struct Button {
    pub variant: Variant,
    pub size: Size,
    pub disabled: bool,
    pub loading: bool,
    pub full_width: bool,
}

impl Default for Button {
    fn default() -> Self {
        Self {
            variant: Variant::Primary,
            size: Size::Md,
            disabled: false,
            loading: false,
            full_width: false,
        }
    }
}

impl Button {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    /// Whether activating the button should do anything
    pub fn is_interactive(&self) -> bool {
        !self.disabled && !self.loading
    }

    /// The button's class list
    pub fn class_list(&self) -> String {
        cn([
            ClassValue::from(BASE_CLASSES),
            ClassValue::from(self.variant.action_classes()),
            ClassValue::from(self.size.action_classes()),
            ClassValue::Map(vec![
                ("w-full".to_string(), self.full_width),
                (
                    "opacity-50 cursor-not-allowed".to_string(),
                    self.disabled || self.loading,
                ),
            ]),
        ])
    }
}
