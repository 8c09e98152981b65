//! Badge contract

use crate::class_name::{cn, ClassValue};
use crate::types::{Size, Variant};

const BASE_CLASSES: &str = "inline-flex items-center font-medium rounded-full";
const DOT_BASE_CLASSES: &str = "rounded-full mr-1.5";

/// Badge configuration
///
/// Defaults: `Primary` variant, `Md` size, no indicator dot. The dot flag is
/// structural: it prepends an indicator element with its own size/color
/// bundles.
#[derive(Debug, Clone)]
pub struct Badge {
    pub variant: Variant,
    pub size: Size,
    pub dot: bool,
}

impl Default for Badge {
    fn default() -> Self {
        Self {
            variant: Variant::Primary,
            size: Size::Md,
            dot: false,
        }
    }
}

impl Badge {
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

    pub fn with_dot(mut self, dot: bool) -> Self {
        self.dot = dot;
        self
    }

    /// The badge container's class list
    pub fn class_list(&self) -> String {
        cn([
            ClassValue::from(BASE_CLASSES),
            ClassValue::from(self.surface_classes()),
            ClassValue::from(self.size_classes()),
        ])
    }

    /// Class list for the indicator dot; present only when `dot` is set
    pub fn dot_class_list(&self) -> Option<String> {
        if !self.dot {
            return None;
        }
        Some(cn([
            ClassValue::from(DOT_BASE_CLASSES),
            ClassValue::from(self.dot_size_classes()),
            ClassValue::from(self.dot_color_classes()),
        ]))
    }

    fn surface_classes(&self) -> &'static str {
        match self.variant {
            Variant::Primary => "bg-blue-100 text-blue-800",
            Variant::Secondary => "bg-gray-100 text-gray-800",
            Variant::Success => "bg-green-100 text-green-800",
            Variant::Warning => "bg-yellow-100 text-yellow-800",
            Variant::Error => "bg-red-100 text-red-800",
            Variant::Info => "bg-cyan-100 text-cyan-800",
            Variant::Gradient => "bg-gradient-to-r from-blue-500 to-purple-600 text-white",
            Variant::Ghost => "bg-transparent border border-gray-300 text-gray-700",
            Variant::Outline => "bg-transparent border border-blue-500 text-blue-700",
        }
    }

    fn size_classes(&self) -> &'static str {
        match self.size {
            Size::Xs => "px-2 py-0.5 text-xs",
            Size::Sm => "px-2.5 py-0.5 text-xs",
            Size::Md => "px-2.5 py-0.5 text-sm",
            Size::Lg => "px-3 py-1 text-sm",
            Size::Xl => "px-3.5 py-1 text-base",
        }
    }

    fn dot_size_classes(&self) -> &'static str {
        match self.size {
            Size::Xs => "w-1.5 h-1.5",
            Size::Sm | Size::Md => "w-2 h-2",
            Size::Lg => "w-2.5 h-2.5",
            Size::Xl => "w-3 h-3",
        }
    }

    fn dot_color_classes(&self) -> &'static str {
        match self.variant {
            Variant::Primary | Variant::Outline => "bg-blue-500",
            Variant::Secondary => "bg-gray-500",
            Variant::Success => "bg-green-500",
            Variant::Warning => "bg-yellow-500",
            Variant::Error => "bg-red-500",
            Variant::Info => "bg-cyan-500",
            Variant::Gradient => "bg-gradient-to-r from-blue-500 to-purple-600",
            Variant::Ghost => "bg-gray-400",
        }
    }
}
