//! Shared component enumerations and their class maps
//!
//! Variants and sizes are closed enumerations; every component's styling is
//! an exhaustive match over them, so adding a variant is a compile-time
//! obligation to supply its class bundle everywhere it is consumed.

use serde::{Deserialize, Serialize};

/// Semantic variant shared across action-styled components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Primary,
    Secondary,
    Success,
    Warning,
    Error,
    Info,
    Gradient,
    Ghost,
    Outline,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Primary => "primary",
            Variant::Secondary => "secondary",
            Variant::Success => "success",
            Variant::Warning => "warning",
            Variant::Error => "error",
            Variant::Info => "info",
            Variant::Gradient => "gradient",
            Variant::Ghost => "ghost",
            Variant::Outline => "outline",
        }
    }

    /// Action class bundle, shared by button-like components
    pub fn action_classes(&self) -> &'static str {
        match self {
            Variant::Primary => {
                "bg-brand-600 text-white hover:bg-brand-700 focus:ring-brand-500 hover:shadow-glow"
            }
            Variant::Secondary => {
                "bg-white text-gray-900 border-2 border-gray-200 hover:border-brand-300 hover:bg-brand-50 focus:ring-brand-500"
            }
            Variant::Success => {
                "bg-success-600 text-white hover:bg-success-700 focus:ring-success-500 hover:shadow-glow"
            }
            Variant::Warning => {
                "bg-warning-500 text-white hover:bg-warning-600 focus:ring-warning-500 hover:shadow-glow"
            }
            Variant::Error => {
                "bg-error-600 text-white hover:bg-error-700 focus:ring-error-500 hover:shadow-glow"
            }
            Variant::Info => {
                "bg-brand-500 text-white hover:bg-brand-600 focus:ring-brand-500 hover:shadow-glow"
            }
            Variant::Gradient => {
                "bg-gradient-to-r from-brand-600 to-purple-600 text-white hover:from-brand-700 hover:to-purple-700 focus:ring-brand-500 hover:shadow-glow"
            }
            Variant::Ghost => "text-gray-600 hover:text-gray-900 hover:bg-gray-100 focus:ring-gray-500",
            Variant::Outline => {
                "border-2 border-brand-600 text-brand-600 hover:bg-brand-600 hover:text-white focus:ring-brand-500"
            }
        }
    }
}

/// Component sizing scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

impl Default for Size {
    fn default() -> Self {
        Size::Md
    }
}

impl Size {
    pub fn as_str(&self) -> &'static str {
        match self {
            Size::Xs => "xs",
            Size::Sm => "sm",
            Size::Md => "md",
            Size::Lg => "lg",
            Size::Xl => "xl",
        }
    }

    /// Padding/text bundle shared by button-like components
    pub fn action_classes(&self) -> &'static str {
        match self {
            Size::Xs => "px-3 py-1.5 text-xs",
            Size::Sm => "px-4 py-2 text-sm",
            Size::Md => "px-6 py-3 text-base",
            Size::Lg => "px-8 py-4 text-lg",
            Size::Xl => "px-10 py-5 text-xl",
        }
    }

    /// Padding/text bundle for form inputs (tighter horizontal rhythm)
    pub fn input_classes(&self) -> &'static str {
        match self {
            Size::Xs => "px-3 py-1.5 text-xs",
            Size::Sm => "px-4 py-2 text-sm",
            Size::Md => "px-4 py-3 text-base",
            Size::Lg => "px-6 py-4 text-lg",
            Size::Xl => "px-8 py-5 text-xl",
        }
    }

    /// All sizes, smallest to largest
    pub const ALL: [Size; 5] = [Size::Xs, Size::Sm, Size::Md, Size::Lg, Size::Xl];
}

impl Variant {
    /// All variants, in declaration order
    pub const ALL: [Variant; 9] = [
        Variant::Primary,
        Variant::Secondary,
        Variant::Success,
        Variant::Warning,
        Variant::Error,
        Variant::Info,
        Variant::Gradient,
        Variant::Ghost,
        Variant::Outline,
    ];
}
