//! Alert contract

use std::fmt;

use crate::class_name::{cn, ClassValue};
use crate::types::Variant;

const BASE_CLASSES: &str = "rounded-lg border p-4";

/// Callback invoked when the close control is activated
pub type DismissHandler = Box<dyn Fn() + Send + Sync>;

/// Alert configuration
///
/// Defaults: `Info` variant, no title, not dismissible. Dismissing invokes
/// the caller-supplied handler and changes nothing here - the caller owns
/// visibility.
pub struct Alert {
    pub variant: Variant,
    pub title: Option<String>,
    pub dismissible: bool,
    on_dismiss: Option<DismissHandler>,
}

impl Default for Alert {
    fn default() -> Self {
        Self {
            variant: Variant::Info,
            title: None,
            dismissible: false,
            on_dismiss: None,
        }
    }
}

impl fmt::Debug for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Alert")
            .field("variant", &self.variant)
            .field("title", &self.title)
            .field("dismissible", &self.dismissible)
            .field("on_dismiss", &self.on_dismiss.as_ref().map(|_| "<handler>"))
            .finish()
    }
}

impl Alert {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Add the close control, wiring it to the given handler
    pub fn dismissible(mut self, on_dismiss: impl Fn() + Send + Sync + 'static) -> Self {
        self.dismissible = true;
        self.on_dismiss = Some(Box::new(on_dismiss));
        self
    }

    /// Activate the close control
    ///
    /// No-op unless the alert is dismissible; never mutates the alert.
    pub fn dismiss(&self) {
        if self.dismissible {
            if let Some(handler) = &self.on_dismiss {
                handler();
            }
        }
    }

    /// The alert container's class list
    pub fn class_list(&self) -> String {
        cn([
            ClassValue::from(BASE_CLASSES),
            ClassValue::from(self.surface_classes()),
        ])
    }

    /// Surface bundle by variant
    pub fn surface_classes(&self) -> &'static str {
        match self.variant {
            Variant::Primary => "bg-blue-50 border-blue-200 text-blue-900",
            Variant::Secondary => "bg-gray-50 border-gray-200 text-gray-900",
            Variant::Success => "bg-green-50 border-green-200 text-green-900",
            Variant::Warning => "bg-yellow-50 border-yellow-200 text-yellow-900",
            Variant::Error => "bg-red-50 border-red-200 text-red-900",
            Variant::Info => "bg-cyan-50 border-cyan-200 text-cyan-900",
            Variant::Gradient => {
                "bg-gradient-to-r from-blue-50 to-purple-50 border-blue-200 text-blue-900"
            }
            Variant::Ghost => "bg-transparent border-gray-200 text-gray-700",
            Variant::Outline => "bg-transparent border-blue-200 text-blue-700",
        }
    }

    /// Icon tint by variant
    pub fn icon_classes(&self) -> &'static str {
        match self.variant {
            Variant::Secondary | Variant::Ghost => "text-gray-500",
            Variant::Success => "text-green-500",
            Variant::Warning => "text-yellow-500",
            Variant::Error => "text-red-500",
            Variant::Info => "text-cyan-500",
            Variant::Primary | Variant::Gradient | Variant::Outline => "text-blue-500",
        }
    }

    /// Symbolic icon name by variant (opaque to this layer)
    pub fn icon_name(&self) -> &'static str {
        match self.variant {
            Variant::Success => "CheckCircle",
            Variant::Warning => "AlertTriangle",
            Variant::Error => "AlertCircle",
            _ => "Info",
        }
    }
}
