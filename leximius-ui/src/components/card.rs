//! Card contract

use serde::{Deserialize, Serialize};

use crate::class_name::{cn, ClassValue};
use crate::types::Size;

const BASE_CLASSES: &str = "rounded-2xl transition-all duration-200";
const HOVER_CLASSES: &str =
    "hover:shadow-elegant-lg hover:-translate-y-1 hover:scale-[1.02] cursor-pointer";

/// Card surface treatment (cards have their own variant set, not the
/// shared action variants)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardVariant {
    #[default]
    Default,
    Outlined,
    Elevated,
    Glass,
    Gradient,
}

impl CardVariant {
    pub fn surface_classes(&self) -> &'static str {
        match self {
            CardVariant::Default => "bg-white border border-gray-200 shadow-elegant",
            CardVariant::Outlined => "bg-white border-2 border-gray-300",
            CardVariant::Elevated => "bg-white shadow-elegant-lg border border-gray-100",
            CardVariant::Glass => {
                "bg-white/80 backdrop-blur-xl border border-white/20 shadow-elegant"
            }
            CardVariant::Gradient => {
                "bg-gradient-to-br from-brand-50 to-purple-50 border border-brand-200"
            }
        }
    }

    pub const ALL: [CardVariant; 5] = [
        CardVariant::Default,
        CardVariant::Outlined,
        CardVariant::Elevated,
        CardVariant::Glass,
        CardVariant::Gradient,
    ];
}

/// Padding scale for card interiors
fn padding_classes(size: Size) -> &'static str {
    match size {
        Size::Xs => "p-4",
        Size::Sm => "p-6",
        Size::Md => "p-8",
        Size::Lg => "p-10",
        Size::Xl => "p-12",
    }
}

/// Card configuration
///
/// Defaults: default surface, `Md` padding, no hover lift.
#[derive(Debug, Clone, Default)]
pub struct Card {
    pub variant: CardVariant,
    pub padding: Size,
    pub hover: bool,
}

impl Card {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_variant(mut self, variant: CardVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_padding(mut self, padding: Size) -> Self {
        self.padding = padding;
        self
    }

    pub fn hover(mut self, hover: bool) -> Self {
        self.hover = hover;
        self
    }

    /// The card's class list
    pub fn class_list(&self) -> String {
        cn([
            ClassValue::from(BASE_CLASSES),
            ClassValue::from(self.variant.surface_classes()),
            ClassValue::from(padding_classes(self.padding)),
            ClassValue::Map(vec![(HOVER_CLASSES.to_string(), self.hover)]),
        ])
    }
}
