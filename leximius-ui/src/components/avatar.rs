//! Avatar contract

use crate::class_name::{cn, ClassValue};
use crate::types::Size;

const BASE_CLASSES: &str = "inline-flex items-center justify-center rounded-full bg-gray-100 text-gray-600 font-medium overflow-hidden";

/// What the avatar currently shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvatarContent {
    /// The supplied image
    Image { src: String, alt: String },
    /// Fallback text: supplied initials, or "?" when none were given
    Fallback(String),
}

/// Avatar configuration
///
/// Shows the image when a source is supplied; once the image is reported
/// failed it permanently falls back to initials. The failure flag is the
/// only mutable state in the design system - it mirrors an image error
/// event, not a reactive data change.
#[derive(Debug, Clone)]
pub struct Avatar {
    pub size: Size,
    src: Option<String>,
    alt: Option<String>,
    fallback: Option<String>,
    image_failed: bool,
}

impl Default for Avatar {
    fn default() -> Self {
        Self {
            size: Size::Md,
            src: None,
            alt: None,
            fallback: None,
            image_failed: false,
        }
    }
}

impl Avatar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn with_image(mut self, src: impl Into<String>) -> Self {
        self.src = Some(src.into());
        self
    }

    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }

    /// Record that the image failed to load
    ///
    /// From here on [`content`](Self::content) yields the fallback.
    pub fn mark_image_failed(&mut self) {
        self.image_failed = true;
    }

    /// What to render right now
    pub fn content(&self) -> AvatarContent {
        match &self.src {
            Some(src) if !self.image_failed => AvatarContent::Image {
                src: src.clone(),
                alt: self.alt.clone().unwrap_or_else(|| "Avatar".to_string()),
            },
            _ => AvatarContent::Fallback(
                self.fallback.clone().unwrap_or_else(|| "?".to_string()),
            ),
        }
    }

    /// The avatar container's class list
    pub fn class_list(&self) -> String {
        cn([
            ClassValue::from(BASE_CLASSES),
            ClassValue::from(self.size_classes()),
        ])
    }

    fn size_classes(&self) -> &'static str {
        match self.size {
            Size::Xs => "w-6 h-6 text-xs",
            Size::Sm => "w-8 h-8 text-sm",
            Size::Md => "w-10 h-10 text-base",
            Size::Lg => "w-12 h-12 text-lg",
            Size::Xl => "w-16 h-16 text-xl",
        }
    }
}
