//! Input contract

use crate::class_name::{cn, ClassValue};
use crate::types::Size;

const BASE_CLASSES: &str = "block w-full border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent disabled:opacity-50 disabled:cursor-not-allowed";
const ERROR_CLASSES: &str = "border-red-500 focus:ring-red-500";

/// Input type attribute values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    #[default]
    Text,
    Email,
    Password,
    Number,
    Tel,
    Url,
    Search,
}

impl InputKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Email => "email",
            InputKind::Password => "password",
            InputKind::Number => "number",
            InputKind::Tel => "tel",
            InputKind::Url => "url",
            InputKind::Search => "search",
        }
    }
}

/// Input configuration
///
/// Defaults: text kind, `Md` size (input sizing scale), no label, no error.
/// An error message switches the border/ring bundle and is rendered as help
/// text below the field; a label with `required` set gains the asterisk
/// marker.
#[derive(Debug, Clone, Default)]
pub struct Input {
    pub kind: InputKind,
    pub size: Size,
    pub label: Option<String>,
    pub error: Option<String>,
    pub disabled: bool,
    pub required: bool,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_kind(mut self, kind: InputKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Whether the rendered label carries the required marker
    pub fn shows_required_marker(&self) -> bool {
        self.label.is_some() && self.required
    }

    /// The input element's class list
    pub fn class_list(&self) -> String {
        cn([
            ClassValue::from(BASE_CLASSES),
            ClassValue::from(self.size.input_classes()),
            ClassValue::Map(vec![(ERROR_CLASSES.to_string(), self.has_error())]),
        ])
    }
}
