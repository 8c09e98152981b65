//! Route descriptor types

use serde::{Deserialize, Serialize};

/// Category a route belongs to, used for grouping navigation links
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteCategory {
    /// Top-level marketing pages
    Main,
    /// Component library pages
    Library,
    /// Sign-in / sign-up pages
    Auth,
    /// Authenticated dashboard pages
    Dashboard,
    /// Privacy policy, terms of service
    Legal,
    /// Everything else
    Other,
}

impl RouteCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteCategory::Main => "main",
            RouteCategory::Library => "library",
            RouteCategory::Auth => "auth",
            RouteCategory::Dashboard => "dashboard",
            RouteCategory::Legal => "legal",
            RouteCategory::Other => "other",
        }
    }
}

/// A single entry in the route table
///
/// Routes are exact, absolute paths - no wildcards. Paths the table does not
/// know about are handled downstream by the breadcrumb engine's segment
/// fallback, never here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteDescriptor {
    /// Absolute route path, unique within the table (e.g., "/library/playground")
    pub path: String,

    /// Display label for navigation links
    pub label: String,

    /// Whether navigating here shows real content. Disabled routes are
    /// redirected to the coming-soon placeholder at link-construction time.
    pub is_available: bool,

    /// Grouping category
    pub category: RouteCategory,

    /// Marks routes surfaced in "popular" link lists
    #[serde(default)]
    pub is_popular: bool,

    /// When a disabled route is expected to ship (e.g., "Q1 2026")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_date: Option<String>,

    /// Placeholder copy for disabled routes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl RouteDescriptor {
    /// Create an available route with the given path, label, and category
    pub fn new(path: impl Into<String>, label: impl Into<String>, category: RouteCategory) -> Self {
        Self {
            path: path.into(),
            label: label.into(),
            is_available: true,
            category,
            is_popular: false,
            expected_date: None,
            description: None,
        }
    }

    /// Mark this route as popular
    pub fn popular(mut self) -> Self {
        self.is_popular = true;
        self
    }

    /// Mark this route as not yet available, with placeholder metadata
    pub fn coming_soon(
        mut self,
        expected_date: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.is_available = false;
        self.expected_date = Some(expected_date.into());
        self.description = Some(description.into());
        self
    }
}

/// Placeholder metadata for a known-but-disabled route
///
/// Only emitted for routes present in the table with `is_available = false`;
/// unknown paths yield nothing, so the placeholder page can tell the
/// difference even though `is_route_available` cannot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComingSoonInfo {
    /// Route label, shown as the placeholder title
    pub title: String,
    /// Placeholder copy, if the table carries any
    pub description: Option<String>,
    /// Expected ship date, if the table carries one
    pub expected_date: Option<String>,
}
