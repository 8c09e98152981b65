//! Breadcrumb presentation hints
//!
//! Derived purely from the shape of the path, independent of the map: the
//! page chrome uses these to pick trail styling without consulting the
//! route tables.

use serde::{Deserialize, Serialize};

/// Trail rendering style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrailStyle {
    /// Compact single-line trail for top-level pages (avoids navbar clutter)
    Minimal,
    /// Full trail with separators for nested pages
    Full,
}

/// Section-specific trail accenting, chosen by path prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionVariant {
    Auth,
    Admin,
    Dashboard,
    Library,
    Default,
}

/// Presentation hints for rendering a breadcrumb trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbDisplay {
    /// Whether to render the trail at all (false only on the root page)
    pub show: bool,

    /// Whether to render the home icon (false only on the root page)
    pub show_home: bool,

    /// Minimal for top-level pages, full for nested ones
    pub style: TrailStyle,

    /// Animate only nested trails, keeping top-level focus on the navbar
    pub animated: bool,

    /// Section accent by first matching path prefix
    pub variant: SectionVariant,
}

impl BreadcrumbDisplay {
    /// Derive presentation hints for a path
    pub fn for_path(path: &str) -> Self {
        let depth = path.split('/').filter(|s| !s.is_empty()).count();
        let is_root = path == "/" || path.is_empty();

        Self {
            show: !is_root,
            show_home: !is_root,
            style: if depth <= 1 {
                TrailStyle::Minimal
            } else {
                TrailStyle::Full
            },
            animated: depth > 1,
            variant: SectionVariant::for_path(path),
        }
    }
}

impl SectionVariant {
    /// First matching prefix wins, in this priority order
    pub fn for_path(path: &str) -> Self {
        if path.starts_with("/auth/") {
            SectionVariant::Auth
        } else if path.starts_with("/admin/") {
            SectionVariant::Admin
        } else if path.starts_with("/dashboard") {
            SectionVariant::Dashboard
        } else if path.starts_with("/library/") {
            SectionVariant::Library
        } else {
            SectionVariant::Default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_hides_trail() {
        let display = BreadcrumbDisplay::for_path("/");
        assert!(!display.show);
        assert!(!display.show_home);
        assert_eq!(display.style, TrailStyle::Minimal);
        assert!(!display.animated);
    }

    #[test]
    fn test_top_level_is_minimal() {
        let display = BreadcrumbDisplay::for_path("/about");
        assert!(display.show);
        assert_eq!(display.style, TrailStyle::Minimal);
        assert!(!display.animated);
        assert_eq!(display.variant, SectionVariant::Default);
    }

    #[test]
    fn test_nested_dashboard_path() {
        let display = BreadcrumbDisplay::for_path("/dashboard/settings");
        assert_eq!(display.variant, SectionVariant::Dashboard);
        assert_eq!(display.style, TrailStyle::Full);
        assert!(display.animated);
    }

    #[test]
    fn test_variant_prefix_priority() {
        assert_eq!(SectionVariant::for_path("/auth/login"), SectionVariant::Auth);
        assert_eq!(SectionVariant::for_path("/admin/users"), SectionVariant::Admin);
        // Bare "/dashboard" matches without a trailing slash
        assert_eq!(SectionVariant::for_path("/dashboard"), SectionVariant::Dashboard);
        assert_eq!(
            SectionVariant::for_path("/library/components"),
            SectionVariant::Library
        );
        // Bare section roots without trailing slash fall through for auth/admin/library
        assert_eq!(SectionVariant::for_path("/auth"), SectionVariant::Default);
        assert_eq!(SectionVariant::for_path("/library"), SectionVariant::Default);
    }
}
