//! Route Registry
//!
//! The registry is the single source of truth for the site's link targets.
//! It is built once at process start - from a JSON file, a JSON string, or
//! descriptors constructed in code - and is immutable afterwards. Insertion
//! order is the only defined order; every query downstream preserves it.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{NavError, Result};

use super::descriptor::RouteDescriptor;

/// An ordered, immutable table of route descriptors indexed by path
#[derive(Debug, Clone, Default)]
pub struct RouteRegistry {
    /// All routes in insertion order
    routes: Vec<RouteDescriptor>,

    /// Index by path for exact-match lookup
    by_path: HashMap<String, usize>,
}

impl RouteRegistry {
    /// Build a registry from descriptors, rejecting duplicate paths
    pub fn from_routes(routes: Vec<RouteDescriptor>) -> Result<Self> {
        let mut registry = Self::default();
        for route in routes {
            if registry.by_path.contains_key(&route.path) {
                return Err(NavError::DuplicateRoute { path: route.path });
            }
            registry.by_path.insert(route.path.clone(), registry.routes.len());
            registry.routes.push(route);
        }
        Ok(registry)
    }

    /// Build a registry from a JSON array of route descriptors
    pub fn from_json(json: &str) -> Result<Self> {
        let routes: Vec<RouteDescriptor> =
            serde_json::from_str(json).map_err(|e| NavError::InvalidRouteTable {
                reason: e.to_string(),
            })?;
        Self::from_routes(routes)
    }

    /// Build a registry from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| NavError::ConfigLoadError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let routes: Vec<RouteDescriptor> =
            serde_json::from_str(&content).map_err(|e| NavError::InvalidRouteTable {
                reason: format!("{}: {}", path.display(), e),
            })?;
        Self::from_routes(routes)
    }

    /// Look up a route by exact path
    pub fn get(&self, path: &str) -> Option<&RouteDescriptor> {
        self.by_path.get(path).map(|idx| &self.routes[*idx])
    }

    /// Check if a path is present in the table
    pub fn contains(&self, path: &str) -> bool {
        self.by_path.contains_key(path)
    }

    /// All routes in insertion order
    pub fn all(&self) -> &[RouteDescriptor] {
        &self.routes
    }

    /// Number of routes in the table
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Check the table for soft configuration problems
    ///
    /// Hard problems (duplicate paths) are rejected at construction. This
    /// reports the tolerated ones: a disabled route without placeholder copy
    /// degrades the coming-soon page but breaks nothing, and a path that
    /// does not start with '/' will never match a lookup.
    pub fn validate_strict(&self) -> std::result::Result<(), Vec<String>> {
        let mut warnings = vec![];

        for route in &self.routes {
            if !route.path.starts_with('/') {
                warnings.push(format!(
                    "route '{}' is not an absolute path",
                    route.path
                ));
            }
            if !route.is_available && route.description.is_none() {
                warnings.push(format!(
                    "disabled route '{}' has no description for its placeholder page",
                    route.path
                ));
            }
            if route.label.is_empty() {
                warnings.push(format!("route '{}' has an empty label", route.path));
            }
        }

        if warnings.is_empty() {
            Ok(())
        } else {
            Err(warnings)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::descriptor::RouteCategory;

    fn sample_routes() -> Vec<RouteDescriptor> {
        vec![
            RouteDescriptor::new("/", "Home", RouteCategory::Main).popular(),
            RouteDescriptor::new("/about", "About", RouteCategory::Main),
            RouteDescriptor::new("/careers", "Careers", RouteCategory::Other)
                .coming_soon("Q1 2026", "Join the team"),
        ]
    }

    #[test]
    fn test_from_routes_preserves_order() {
        let registry = RouteRegistry::from_routes(sample_routes()).unwrap();
        let paths: Vec<&str> = registry.all().iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, vec!["/", "/about", "/careers"]);
    }

    #[test]
    fn test_duplicate_path_rejected() {
        let mut routes = sample_routes();
        routes.push(RouteDescriptor::new("/about", "About Again", RouteCategory::Main));

        let err = RouteRegistry::from_routes(routes).unwrap_err();
        assert_eq!(err.error_code(), "DUPLICATE_ROUTE");
        assert!(err.to_string().contains("/about"));
    }

    #[test]
    fn test_exact_match_only() {
        let registry = RouteRegistry::from_routes(sample_routes()).unwrap();
        assert!(registry.get("/about").is_some());
        assert!(registry.get("/about/").is_none());
        assert!(registry.get("/ABOUT").is_none());
    }

    #[test]
    fn test_from_json() {
        let registry = RouteRegistry::from_json(
            r#"[
                { "path": "/", "label": "Home", "is_available": true, "category": "main" },
                { "path": "/docs", "label": "Documentation", "is_available": true, "category": "other", "is_popular": true }
            ]"#,
        )
        .unwrap();
        assert_eq!(registry.len(), 2);
        assert!(registry.get("/docs").unwrap().is_popular);
    }

    #[test]
    fn test_from_invalid_json() {
        let err = RouteRegistry::from_json("not valid json").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_ROUTE_TABLE");
    }

    #[test]
    fn test_validate_strict_flags_missing_description() {
        let routes = vec![RouteDescriptor {
            path: "/settings".to_string(),
            label: "Settings".to_string(),
            is_available: false,
            category: RouteCategory::Dashboard,
            is_popular: false,
            expected_date: Some("Q1 2026".to_string()),
            description: None,
        }];
        let registry = RouteRegistry::from_routes(routes).unwrap();

        let warnings = registry.validate_strict().unwrap_err();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("/settings"));
    }

    #[test]
    fn test_validate_strict_clean_table() {
        let registry = RouteRegistry::from_routes(sample_routes()).unwrap();
        assert!(registry.validate_strict().is_ok());
    }
}
