//! Route Resolver - availability and category views over the registry
//!
//! All operations are total: an unknown path is answered with `false`,
//! `None`, or an empty sequence, never an error. A navigation link should
//! never crash the page.

use super::descriptor::{ComingSoonInfo, RouteCategory, RouteDescriptor};
use super::registry::RouteRegistry;

/// Query surface over an injected, immutable route registry
#[derive(Debug, Clone, Default)]
pub struct RouteResolver {
    registry: RouteRegistry,
}

impl RouteResolver {
    /// Create a resolver over the given registry
    pub fn new(registry: RouteRegistry) -> Self {
        Self { registry }
    }

    /// The underlying registry
    pub fn registry(&self) -> &RouteRegistry {
        &self.registry
    }

    /// Look up a route by exact path
    pub fn get_route(&self, path: &str) -> Option<&RouteDescriptor> {
        self.registry.get(path)
    }

    /// Check if a path is known AND available
    ///
    /// Returns false both for unknown paths and for known-but-disabled
    /// routes. Callers that need to tell those apart use
    /// [`coming_soon_info`](Self::coming_soon_info); for link construction
    /// the two are the same placeholder experience.
    pub fn is_route_available(&self, path: &str) -> bool {
        self.registry.get(path).map_or(false, |r| r.is_available)
    }

    /// Routes marked popular that are also available, in registry order
    pub fn popular_routes(&self) -> Vec<&RouteDescriptor> {
        self.registry
            .all()
            .iter()
            .filter(|r| r.is_popular && r.is_available)
            .collect()
    }

    /// Routes in the given category, in registry order
    pub fn routes_by_category(&self, category: RouteCategory) -> Vec<&RouteDescriptor> {
        self.registry
            .all()
            .iter()
            .filter(|r| r.category == category)
            .collect()
    }

    /// All available routes, in registry order
    pub fn available_routes(&self) -> Vec<&RouteDescriptor> {
        self.registry
            .all()
            .iter()
            .filter(|r| r.is_available)
            .collect()
    }

    /// All disabled routes, in registry order
    pub fn coming_soon_routes(&self) -> Vec<&RouteDescriptor> {
        self.registry
            .all()
            .iter()
            .filter(|r| !r.is_available)
            .collect()
    }

    /// Placeholder metadata for a known-but-disabled route
    ///
    /// Returns `None` when the path is unknown or already available - only
    /// routes the table knows are coming get coming-soon copy.
    pub fn coming_soon_info(&self, path: &str) -> Option<ComingSoonInfo> {
        let route = self.registry.get(path)?;
        if route.is_available {
            return None;
        }
        Some(ComingSoonInfo {
            title: route.label.clone(),
            description: route.description.clone(),
            expected_date: route.expected_date.clone(),
        })
    }
}
