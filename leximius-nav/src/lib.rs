//! # Leximius Nav - navigation core
//!
//! The navigation layer for the Leximius site:
//!
//! - **Route Registry**: the ordered table of link targets, loaded once at
//!   process start and immutable afterwards
//! - **Route Resolver**: availability, category, and coming-soon queries
//!   over the registry
//! - **Breadcrumb Engine**: derives a page's navigation trail from a
//!   hierarchical breadcrumb map, with segment-label fallback for paths the
//!   map does not know
//!
//! ## Core principle
//!
//! A navigation link never crashes the page. Unknown or disabled paths are
//! soft misses: lookups answer with `None` or an empty sequence, trails
//! degrade to synthesized labels, and unavailable link targets are rewritten
//! to the coming-soon placeholder. The only errors in this crate come from
//! loading configuration.
//!
//! ## Example
//!
//! ```rust
//! use leximius_nav::{
//!     BreadcrumbDisplay, BreadcrumbEngine, BreadcrumbMap, LinkTarget,
//!     RouteRegistry, RouteResolver,
//! };
//!
//! // Load the route table (would normally come from config/routes.json)
//! let registry = RouteRegistry::from_json(r#"[
//!     { "path": "/", "label": "Home", "is_available": true, "category": "main" },
//!     { "path": "/library", "label": "Components", "is_available": true, "category": "library" },
//!     { "path": "/careers", "label": "Careers", "is_available": false, "category": "other",
//!       "expected_date": "Q1 2026", "description": "Join our growing team" }
//! ]"#).unwrap();
//! let resolver = RouteResolver::new(registry);
//!
//! // Links to disabled routes are rewritten before rendering
//! let target = LinkTarget::resolve("/careers", &resolver);
//! assert_eq!(target.href(), "/coming-soon?page=%2Fcareers");
//!
//! // Trails are computed per navigation event
//! let engine = BreadcrumbEngine::new(BreadcrumbMap::builtin());
//! let trail = engine.trail("/library/components/button");
//! assert_eq!(trail.last().unwrap().label, "Button");
//!
//! // Presentation hints derive from path shape alone
//! let display = BreadcrumbDisplay::for_path("/library/components/button");
//! assert!(display.animated);
//! ```

pub mod breadcrumb;
pub mod error;
pub mod guard;
pub mod link;
pub mod routes;

// Re-export main types
pub use breadcrumb::{
    BreadcrumbDisplay, BreadcrumbEngine, BreadcrumbEntry, BreadcrumbItem, BreadcrumbMap,
    SectionVariant, TrailStyle,
};
pub use error::{NavError, Result};
pub use guard::{AnonymousProbe, AuthProbe, GuardDecision, RouteGuard};
pub use link::{requested_page, LinkTarget, COMING_SOON_PATH};
pub use routes::{ComingSoonInfo, RouteCategory, RouteDescriptor, RouteRegistry, RouteResolver};

/// Route table format version
pub const ROUTES_VERSION: &str = "1.0";
