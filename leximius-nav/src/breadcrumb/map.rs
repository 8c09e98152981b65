//! Breadcrumb route map
//!
//! A separate, richer table than the route registry: each entry names its
//! logical parent, forming a tree that does not have to match the URL
//! hierarchy (e.g. "/profile" can be a top-level entry even though the
//! dashboard links to it). Parent chains must terminate; a cycle is a
//! configuration defect and is rejected at load time.

use std::collections::HashMap;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{NavError, Result};

/// One entry in the breadcrumb route map
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreadcrumbEntry {
    /// Display label for this path
    pub label: String,

    /// Path of the logical parent entry, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,

    /// Symbolic icon name, opaque to the engine
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl BreadcrumbEntry {
    /// Create a root entry (no parent)
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            parent: None,
            icon: None,
        }
    }

    /// Set the logical parent path
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Set the icon name
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// Exact-path table of breadcrumb entries
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BreadcrumbMap {
    entries: HashMap<String, BreadcrumbEntry>,
}

impl BreadcrumbMap {
    /// Build a map from (path, entry) pairs, rejecting parent cycles
    pub fn from_entries(
        entries: impl IntoIterator<Item = (String, BreadcrumbEntry)>,
    ) -> Result<Self> {
        let map = Self {
            entries: entries.into_iter().collect(),
        };
        map.check_cycles()?;
        Ok(map)
    }

    /// Build a map from a JSON object keyed by path
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: HashMap<String, BreadcrumbEntry> =
            serde_json::from_str(json).map_err(|e| NavError::InvalidBreadcrumbMap {
                reason: e.to_string(),
            })?;
        Self::from_entries(entries)
    }

    /// Build a map from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| NavError::ConfigLoadError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let entries: HashMap<String, BreadcrumbEntry> =
            serde_json::from_str(&content).map_err(|e| NavError::InvalidBreadcrumbMap {
                reason: format!("{}: {}", path.display(), e),
            })?;
        Self::from_entries(entries)
    }

    /// Build a map without the cycle check
    ///
    /// The engine still truncates a cyclic chain at resolution time, so this
    /// trades load-time strictness for tolerance of a half-edited table.
    pub fn from_entries_unchecked(
        entries: impl IntoIterator<Item = (String, BreadcrumbEntry)>,
    ) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Look up an entry by exact path
    pub fn get(&self, path: &str) -> Option<&BreadcrumbEntry> {
        self.entries.get(path)
    }

    /// Check if a path is mapped
    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    /// Number of mapped paths
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the map is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Report soft configuration problems
    ///
    /// A parent reference to a path the map does not know is tolerated (the
    /// chain just stops there) but usually indicates a typo.
    pub fn validate_strict(&self) -> std::result::Result<(), Vec<String>> {
        let mut warnings = vec![];

        for (path, entry) in &self.entries {
            if let Some(parent) = &entry.parent {
                if !self.entries.contains_key(parent) {
                    warnings.push(format!(
                        "entry '{}' references unmapped parent '{}'",
                        path, parent
                    ));
                }
            }
            if entry.label.is_empty() {
                warnings.push(format!("entry '{}' has an empty label", path));
            }
        }

        if warnings.is_empty() {
            Ok(())
        } else {
            Err(warnings)
        }
    }

    /// Walk every parent chain, failing on the first cycle found
    fn check_cycles(&self) -> Result<()> {
        for start in self.entries.keys() {
            let mut visited = HashSet::new();
            let mut current = start.as_str();
            visited.insert(current);

            while let Some(parent) = self.entries.get(current).and_then(|e| e.parent.as_deref()) {
                if !visited.insert(parent) {
                    return Err(NavError::BreadcrumbCycle {
                        path: start.clone(),
                    });
                }
                match self.entries.get(parent) {
                    Some(_) => current = parent,
                    // Dangling parent: chain terminates here
                    None => break,
                }
            }
        }
        Ok(())
    }

    /// The breadcrumb map for the production site
    ///
    /// Mirrors the shipped route table in `config/routes.json`, plus the
    /// intermediate section entries ("/auth", "/legal", "/admin") that exist
    /// only as breadcrumb parents.
    pub fn builtin() -> Self {
        let entry = |label: &str| BreadcrumbEntry::new(label);

        let entries = [
            // Core pages
            ("/", entry("Home").with_icon("Home")),
            ("/about", entry("About Us").with_icon("Info")),
            ("/services", entry("Services").with_icon("Settings")),
            ("/pricing", entry("Pricing").with_icon("DollarSign")),
            ("/contact", entry("Contact").with_icon("Mail")),
            ("/blog", entry("Blog").with_icon("FileText")),
            ("/docs", entry("Documentation").with_icon("Book")),
            // Library section
            ("/library", entry("Component Library").with_icon("Package")),
            (
                "/library/overview",
                entry("Overview").with_parent("/library").with_icon("Eye"),
            ),
            (
                "/library/getting-started",
                entry("Getting Started").with_parent("/library").with_icon("Play"),
            ),
            (
                "/library/components",
                entry("Browse Components").with_parent("/library").with_icon("Grid"),
            ),
            (
                "/library/playground",
                entry("Playground").with_parent("/library").with_icon("Code"),
            ),
            // Individual component pages
            (
                "/library/components/button",
                entry("Button").with_parent("/library/components").with_icon("MousePointer"),
            ),
            (
                "/library/components/input",
                entry("Input").with_parent("/library/components").with_icon("Type"),
            ),
            (
                "/library/components/card",
                entry("Card").with_parent("/library/components").with_icon("Square"),
            ),
            (
                "/library/components/alert",
                entry("Alert").with_parent("/library/components").with_icon("AlertCircle"),
            ),
            (
                "/library/components/badge",
                entry("Badge").with_parent("/library/components").with_icon("Tag"),
            ),
            (
                "/library/components/avatar",
                entry("Avatar").with_parent("/library/components").with_icon("User"),
            ),
            // Authentication
            ("/auth", entry("Authentication").with_icon("Shield")),
            (
                "/auth/login",
                entry("Sign In").with_parent("/auth").with_icon("LogIn"),
            ),
            (
                "/auth/register",
                entry("Sign Up").with_parent("/auth").with_icon("UserPlus"),
            ),
            // Dashboard and protected pages
            ("/dashboard", entry("Dashboard").with_icon("BarChart3")),
            ("/profile", entry("Profile").with_icon("User")),
            ("/projects", entry("Projects").with_icon("FolderOpen")),
            ("/analytics", entry("Analytics").with_icon("TrendingUp")),
            // Legal
            ("/legal", entry("Legal").with_icon("Scale")),
            (
                "/legal/privacy",
                entry("Privacy Policy").with_parent("/legal").with_icon("Shield"),
            ),
            (
                "/legal/terms",
                entry("Terms of Service").with_parent("/legal").with_icon("FileText"),
            ),
            // Admin
            ("/admin", entry("Admin Panel").with_icon("Settings")),
            (
                "/admin/users",
                entry("User Management").with_parent("/admin").with_icon("Users"),
            ),
            (
                "/admin/settings",
                entry("System Settings").with_parent("/admin").with_icon("Cog"),
            ),
            // Special pages
            ("/coming-soon", entry("Coming Soon").with_icon("Clock")),
            ("/404", entry("Page Not Found").with_icon("AlertTriangle")),
            ("/500", entry("Server Error").with_icon("AlertTriangle")),
        ];

        // The builtin table is acyclic by construction
        Self::from_entries_unchecked(entries.map(|(path, e)| (path.to_string(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_map_is_valid() {
        let map = BreadcrumbMap::builtin();
        assert!(map.check_cycles().is_ok());
        assert!(map.validate_strict().is_ok());
        assert!(map.contains("/library/components/button"));
    }

    #[test]
    fn test_cycle_rejected_at_construction() {
        let entries = [
            (
                "/a".to_string(),
                BreadcrumbEntry::new("A").with_parent("/b"),
            ),
            (
                "/b".to_string(),
                BreadcrumbEntry::new("B").with_parent("/a"),
            ),
        ];
        let err = BreadcrumbMap::from_entries(entries).unwrap_err();
        assert_eq!(err.error_code(), "BREADCRUMB_CYCLE");
    }

    #[test]
    fn test_self_parent_rejected() {
        let entries = [(
            "/loop".to_string(),
            BreadcrumbEntry::new("Loop").with_parent("/loop"),
        )];
        let err = BreadcrumbMap::from_entries(entries).unwrap_err();
        assert_eq!(err.error_code(), "BREADCRUMB_CYCLE");
    }

    #[test]
    fn test_dangling_parent_is_warning_not_error() {
        let entries = [(
            "/child".to_string(),
            BreadcrumbEntry::new("Child").with_parent("/missing"),
        )];
        let map = BreadcrumbMap::from_entries(entries).unwrap();
        let warnings = map.validate_strict().unwrap_err();
        assert!(warnings[0].contains("/missing"));
    }

    #[test]
    fn test_from_json() {
        let map = BreadcrumbMap::from_json(
            r#"{
                "/library": { "label": "Component Library", "icon": "Package" },
                "/library/playground": { "label": "Playground", "parent": "/library" }
            }"#,
        )
        .unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(
            map.get("/library/playground").unwrap().parent.as_deref(),
            Some("/library")
        );
    }
}
