//! Breadcrumb Engine
//!
//! Derives the navigation trail for a path. Mapped paths get their logical
//! parent chain from the [`BreadcrumbMap`]; unmapped paths degrade to
//! segment-by-segment label synthesis. No path ever fails to produce a
//! trail.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::map::BreadcrumbMap;

/// One entry in a computed breadcrumb trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbItem {
    /// Display label
    pub label: String,

    /// Link target; absent on the current (last) item
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    /// True for exactly the last item of a trail
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub current: bool,

    /// Symbolic icon name, when the map carries one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl BreadcrumbItem {
    fn link(label: impl Into<String>, href: impl Into<String>, icon: Option<String>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
            current: false,
            icon,
        }
    }

    fn current(label: impl Into<String>, icon: Option<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
            current: true,
            icon,
        }
    }
}

/// Computes breadcrumb trails over an injected breadcrumb map
#[derive(Debug, Clone, Default)]
pub struct BreadcrumbEngine {
    map: BreadcrumbMap,
}

impl BreadcrumbEngine {
    /// Create an engine over the given map
    pub fn new(map: BreadcrumbMap) -> Self {
        Self { map }
    }

    /// The underlying map
    pub fn map(&self) -> &BreadcrumbMap {
        &self.map
    }

    /// Compute the breadcrumb trail for a path
    ///
    /// The root path yields a single current "Home" item. Every other path
    /// yields a clickable "Home" prefix, then either the mapped parent chain
    /// (top-down) or the segment fallback, ending in exactly one current
    /// item with no href.
    pub fn trail(&self, path: &str) -> Vec<BreadcrumbItem> {
        // Root is a hard special case: just Home, no Home prefix before it
        if Self::is_root(path) {
            return vec![BreadcrumbItem::current("Home", Some("Home".to_string()))];
        }

        let mut trail = vec![BreadcrumbItem::link("Home", "/", Some("Home".to_string()))];

        if let Some(entry) = self.map.get(path) {
            trail.extend(self.parent_chain(path));
            trail.push(BreadcrumbItem::current(
                entry.label.clone(),
                entry.icon.clone(),
            ));
            return trail;
        }

        self.push_segment_fallback(path, &mut trail);
        trail
    }

    fn is_root(path: &str) -> bool {
        path == "/" || path.is_empty()
    }

    /// Resolve the mapped ancestors of `path`, emitted top-down
    ///
    /// Walks parent links upward with a visited set; a cycle that slipped
    /// past map validation truncates the chain instead of recursing
    /// unboundedly. A parent reference to an unmapped path ends the chain.
    fn parent_chain(&self, path: &str) -> Vec<BreadcrumbItem> {
        let mut ancestors = vec![];
        let mut visited: HashSet<&str> = HashSet::new();
        visited.insert(path);

        let mut current = path;
        while let Some(parent) = self.map.get(current).and_then(|e| e.parent.as_deref()) {
            if !visited.insert(parent) {
                break;
            }
            match self.map.get(parent) {
                Some(entry) => {
                    ancestors.push(BreadcrumbItem::link(
                        entry.label.clone(),
                        parent,
                        entry.icon.clone(),
                    ));
                    current = parent;
                }
                None => break,
            }
        }

        ancestors.reverse();
        ancestors
    }

    /// Build trail items from the path's slash-separated segments
    ///
    /// Each prefix is checked against the map; unmapped segments get a
    /// synthesized label. Every prefix but the last is clickable.
    fn push_segment_fallback(&self, path: &str, trail: &mut Vec<BreadcrumbItem>) {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let mut prefix = String::new();

        for (i, segment) in segments.iter().enumerate() {
            prefix.push('/');
            prefix.push_str(segment);
            let is_last = i == segments.len() - 1;

            let (label, icon) = match self.map.get(&prefix) {
                Some(entry) => (entry.label.clone(), entry.icon.clone()),
                None => (format_segment_label(segment), None),
            };

            trail.push(if is_last {
                BreadcrumbItem::current(label, icon)
            } else {
                BreadcrumbItem::link(label, prefix.clone(), icon)
            });
        }
    }
}

/// Synthesize a display label from a raw path segment
///
/// Splits on hyphens and capitalizes the first letter of each word:
/// "getting-started" becomes "Getting Started".
pub fn format_segment_label(segment: &str) -> String {
    segment
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breadcrumb::map::BreadcrumbEntry;

    fn engine() -> BreadcrumbEngine {
        BreadcrumbEngine::new(BreadcrumbMap::builtin())
    }

    fn labels(trail: &[BreadcrumbItem]) -> Vec<&str> {
        trail.iter().map(|i| i.label.as_str()).collect()
    }

    #[test]
    fn test_root_is_single_current_home() {
        let trail = engine().trail("/");
        assert_eq!(trail.len(), 1);
        assert_eq!(trail[0].label, "Home");
        assert!(trail[0].current);
        assert!(trail[0].href.is_none());
    }

    #[test]
    fn test_mapped_parent_chain() {
        let trail = engine().trail("/library/components/button");
        assert_eq!(
            labels(&trail),
            vec!["Home", "Component Library", "Browse Components", "Button"]
        );
        // All but the last are clickable
        assert_eq!(trail[1].href.as_deref(), Some("/library"));
        assert_eq!(trail[2].href.as_deref(), Some("/library/components"));
        assert!(trail[3].current);
        assert!(trail[3].href.is_none());
    }

    #[test]
    fn test_logical_parent_beats_url_hierarchy() {
        // "/profile" is top-level in the map even though the dashboard owns it
        let trail = engine().trail("/profile");
        assert_eq!(labels(&trail), vec!["Home", "Profile"]);
    }

    #[test]
    fn test_segment_fallback_synthesizes_labels() {
        let trail = engine().trail("/foo/bar-baz");
        assert_eq!(labels(&trail), vec!["Home", "Foo", "Bar Baz"]);
        assert_eq!(trail[1].href.as_deref(), Some("/foo"));
        assert!(trail[2].current);
        assert!(trail[2].href.is_none());
    }

    #[test]
    fn test_segment_fallback_uses_mapped_prefixes() {
        // "/library/components/tooltip" is unmapped, but its prefixes are
        let trail = engine().trail("/library/components/tooltip");
        assert_eq!(
            labels(&trail),
            vec!["Home", "Component Library", "Browse Components", "Tooltip"]
        );
    }

    #[test]
    fn test_exactly_one_current_last_for_non_root() {
        for path in ["/about", "/library/playground", "/foo/bar", "/admin/users"] {
            let trail = engine().trail(path);
            assert!(!trail.is_empty(), "empty trail for {}", path);
            let (last, rest) = trail.split_last().unwrap();
            assert!(last.current, "last item not current for {}", path);
            assert!(last.href.is_none(), "current item has href for {}", path);
            for item in rest {
                assert!(!item.current, "non-last item current for {}", path);
                assert!(item.href.is_some(), "non-last item missing href for {}", path);
            }
        }
    }

    #[test]
    fn test_cyclic_map_truncates_instead_of_recursing() {
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
        let engine = BreadcrumbEngine::new(BreadcrumbMap::from_entries_unchecked(entries));

        let trail = engine.trail("/a");
        // Home, B (the one resolvable ancestor), A
        assert_eq!(labels(&trail), vec!["Home", "B", "A"]);
        assert!(trail[2].current);
    }

    #[test]
    fn test_dangling_parent_ends_chain() {
        let entries = [(
            "/child".to_string(),
            BreadcrumbEntry::new("Child").with_parent("/missing"),
        )];
        let engine = BreadcrumbEngine::new(BreadcrumbMap::from_entries_unchecked(entries));
        assert_eq!(labels(&engine.trail("/child")), vec!["Home", "Child"]);
    }

    #[test]
    fn test_format_segment_label() {
        assert_eq!(format_segment_label("getting-started"), "Getting Started");
        assert_eq!(format_segment_label("bar-baz"), "Bar Baz");
        assert_eq!(format_segment_label("single"), "Single");
        assert_eq!(format_segment_label(""), "");
    }
}
