//! Smart link target resolution
//!
//! Classifies a link destination at construction time, so a link to a
//! disabled route is rewritten to the coming-soon placeholder (carrying the
//! intended path as a query parameter) before anyone can click it.

use crate::routes::RouteResolver;

/// The coming-soon placeholder route
pub const COMING_SOON_PATH: &str = "/coming-soon";

/// Where a link destination actually goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// External URL, opened outside the app
    External(String),

    /// Internal path that is known and available
    Internal(String),

    /// Unavailable or unknown internal path, rewritten to the placeholder.
    /// `href` carries the original path urlencoded in the `page` parameter
    /// so the placeholder can look up route-specific coming-soon copy.
    ComingSoon { href: String },
}

impl LinkTarget {
    /// Resolve a destination against the route resolver
    pub fn resolve(to: &str, resolver: &RouteResolver) -> Self {
        Self::resolve_with(to, resolver, false)
    }

    /// Resolve a destination, optionally forcing external treatment
    pub fn resolve_with(to: &str, resolver: &RouteResolver, force_external: bool) -> Self {
        if force_external || is_external(to) {
            return LinkTarget::External(to.to_string());
        }

        if !resolver.is_route_available(to) {
            return LinkTarget::ComingSoon {
                href: format!("{}?page={}", COMING_SOON_PATH, urlencoding::encode(to)),
            };
        }

        LinkTarget::Internal(to.to_string())
    }

    /// The href this target renders as
    pub fn href(&self) -> &str {
        match self {
            LinkTarget::External(url) => url,
            LinkTarget::Internal(path) => path,
            LinkTarget::ComingSoon { href } => href,
        }
    }
}

fn is_external(to: &str) -> bool {
    to.starts_with("http") || to.starts_with("mailto:")
}

/// Extract the originally requested path from a coming-soon href's query
///
/// The placeholder page uses this to recover the path for
/// [`coming_soon_info`](crate::routes::RouteResolver::coming_soon_info).
pub fn requested_page(coming_soon_href: &str) -> Option<String> {
    let query = coming_soon_href.split_once('?')?.1;
    for pair in query.split('&') {
        if let Some(value) = pair.strip_prefix("page=") {
            return urlencoding::decode(value).ok().map(|s| s.into_owned());
        }
    }
    None
}
