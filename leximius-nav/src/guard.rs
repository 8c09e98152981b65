//! Route guard for protected pages
//!
//! Authentication itself is out of scope; this carries only the gating
//! contract. The default probe always reports unauthenticated, so guarded
//! paths redirect to the sign-in page. Tests inject their own probe.

/// The sign-in page guarded paths redirect to
pub const LOGIN_PATH: &str = "/auth/login";

/// Answers whether the current visitor is authenticated
pub trait AuthProbe {
    fn is_authenticated(&self) -> bool;
}

/// Default probe: nobody is ever signed in
#[derive(Debug, Clone, Copy, Default)]
pub struct AnonymousProbe;

impl AuthProbe for AnonymousProbe {
    fn is_authenticated(&self) -> bool {
        false
    }
}

/// Outcome of a guard check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the requested page
    Allow,
    /// Send the visitor to the sign-in page instead
    RedirectToLogin { href: String },
}

/// Gate for protected routes
pub struct RouteGuard<P: AuthProbe = AnonymousProbe> {
    probe: P,
}

impl Default for RouteGuard<AnonymousProbe> {
    fn default() -> Self {
        Self {
            probe: AnonymousProbe,
        }
    }
}

impl RouteGuard<AnonymousProbe> {
    /// Create a guard with the default (always-anonymous) probe
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: AuthProbe> RouteGuard<P> {
    /// Create a guard with a custom probe
    pub fn with_probe(probe: P) -> Self {
        Self { probe }
    }

    /// Decide whether to render the guarded page
    pub fn check(&self) -> GuardDecision {
        if self.probe.is_authenticated() {
            GuardDecision::Allow
        } else {
            GuardDecision::RedirectToLogin {
                href: LOGIN_PATH.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct SignedIn;
    impl AuthProbe for SignedIn {
        fn is_authenticated(&self) -> bool {
            true
        }
    }

    #[test]
    fn test_default_guard_redirects() {
        let decision = RouteGuard::new().check();
        assert_eq!(
            decision,
            GuardDecision::RedirectToLogin {
                href: "/auth/login".to_string()
            }
        );
    }

    #[test]
    fn test_authenticated_probe_allows() {
        let decision = RouteGuard::with_probe(SignedIn).check();
        assert_eq!(decision, GuardDecision::Allow);
    }
}
