//! Navigation guard.
//!
//! Evaluated once per navigation attempt, before the transition commits. The
//! guard holds no state of its own; it reads the target route's static
//! [`RouteMeta`] and whether the session is authenticated.
//!
//! ```text
//! requires_auth && !authenticated   -> RedirectLogin
//! authenticated && is_login_route   -> RedirectHome
//! otherwise                         -> Permit
//! ```
//!
//! Rules are checked in that order. An unauthenticated user can only reach
//! routes that don't require auth; an authenticated user is never left on the
//! login route.

use crate::{session::SessionState, storage::Storage};

/// Path of the login page.
pub const LOGIN_PATH: &str = "/login";
/// Path of the home page.
pub const HOME_PATH: &str = "/";

/// Static per-route attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RouteMeta {
    /// Route is only reachable with a session token.
    pub requires_auth: bool,
    /// Route is the login page.
    pub is_login_route: bool,
}

impl RouteMeta {
    /// Meta for a page that requires a session.
    pub const fn protected() -> Self {
        Self { requires_auth: true, is_login_route: false }
    }

    /// Meta for a page anyone can open.
    pub const fn public() -> Self {
        Self { requires_auth: false, is_login_route: false }
    }

    /// Meta for the login page.
    pub const fn login() -> Self {
        Self { requires_auth: false, is_login_route: true }
    }
}

/// Outcome of a guard evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Let the navigation through.
    Permit,
    /// Send the user to the login page instead.
    RedirectLogin,
    /// Send the user to the home page instead.
    RedirectHome,
}

impl RouteDecision {
    /// Path to redirect to, or `None` for [`RouteDecision::Permit`].
    pub fn redirect_path(self) -> Option<&'static str> {
        match self {
            Self::Permit => None,
            Self::RedirectLogin => Some(LOGIN_PATH),
            Self::RedirectHome => Some(HOME_PATH),
        }
    }
}

/// Pre-navigation hook.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteGuard;

impl RouteGuard {
    /// Decide a navigation from raw inputs. Total; never fails.
    pub fn evaluate(meta: RouteMeta, authenticated: bool) -> RouteDecision {
        if meta.requires_auth && !authenticated {
            RouteDecision::RedirectLogin
        } else if authenticated && meta.is_login_route {
            RouteDecision::RedirectHome
        } else {
            RouteDecision::Permit
        }
    }

    /// Decide a navigation to a route with `meta` for the given session.
    pub fn check<S: Storage>(&self, meta: RouteMeta, session: &SessionState<S>) -> RouteDecision {
        let decision = Self::evaluate(meta, session.is_authenticated());
        if decision != RouteDecision::Permit {
            tracing::debug!(?meta, ?decision, "navigation redirected");
        }
        decision
    }
}
