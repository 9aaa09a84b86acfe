//! Guarded navigation between pages.
//!
//! Every transition, including the ones the app makes itself after login and
//! logout, runs the [`RouteGuard`] first. A redirect is followed and the
//! redirect target is guarded again; with the guard's rules that settles in
//! at most one extra hop.

use scrutiny_core::{RouteGuard, SessionState, Storage};

use crate::routes::Route;

const MAX_REDIRECTS: usize = 2;

/// Result of a navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    /// Page that was asked for.
    pub requested: Route,
    /// Page the user ended up on.
    pub landed: Route,
}

impl Navigation {
    /// True if the guard sent the user somewhere else.
    pub fn redirected(&self) -> bool {
        self.requested != self.landed
    }
}

/// Tracks the current page.
#[derive(Debug, Clone)]
pub struct Navigator {
    current: Route,
    guard: RouteGuard,
}

impl Navigator {
    /// Start on `initial` without guarding it; call [`Self::navigate`] to
    /// enter the first page properly.
    pub fn new(initial: Route) -> Self {
        Self { current: initial, guard: RouteGuard }
    }

    /// Page currently shown.
    pub fn current(&self) -> Route {
        self.current
    }

    /// Go to `target`, following guard redirects.
    pub fn navigate<S: Storage>(&mut self, target: Route, session: &SessionState<S>) -> Navigation {
        let mut landed = target;
        for _ in 0..MAX_REDIRECTS {
            let decision = self.guard.check(landed.meta(), session);
            match decision.redirect_path().and_then(Route::from_path) {
                Some(next) => landed = next,
                None => break,
            }
        }

        tracing::debug!(from = %self.current, requested = %target, landed = %landed, "navigated");
        self.current = landed;
        Navigation { requested: target, landed }
    }
}
