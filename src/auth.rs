use std::sync::Arc;

use crate::{
    routes::{LOGIN_PATH, RouteEntry},
    session::SessionStore,
};

/// SessionState
///
/// Shared handle to the session provider the guard consults.
pub type SessionState = Arc<dyn SessionStore>;

/// GuardDecision
///
/// The two outcomes of a pre-navigation check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    Redirect(&'static str),
}

/// NavigationGuard
///
/// Runs synchronously before every navigation. The rule is:
///
/// 1. Target route does not set `requires_auth`: proceed.
/// 2. Session provider returns a marker (any non-null value): proceed.
/// 3. Otherwise: redirect to `/admin/login`.
///
/// The marker's content is never inspected or revalidated against the backend.
#[derive(Clone)]
pub struct NavigationGuard {
    session: SessionState,
}

impl NavigationGuard {
    pub fn new(session: SessionState) -> Self {
        Self { session }
    }

    pub fn check(&self, route: &RouteEntry) -> GuardDecision {
        if !route.requires_auth {
            return GuardDecision::Proceed;
        }

        if self.session.get().is_some() {
            return GuardDecision::Proceed;
        }

        tracing::debug!(route = route.name, "no session marker, redirecting to login");
        GuardDecision::Redirect(LOGIN_PATH)
    }
}
