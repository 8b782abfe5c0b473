//! Read-only projection of the session consumed by UI and routing.

#[cfg(test)]
#[path = "auth_view_test.rs"]
mod auth_view_test;

use crate::net::types::User;
use crate::state::session::SessionState;

/// Derived auth context: recomputed whenever the session or the
/// bootstrapper's phase changes, never written directly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthView {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Project the session plus the bootstrap phase into an [`AuthView`].
///
/// `is_loading` covers both the initial "have we decided whether to fetch"
/// window and an outstanding fetch. Consumers must not trust `user` while
/// it is set.
#[must_use]
pub fn derive_auth_view(session: &SessionState, initializing: bool) -> AuthView {
    AuthView {
        user: session.current_user.clone(),
        is_authenticated: session.current_user.is_some(),
        is_loading: initializing || session.loading,
        error: session.error.clone(),
    }
}
