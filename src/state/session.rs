//! Session store: who is authenticated and how far along the resolution of
//! their profile is.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::Cell;
use std::rc::Rc;

use crate::net::types::User;

/// Process-wide session state, created empty at app start and provided as
/// an `RwSignal` context. Only the auth provider and the user fetch write
/// to it; everything else reads derived views.
///
/// Transitions are synchronous state replacements with no I/O. None of
/// them leaves `loading` set alongside a terminal error, so a consumer
/// never sees "still loading" and "failed" at the same time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub current_user: Option<User>,
    pub loading: bool,
    pub error: Option<String>,
}

impl SessionState {
    /// Replace the current user outside the fetch cycle.
    pub fn set_user(&mut self, user: User) {
        self.current_user = Some(user);
        self.error = None;
    }

    /// Forget the current user. Idempotent; always lands in the clean
    /// logged-out state regardless of what came before.
    pub fn clear_user(&mut self) {
        self.current_user = None;
        self.error = None;
    }

    /// Record an error without touching the user or the loading flag.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// A user-record fetch is starting.
    pub fn request_fetch(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// The fetch resolved with a user record.
    pub fn fetch_succeeded(&mut self, user: User) {
        self.loading = false;
        self.current_user = Some(user);
        self.error = None;
    }

    /// The fetch failed. Resolves `loading` in the same transition, so the
    /// UI can never sit on an infinite interstitial with an error set.
    pub fn fetch_failed(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }
}

/// Generation tag guarding fetch results against supersession and teardown.
///
/// Two triggers can request a user fetch for different identities: the
/// bootstrap probe and the auth-event loop. Each fetch takes a tag from
/// [`begin`](Self::begin); its result is only dispatched while that tag is
/// still current and the owner has not been torn down. Clones share the
/// same counter.
#[derive(Clone, Debug, Default)]
pub struct FetchLifecycle {
    generation: Rc<Cell<u64>>,
    disposed: Rc<Cell<bool>>,
}

impl FetchLifecycle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new fetch, superseding any in flight. Returns its tag.
    pub fn begin(&self) -> u64 {
        let next = self.generation.get() + 1;
        self.generation.set(next);
        next
    }

    /// Supersede any fetch in flight without starting a new one. A
    /// sign-out takes this path so a late fetch result cannot
    /// re-authenticate the cleared session.
    pub fn invalidate(&self) {
        let _ = self.begin();
    }

    /// Whether a result tagged `tag` may still be dispatched.
    #[must_use]
    pub fn is_current(&self, tag: u64) -> bool {
        !self.disposed.get() && self.generation.get() == tag
    }

    /// Tear down: every outstanding tag goes stale for good.
    pub fn dispose(&self) {
        self.disposed.set(true);
    }
}
