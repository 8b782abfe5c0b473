//! Identity-provider seam: session probe, auth events, sign-in/out.
//!
//! The hosted provider issues and refreshes tokens on its own; this module
//! only reads the persisted session, translates session changes into
//! [`AuthEvent`]s, and performs the sign-in/sign-out calls.
//!
//! Client-side (hydrate): real localStorage reads and HTTP calls.
//! Server-side (SSR): no session, stub calls — auth only exists in the
//! browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use serde::{Deserialize, Serialize};

/// localStorage key holding the provider's persisted session JSON.
pub const AUTH_STORAGE_KEY: &str = "urbansync_auth_session";

#[cfg(feature = "hydrate")]
const TOKEN_URL: &str = "/auth/v1/token?grant_type=password";
#[cfg(feature = "hydrate")]
const LOGOUT_URL: &str = "/auth/v1/logout";

/// The provider's view of a login session.
///
/// `user_id` may be absent: a session without a usable user id is treated
/// the same as no session by the bootstrapper.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionInfo {
    pub user_id: Option<String>,
    pub access_token: Option<String>,
}

impl SessionInfo {
    /// Parse the provider's persisted session JSON. Empty ids and tokens
    /// count as absent.
    ///
    /// # Errors
    ///
    /// Malformed JSON is reported as a probe failure.
    pub fn parse(raw: &str) -> Result<Self, String> {
        let stored: StoredSession =
            serde_json::from_str(raw).map_err(|e| format!("stored session is corrupt: {e}"))?;
        Ok(Self {
            user_id: stored
                .user
                .and_then(|u| u.id)
                .filter(|id| !id.is_empty()),
            access_token: stored.access_token.filter(|t| !t.is_empty()),
        })
    }
}

/// Events emitted by the identity provider. `Other` stands for provider
/// events the session core ignores (token refresh, password recovery, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthEvent {
    SignedIn,
    SignedOut,
    Other,
}

/// Shape of the session JSON the provider persists.
#[derive(Serialize, Deserialize)]
struct StoredSession {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    user: Option<StoredUser>,
}

#[derive(Serialize, Deserialize)]
struct StoredUser {
    #[serde(default)]
    id: Option<String>,
}

/// Clonable emitter pushing auth events into the provider's event loop.
///
/// Provided as context so the login page and sign-out button can report
/// same-tab transitions; the storage listener covers other tabs. Events are
/// delivered in emission order.
#[derive(Clone)]
pub struct IdentityEvents {
    #[cfg(feature = "hydrate")]
    tx: futures::channel::mpsc::UnboundedSender<(AuthEvent, Option<SessionInfo>)>,
}

impl IdentityEvents {
    /// Create the emitter and the receiving end for the provider loop.
    #[cfg(feature = "hydrate")]
    pub fn channel() -> (
        Self,
        futures::channel::mpsc::UnboundedReceiver<(AuthEvent, Option<SessionInfo>)>,
    ) {
        let (tx, rx) = futures::channel::mpsc::unbounded();
        (Self { tx }, rx)
    }

    /// Emitter with nowhere to deliver to, for server rendering.
    #[cfg(not(feature = "hydrate"))]
    #[must_use]
    pub fn disconnected() -> Self {
        Self {}
    }

    /// Emit an auth event. Dropped once the provider loop is gone.
    pub fn emit(&self, event: AuthEvent, session: Option<SessionInfo>) {
        #[cfg(feature = "hydrate")]
        {
            if self.tx.unbounded_send((event, session)).is_err() {
                leptos::logging::warn!("auth event dropped: provider loop closed");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (event, session);
        }
    }
}

/// Handle for the auth-event subscription.
///
/// The cleanup closure runs exactly once: explicitly via
/// [`unsubscribe`](Self::unsubscribe), or on drop if the owner never got
/// there. Never twice.
pub struct AuthSubscription {
    cleanup: Option<Box<dyn FnOnce()>>,
}

impl AuthSubscription {
    pub fn new(cleanup: impl FnOnce() + 'static) -> Self {
        Self {
            cleanup: Some(Box::new(cleanup)),
        }
    }

    /// Release the subscription.
    pub fn unsubscribe(mut self) {
        if let Some(cleanup) = self.cleanup.take() {
            cleanup();
        }
    }
}

impl Drop for AuthSubscription {
    fn drop(&mut self) {
        if let Some(cleanup) = self.cleanup.take() {
            cleanup();
        }
    }
}

/// Probe the identity provider for the current session.
///
/// `Ok(None)` means no session is persisted.
///
/// # Errors
///
/// A malformed persisted session is reported as a probe failure; the
/// bootstrapper converts it to a clean logged-out state.
pub async fn current_session() -> Result<Option<SessionInfo>, String> {
    #[cfg(feature = "hydrate")]
    {
        match read_storage(AUTH_STORAGE_KEY) {
            Some(raw) => SessionInfo::parse(&raw).map(Some),
            None => Ok(None),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Ok(None)
    }
}

/// Access token from the persisted session, if any.
///
/// Read on every request so a token refreshed by the provider is picked up
/// without a reload.
#[must_use]
pub fn stored_access_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let raw = read_storage(AUTH_STORAGE_KEY)?;
        SessionInfo::parse(&raw).ok()?.access_token
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Subscribe to session changes from other tabs via `storage` events.
///
/// A tab that signs in writes the session key and a tab that signs out
/// removes it; the browser notifies every other tab, and this listener
/// forwards the change as a `SignedIn` or `SignedOut` event.
pub fn subscribe(events: &IdentityEvents) -> AuthSubscription {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(window) = web_sys::window() else {
            return AuthSubscription::new(|| {});
        };

        let emitter = events.clone();
        let closure =
            Closure::<dyn FnMut(web_sys::StorageEvent)>::new(move |ev: web_sys::StorageEvent| {
                if ev.key().as_deref() != Some(AUTH_STORAGE_KEY) {
                    return;
                }
                match ev.new_value() {
                    Some(raw) => match SessionInfo::parse(&raw) {
                        Ok(info) => emitter.emit(AuthEvent::SignedIn, Some(info)),
                        Err(e) => {
                            leptos::logging::warn!("ignoring unreadable session change: {e}");
                        }
                    },
                    None => emitter.emit(AuthEvent::SignedOut, None),
                }
            });

        if window
            .add_event_listener_with_callback("storage", closure.as_ref().unchecked_ref())
            .is_err()
        {
            leptos::logging::warn!("storage listener registration failed");
            return AuthSubscription::new(move || drop(closure));
        }

        AuthSubscription::new(move || {
            let _ = window
                .remove_event_listener_with_callback("storage", closure.as_ref().unchecked_ref());
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = events;
        AuthSubscription::new(|| {})
    }
}

/// Sign in with email and password, persisting the returned session.
///
/// # Errors
///
/// Returns a human-readable reason when the provider rejects the
/// credentials or is unreachable.
pub async fn sign_in(email: &str, password: &str) -> Result<SessionInfo, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post(TOKEN_URL)
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("sign-in failed: {}", resp.status()));
        }

        let raw = resp.text().await.map_err(|e| e.to_string())?;
        let info = SessionInfo::parse(&raw)?;
        write_storage(AUTH_STORAGE_KEY, Some(&raw));
        Ok(info)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Sign out: revoke the session at the provider, then drop it locally.
///
/// # Errors
///
/// If the revoke call fails the persisted session is left in place and the
/// caller decides what to surface; local state is not half-cleared.
pub async fn sign_out() -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let mut request = gloo_net::http::Request::post(LOGOUT_URL);
        if let Some(token) = stored_access_token() {
            request = request.header("Authorization", &format!("Bearer {token}"));
        }
        let resp = request.send().await.map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("sign-out failed: {}", resp.status()));
        }

        write_storage(AUTH_STORAGE_KEY, None);
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Ok(())
    }
}

#[cfg(feature = "hydrate")]
fn read_storage(key: &str) -> Option<String> {
    let window = web_sys::window()?;
    window
        .local_storage()
        .ok()
        .flatten()?
        .get_item(key)
        .ok()
        .flatten()
}

#[cfg(feature = "hydrate")]
fn write_storage(key: &str, value: Option<&str>) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let result = match value {
            Some(v) => storage.set_item(key, v),
            None => storage.remove_item(key),
        };
        if result.is_err() {
            leptos::logging::warn!("auth session storage write failed");
        }
    }
}
