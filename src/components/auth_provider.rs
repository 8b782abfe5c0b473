//! Auth provider: bootstraps the session and reacts to auth events.
//!
//! On mount it probes the identity provider once, decides whether to fetch
//! the application user record, and flips to ready as soon as that decision
//! is made — the fetch itself resolves later, with `session.loading`
//! keeping the interstitial up. Independently it consumes the auth-event
//! stream for sign-in/sign-out notifications. All browser I/O is gated
//! behind `#[cfg(feature = "hydrate")]`.

#[cfg(test)]
#[path = "auth_provider_test.rs"]
mod auth_provider_test;

use leptos::prelude::*;

use crate::components::loading_screen::LoadingScreen;
use crate::net::identity::{AuthEvent, IdentityEvents, SessionInfo};
use crate::state::auth_view::derive_auth_view;
use crate::state::session::SessionState;

#[cfg(feature = "hydrate")]
use crate::state::session::FetchLifecycle;

/// What the bootstrapper decided to do about the current session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BootstrapDecision {
    /// A session with a usable user id exists: fetch that user's record.
    FetchUser(String),
    /// No session, no usable id, or the probe failed: clean logged-out
    /// state.
    ClearSession,
}

/// Decide what the initial session probe means.
///
/// Probe failures land on `ClearSession`: a failed check produces a clean
/// logged-out state, never a half-authenticated one.
#[must_use]
pub fn decide_initial(probe: Result<Option<SessionInfo>, String>) -> BootstrapDecision {
    match probe {
        Ok(Some(session)) => match session.user_id {
            Some(id) => BootstrapDecision::FetchUser(id),
            None => BootstrapDecision::ClearSession,
        },
        Ok(None) => BootstrapDecision::ClearSession,
        Err(reason) => {
            leptos::logging::error!("auth initialization error: {reason}");
            BootstrapDecision::ClearSession
        }
    }
}

/// Decide what an auth event means. `None` is "ignore, no dispatch".
#[must_use]
pub fn decide_event(
    event: AuthEvent,
    session: Option<&SessionInfo>,
) -> Option<BootstrapDecision> {
    match event {
        AuthEvent::SignedIn => session
            .and_then(|s| s.user_id.clone())
            .map(BootstrapDecision::FetchUser),
        AuthEvent::SignedOut => Some(BootstrapDecision::ClearSession),
        AuthEvent::Other => None,
    }
}

/// Wraps the app in the session lifecycle and publishes the derived
/// [`AuthView`](crate::state::auth_view::AuthView) as a `Memo` context.
///
/// Renders the loading interstitial until the bootstrap decision is made
/// and any outstanding user fetch has resolved; protected content never
/// renders underneath it.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let initializing = RwSignal::new(true);

    let auth_view = Memo::new(move |_| derive_auth_view(&session.get(), initializing.get()));
    provide_context(auth_view);

    #[cfg(feature = "hydrate")]
    {
        let lifecycle = FetchLifecycle::new();
        let (events, rx) = IdentityEvents::channel();
        provide_context(events.clone());

        leptos::task::spawn_local(initialize_auth(session, initializing, lifecycle.clone()));
        leptos::task::spawn_local(event_loop(rx, session, lifecycle.clone()));

        let subscription = crate::net::identity::subscribe(&events);
        on_cleanup(move || {
            lifecycle.dispose();
            subscription.unsubscribe();
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        provide_context(IdentityEvents::disconnected());
    }

    view! {
        <Show
            when=move || !auth_view.get().is_loading
            fallback=|| view! { <LoadingScreen loading_text="Loading..."/> }
        >
            {children()}
        </Show>
    }
}

/// Initial probe: decide, dispatch, mark ready, then let the fetch resolve.
#[cfg(feature = "hydrate")]
async fn initialize_auth(
    session: RwSignal<SessionState>,
    initializing: RwSignal<bool>,
    lifecycle: FetchLifecycle,
) {
    let decision = decide_initial(crate::net::identity::current_session().await);

    match decision {
        BootstrapDecision::FetchUser(id) => {
            // Ready means "decision made", not "fetch resolved"; the
            // interstitial stays up through `session.loading`.
            let tag = begin_fetch(session, &lifecycle);
            let _ = initializing.try_set(false);
            finish_fetch(session, &lifecycle, tag, &id).await;
        }
        BootstrapDecision::ClearSession => {
            dispatch_clear(session, &lifecycle);
            let _ = initializing.try_set(false);
        }
    }
}

/// Consume auth events until the provider unmounts and the channel closes.
///
/// Events are handled one at a time, so this loop never holds two of its
/// own fetches in flight; only the bootstrap fetch can overlap it, and the
/// generation tag settles that race. Clears advance the generation too,
/// so a fetch outstanding at sign-out goes stale instead of landing.
#[cfg(feature = "hydrate")]
async fn event_loop(
    mut rx: futures::channel::mpsc::UnboundedReceiver<(AuthEvent, Option<SessionInfo>)>,
    session: RwSignal<SessionState>,
    lifecycle: FetchLifecycle,
) {
    use futures::StreamExt;

    while let Some((event, info)) = rx.next().await {
        match decide_event(event, info.as_ref()) {
            Some(BootstrapDecision::FetchUser(id)) => {
                let tag = begin_fetch(session, &lifecycle);
                finish_fetch(session, &lifecycle, tag, &id).await;
            }
            Some(BootstrapDecision::ClearSession) => {
                dispatch_clear(session, &lifecycle);
            }
            None => {}
        }
    }
}

/// Dispatch `request_fetch` and take a generation tag for the fetch.
#[cfg(feature = "hydrate")]
fn begin_fetch(session: RwSignal<SessionState>, lifecycle: &FetchLifecycle) -> u64 {
    let tag = lifecycle.begin();
    dispatch(session, SessionState::request_fetch);
    tag
}

/// Dispatch `clear_user` and stale out any fetch still in flight, so a
/// late result cannot re-authenticate a session that was just cleared.
#[cfg(feature = "hydrate")]
fn dispatch_clear(session: RwSignal<SessionState>, lifecycle: &FetchLifecycle) {
    lifecycle.invalidate();
    dispatch(session, SessionState::clear_user);
}

/// Await the user fetch and dispatch the outcome unless superseded.
#[cfg(feature = "hydrate")]
async fn finish_fetch(
    session: RwSignal<SessionState>,
    lifecycle: &FetchLifecycle,
    tag: u64,
    identity_id: &str,
) {
    let result = crate::net::api::fetch_application_user(identity_id).await;
    if !lifecycle.is_current(tag) {
        leptos::logging::log!("dropping superseded user fetch for {identity_id}");
        return;
    }
    match result {
        Ok(user) => dispatch(session, |s| s.fetch_succeeded(user)),
        Err(e) => dispatch(session, |s| s.fetch_failed(e.to_string())),
    }
}

/// Apply a store transition, tolerating an already-disposed scope: a late
/// completion after unmount is dropped, not dispatched.
#[cfg(feature = "hydrate")]
fn dispatch(session: RwSignal<SessionState>, transition: impl FnOnce(&mut SessionState)) {
    if session.try_update(transition).is_none() {
        leptos::logging::warn!("session transition dropped after teardown");
    }
}
