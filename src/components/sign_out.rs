//! Sign-out button.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::identity::IdentityEvents;

/// Signs out at the identity provider, reports the transition so the
/// session store is cleared, and returns to the public map. A failed
/// provider call is logged and leaves the session untouched.
#[component]
pub fn SignOut() -> impl IntoView {
    let events = expect_context::<IdentityEvents>();
    let navigate = use_navigate();

    let on_sign_out = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let events = events.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::identity::sign_out().await {
                    Ok(()) => {
                        events.emit(crate::net::identity::AuthEvent::SignedOut, None);
                        navigate("/", NavigateOptions::default());
                    }
                    Err(e) => leptos::logging::error!("error signing out: {e}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&events, &navigate);
        }
    };

    view! {
        <button class="sign-out" on:click=on_sign_out>
            "Sign Out"
        </button>
    }
}
