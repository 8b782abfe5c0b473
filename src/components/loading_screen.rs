//! Full-screen loading interstitial.

use leptos::prelude::*;

/// Shown while the session is being resolved; protected content must never
/// render underneath it.
#[component]
pub fn LoadingScreen(#[prop(into)] loading_text: String) -> impl IntoView {
    view! {
        <div class="loading-screen">
            <div class="loading-screen__spinner" aria-hidden="true"></div>
            <p class="loading-screen__text">{loading_text}</p>
        </div>
    }
}
