//! Access-denied view for role-gated routes.

use leptos::prelude::*;

/// Shown when an authenticated user lacks the required role. Offers a way
/// back to safe ground instead of redirecting automatically.
#[component]
pub fn AccessDenied() -> impl IntoView {
    view! {
        <div class="access-denied">
            <h1>"Access denied"</h1>
            <p>"Your account does not have permission to view this page."</p>
            <a class="access-denied__home" href="/">
                "Back to the map"
            </a>
        </div>
    }
}
