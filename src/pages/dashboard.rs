//! Citizen dashboard: the signed-in landing page.

use leptos::prelude::*;

use crate::components::sign_out::SignOut;
use crate::state::auth_view::AuthView;

/// Dashboard for signed-in citizens. Rendering is gated by
/// `ProtectedRoute`, so the user is present here in practice; the fallback
/// text only covers the instant between sign-out and redirect.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<Memo<AuthView>>();

    let greeting = move || {
        auth.get()
            .user
            .map_or_else(|| "Welcome".to_owned(), |u| format!("Welcome, {}", u.name))
    };
    let role_label = move || auth.get().user.map(|u| u.role.to_string());

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>{greeting}</h1>
                <SignOut/>
            </header>
            <p class="dashboard-page__role">{role_label}</p>
            <p>"Issues you reported will appear here."</p>
            <a class="dashboard-page__map-link" href="/">
                "Report a new issue on the map"
            </a>
        </div>
    }
}
