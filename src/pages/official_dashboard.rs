//! Department dashboard for staff triage.

use leptos::prelude::*;

use crate::components::sign_out::SignOut;
use crate::state::auth_view::AuthView;

/// Dashboard for department staff, reached only through the role-gated
/// route (`role = Department`).
#[component]
pub fn OfficialDashboardPage() -> impl IntoView {
    let auth = expect_context::<Memo<AuthView>>();

    let department = move || {
        auth.get()
            .user
            .and_then(|u| u.department)
            .map_or_else(|| "Unassigned".to_owned(), |d| d.name)
    };

    view! {
        <div class="official-dashboard-page">
            <header class="official-dashboard-page__header">
                <h1>"Department dashboard"</h1>
                <SignOut/>
            </header>
            <p class="official-dashboard-page__department">{department}</p>
            <p>"Issues assigned to your department will appear here."</p>
        </div>
    }
}
