//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::auth_provider::AuthProvider;
use crate::components::protected_route::ProtectedRoute;
use crate::net::types::Role;
use crate::pages::{
    dashboard::DashboardPage, home::HomePage, login::LoginPage,
    official_dashboard::OfficialDashboardPage,
};
use crate::state::{picker::PickerState, session::SessionState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the session and picker stores (created here, dropped with the
/// app), wraps the router in the auth provider, and gates the dashboard
/// routes by authentication and role.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let picker = RwSignal::new(PickerState::default());

    provide_context(session);
    provide_context(picker);

    view! {
        <Stylesheet id="leptos" href="/pkg/urbansync.css"/>
        <Title text="UrbanSync"/>

        <AuthProvider>
            <Router>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| {
                            view! {
                                <ProtectedRoute>
                                    <DashboardPage/>
                                </ProtectedRoute>
                            }
                        }
                    />
                    <Route
                        path=(StaticSegment("department"), StaticSegment("dashboard"))
                        view=|| {
                            view! {
                                <ProtectedRoute role=Role::Department>
                                    <OfficialDashboardPage/>
                                </ProtectedRoute>
                            }
                        }
                    />
                </Routes>
            </Router>
        </AuthProvider>
    }
}
