//! Route gate for protected pages.

#[cfg(test)]
#[path = "protected_route_test.rs"]
mod protected_route_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::components::access_denied::AccessDenied;
use crate::components::loading_screen::LoadingScreen;
use crate::net::types::Role;
use crate::state::auth_view::AuthView;

/// What the gate decided for one render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Session still resolving: interstitial, no other judgment.
    Loading,
    /// Not authenticated: go to the login entry point.
    RedirectToLogin,
    /// Authenticated but the wrong role: denial view, no redirect.
    AccessDenied,
    /// Render the protected content.
    Allow,
}

/// Pure gate decision, re-evaluated on every render.
///
/// Roles form a closed set and are compared exactly; anything that is not
/// an explicit match falls through to denial rather than access.
#[must_use]
pub fn route_decision(view: &AuthView, required_role: Option<Role>) -> RouteDecision {
    if view.is_loading {
        return RouteDecision::Loading;
    }
    let Some(user) = &view.user else {
        return RouteDecision::RedirectToLogin;
    };
    match required_role {
        Some(required) if user.role != required => RouteDecision::AccessDenied,
        Some(_) | None => RouteDecision::Allow,
    }
}

/// Gate wrapper for protected routes.
///
/// Stateless: every render re-derives the decision from the published
/// [`AuthView`] and the optional role requirement. Redirects to login carry
/// the requested path for best-effort return navigation.
#[component]
pub fn ProtectedRoute(
    /// Role required to enter; absent means any authenticated user.
    #[prop(optional, into)]
    role: Option<Role>,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = expect_context::<Memo<AuthView>>();
    let location = use_location();

    move || match route_decision(&auth.get(), role) {
        RouteDecision::Loading => {
            view! { <LoadingScreen loading_text="Verifying authentication..."/> }.into_any()
        }
        RouteDecision::RedirectToLogin => {
            let from = location.pathname.get();
            view! { <Redirect path=format!("/login?from={from}")/> }.into_any()
        }
        RouteDecision::AccessDenied => view! { <AccessDenied/> }.into_any(),
        RouteDecision::Allow => children().into_any(),
    }
}
