//! Login page with email/password form.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::identity::IdentityEvents;

/// Where to land after a successful sign-in. The route gate passes the
/// requested path along as `?from=`; only same-app absolute paths are
/// honored, anything else falls back to the dashboard.
#[must_use]
pub fn post_login_destination(from: Option<&str>) -> String {
    match from {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path.to_owned(),
        _ => "/dashboard".to_owned(),
    }
}

/// Login form. On success the transition is reported through
/// [`IdentityEvents`], which triggers the user-record fetch, and the
/// browser navigates back to the page that sent the user here, or to
/// the dashboard.
#[component]
pub fn LoginPage() -> impl IntoView {
    let events = expect_context::<IdentityEvents>();
    let navigate = use_navigate();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_value = email.get();
        let password_value = password.get();
        if email_value.trim().is_empty() || !email_value.contains('@') {
            error.set(Some("Please enter a valid email address".to_owned()));
            return;
        }
        if password_value.is_empty() {
            error.set(Some("Password is required".to_owned()));
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let events = events.clone();
            let navigate = navigate.clone();
            let destination =
                post_login_destination(query.get_untracked().get("from").as_deref());
            error.set(None);
            submitting.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::identity::sign_in(email_value.trim(), &password_value).await {
                    Ok(info) => {
                        events.emit(crate::net::identity::AuthEvent::SignedIn, Some(info));
                        navigate(&destination, NavigateOptions::default());
                    }
                    Err(e) => {
                        leptos::logging::warn!("login failed: {e}");
                        let _ = error
                            .try_set(Some("Invalid email or password. Please try again.".to_owned()));
                    }
                }
                // The page may already be unmounted after navigation.
                let _ = submitting.try_set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&events, &navigate, &query, &password_value);
        }
    };

    view! {
        <div class="login-page">
            <h1>"UrbanSync"</h1>
            <p>"Report civic issues, track their resolution"</p>
            <form class="login-page__form" on:submit=submit>
                <label class="login-page__label">
                    "Email"
                    <input
                        class="login-page__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="login-page__label">
                    "Password"
                    <input
                        class="login-page__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="login-page__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button
                    class="btn btn--primary"
                    type="submit"
                    disabled=move || submitting.get()
                >
                    {move || if submitting.get() { "Signing in..." } else { "Sign In" }}
                </button>
            </form>
        </div>
    }
}
