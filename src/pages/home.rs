//! Public home page: the issue map with the coordinate picker.
//!
//! Tile rendering is delegated to the embedded map widget; this page owns
//! the picker state machine — which coordinates the user is pointing at,
//! and whether a move came from them or from a search recentre.

use leptos::prelude::*;

use crate::state::auth_view::AuthView;
use crate::state::picker::{Coordinates, PickerState};

/// How long after a programmatic recentre the map's echoed move events are
/// still attributed to that recentre rather than to the user.
#[cfg(feature = "hydrate")]
const RECENTER_SETTLE_MS: u32 = 100;

/// Home page: map header, coordinate jump box, and pin-mode toggle.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<Memo<AuthView>>();
    let picker = expect_context::<RwSignal<PickerState>>();
    let query = RwSignal::new(String::new());

    // Selecting a place recentres programmatically; the guard is released
    // once the map has settled so echoed move events are not taken for pans.
    let on_place_selected = move |coords: Coordinates| {
        picker.update(|p| {
            p.begin_programmatic_move();
            p.recenter(coords);
        });
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(RECENTER_SETTLE_MS).await;
            let _ = picker.try_update(PickerState::end_programmatic_move);
        });
    };

    let jump = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(coords) = Coordinates::parse(&query.get()) {
            on_place_selected(coords);
        }
    };

    let center_label = move || {
        let center = picker.get().center;
        format!("{:.5}, {:.5}", center.latitude, center.longitude)
    };
    let pin_label = move || {
        if picker.get().pin_mode {
            "Cancel pin"
        } else {
            "Pin an issue"
        }
    };
    let account_link = move || {
        if auth.get().is_authenticated {
            view! { <a class="map-header__link" href="/dashboard">"Dashboard"</a> }.into_any()
        } else {
            view! { <a class="map-header__link" href="/login">"Sign In"</a> }.into_any()
        }
    };

    view! {
        <div class="home-page">
            <header class="map-header">
                <h1>"UrbanSync"</h1>
                <form class="map-header__search" on:submit=jump>
                    <input
                        class="map-header__input"
                        type="text"
                        placeholder="Jump to lat, lng"
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                </form>
                {account_link}
            </header>

            <div class="home-page__map">
                // Tile layer mounts here; the picker only tracks its center.
                <div class="home-page__center-label">{center_label}</div>
                <Show when=move || picker.get().pin_mode>
                    <div class="home-page__center-marker" aria-hidden="true"></div>
                </Show>
            </div>

            <button
                class="btn btn--primary home-page__pin-toggle"
                on:click=move |_| picker.update(PickerState::toggle_pin_mode)
            >
                {pin_label}
            </button>
        </div>
    }
}
