//! Page-transition veil and the navigation path that drives it.
//!
//! In-app links cover the viewport with a veil, swap the route underneath,
//! then release. Only in-app links come through here; external links keep
//! default browser behavior untouched.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

#[cfg(feature = "hydrate")]
use motion::consts::{VEIL_COVER_MS, VEIL_RELEASE_MS};

use crate::state::prefs::MotionPrefs;
use crate::state::ui::UiState;

/// Full-viewport veil raised during page transitions.
#[component]
pub fn PageVeil() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let class = move || {
        if ui.get().veil_active {
            "page-veil page-veil--active"
        } else {
            "page-veil"
        }
    };
    view! { <div class=class aria-hidden="true"></div> }
}

/// Navigation callback that raises the veil, swaps the route, then
/// releases. Same-path activations only close the drawer; under reduced
/// motion the route swaps immediately with no veil.
#[must_use]
pub fn use_veiled_navigate() -> Callback<&'static str> {
    let navigate = use_navigate();
    let location = use_location();
    let ui = expect_context::<RwSignal<UiState>>();
    let prefs = expect_context::<RwSignal<MotionPrefs>>();

    Callback::new(move |href: &'static str| {
        ui.update(UiState::close_drawer);
        if location.pathname.get_untracked() == href {
            return;
        }
        if prefs.get_untracked().reduced_motion {
            navigate(href, NavigateOptions::default());
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            ui.update(|u| u.veil_active = true);
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(VEIL_COVER_MS)).await;
                navigate(href, NavigateOptions::default());
                gloo_timers::future::sleep(std::time::Duration::from_millis(VEIL_RELEASE_MS))
                    .await;
                ui.update(|u| u.veil_active = false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            navigate(href, NavigateOptions::default());
        }
    })
}
