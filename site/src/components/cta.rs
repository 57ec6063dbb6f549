//! Pulsing call to action.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use motion::consts::{PULSE_AMPLITUDE, PULSE_PERIOD_MS};
#[cfg(feature = "hydrate")]
use motion::pulse::Pulse;

use crate::components::transition::use_veiled_navigate;
use crate::state::prefs::MotionPrefs;
#[cfg(feature = "hydrate")]
use crate::util::frame_loop::FrameLoop;

/// Primary call-to-action link with a gentle scale pulse. The pulse stops
/// when the element leaves the document and never starts under reduced
/// motion.
#[component]
pub fn PulseCta(href: &'static str, label: &'static str) -> impl IntoView {
    let prefs = expect_context::<RwSignal<MotionPrefs>>();
    let go = use_veiled_navigate();
    let el = NodeRef::<leptos::html::A>::new();

    #[cfg(feature = "hydrate")]
    {
        let armed = RwSignal::new(false);
        Effect::new(move || {
            let Some(anchor) = el.get() else { return };
            if armed.get_untracked() {
                return;
            }
            armed.set(true);

            if prefs.get_untracked().reduced_motion {
                return;
            }
            let mut pulse: Option<Pulse> = None;
            FrameLoop::start(move |ts| {
                if !anchor.is_connected() {
                    return false;
                }
                let p =
                    pulse.get_or_insert_with(|| Pulse::new(PULSE_PERIOD_MS, PULSE_AMPLITUDE, ts));
                let scale = p.scale_at(ts);
                anchor
                    .style()
                    .set_property("transform", &format!("scale({scale:.4})"))
                    .is_ok()
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = prefs;
    }

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        go.run(href);
    };

    view! {
        <a href=href class="cta" node_ref=el on:click=on_click>
            {label}
        </a>
    }
}
