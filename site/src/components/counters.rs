//! Animated statistics counters.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use motion::consts::VISIBILITY_THRESHOLD;
#[cfg(feature = "hydrate")]
use motion::counter::CountUp;

use crate::state::prefs::MotionPrefs;
#[cfg(feature = "hydrate")]
use crate::util::{frame_loop::FrameLoop, visibility};

/// One statistic that counts from zero to `target` when first scrolled
/// into view. Under reduced motion the final value renders immediately.
#[component]
pub fn StatCounter(
    target: u64,
    label: &'static str,
    #[prop(optional)] suffix: &'static str,
) -> impl IntoView {
    let prefs = expect_context::<RwSignal<MotionPrefs>>();
    let shown = RwSignal::new(0_u64);
    let el = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        let armed = RwSignal::new(false);
        Effect::new(move || {
            let Some(div) = el.get() else { return };
            if armed.get_untracked() {
                return;
            }
            armed.set(true);

            if prefs.get_untracked().reduced_motion {
                shown.set(target);
                return;
            }
            let fire = move || {
                // The count starts on the first frame after the gate fires.
                let mut count: Option<CountUp> = None;
                FrameLoop::start(move |ts| {
                    let c = count.get_or_insert_with(|| CountUp::new(target as f64, ts));
                    shown.set(c.display(ts));
                    !c.done(ts)
                });
            };
            if let Err(err) = visibility::observe_once(&div, VISIBILITY_THRESHOLD, fire) {
                log::debug!("counter gate unavailable: {err:?}");
                shown.set(target);
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (prefs, target);
    }

    view! {
        <div class="stat" node_ref=el>
            <span class="stat__value">{move || shown.get()}</span>
            <span class="stat__suffix">{suffix}</span>
            <span class="stat__label">{label}</span>
        </div>
    }
}
