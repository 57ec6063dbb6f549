//! Hero section: smoke backdrop, copy, and the visibility-gated 3D viewer.
//!
//! SYSTEM CONTEXT
//! ==============
//! The viewer's whole lifecycle hangs off this mount. Reduced motion skips
//! the gate and puts the vector fallback straight in; otherwise the first
//! quarter-visible observation starts the loader chain, and every failure
//! inside the chain degrades to that same fallback. Nothing loads for
//! visitors who never scroll the hero into view.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use motion::consts::VISIBILITY_THRESHOLD;

use crate::config::SiteConfig;
use crate::state::prefs::MotionPrefs;
#[cfg(feature = "hydrate")]
use crate::util::{media, viewer3d, visibility};

#[component]
pub fn Hero() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let prefs = expect_context::<RwSignal<MotionPrefs>>();

    let hero_ref = NodeRef::<leptos::html::Section>::new();
    let viewer_ref = NodeRef::<leptos::html::Div>::new();
    let smoke_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "hydrate")]
    {
        let armed = RwSignal::new(false);
        Effect::new(move || {
            let Some(hero) = hero_ref.get() else { return };
            let Some(viewer) = viewer_ref.get() else { return };
            let Some(smoke) = smoke_ref.get() else { return };
            if armed.get_untracked() {
                return;
            }
            armed.set(true);

            let ctx = viewer3d::ViewerContext {
                region: viewer,
                smoke,
                config: config.clone(),
                touch_only: media::touch_only(),
            };
            if prefs.get_untracked().reduced_motion {
                viewer3d::skip(&ctx);
                return;
            }
            let boot_ctx = ctx.clone();
            let gate = visibility::observe_once(&hero, VISIBILITY_THRESHOLD, move || {
                leptos::task::spawn_local(viewer3d::run(boot_ctx));
            });
            if let Err(err) = gate {
                // No observer support; treat it like any other broken leg.
                log::debug!("visibility gate unavailable: {err:?}");
                viewer3d::degrade(&ctx);
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, prefs);
    }

    view! {
        <section class="hero" node_ref=hero_ref>
            <canvas class="hero__smoke" node_ref=smoke_ref aria-hidden="true"></canvas>
            <div class="hero__copy">
                <h1 class="hero__title">"Machines, staged."</h1>
                <p class="hero__lede">
                    "A studio portfolio of launch sites, configurators and showroom installs."
                </p>
            </div>
            <div class="hero__viewer" node_ref=viewer_ref></div>
        </section>
    }
}
