//! Design philosophy page. Static copy; the shell interactions (drawer,
//! veil, counters elsewhere) are the only moving parts here.

use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn DesignPage() -> impl IntoView {
    view! {
        <Title text="Showroom — design"/>
        <section class="page page--design">
            <h1 class="page__title">"Design"</h1>
            <p class="page__lede">
                "Every surface earns its motion. If an animation does not carry "
                "meaning, it does not ship."
            </p>
            <div class="principles">
                <article class="principles__item">
                    <h2 class="principles__name">"Stage first"</h2>
                    <p class="principles__body">
                        "The machine is the subject. Light, smoke and camera exist "
                        "to frame it, never to compete with it."
                    </p>
                </article>
                <article class="principles__item">
                    <h2 class="principles__name">"Degrade gracefully"</h2>
                    <p class="principles__body">
                        "Old hardware, slow networks and reduced-motion settings all "
                        "get a considered version of the same page, not an error."
                    </p>
                </article>
                <article class="principles__item">
                    <h2 class="principles__name">"Hold the frame budget"</h2>
                    <p class="principles__body">
                        "Nothing animates off-screen, loops stop when their targets "
                        "leave the document, and heavy assets wait for a reason to load."
                    </p>
                </article>
            </div>
        </section>
    }
}
