//! Landing page: hero viewer, studio numbers and the closing call to action.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::counters::StatCounter;
use crate::components::cta::PulseCta;
use crate::components::hero::Hero;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Showroom — launch sites for machines"/>
        <Hero/>
        <section class="stats">
            <StatCounter target=120 label="launches shipped"/>
            <StatCounter target=14 label="industry awards"/>
            <StatCounter target=98 suffix="%" label="clients retained"/>
        </section>
        <section class="closer">
            <h2 class="closer__title">"Ready when you are."</h2>
            <PulseCta href="/contact" label="Start a project"/>
        </section>
    }
}
