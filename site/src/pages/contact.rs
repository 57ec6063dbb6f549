//! Contact page.

use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <Title text="Showroom — contact"/>
        <section class="page page--contact">
            <h1 class="page__title">"Contact"</h1>
            <p class="page__lede">"Tell us what you are launching."</p>
            <div class="contact">
                <a class="contact__mail" href="mailto:studio@showroom.example">
                    "studio@showroom.example"
                </a>
                <p class="contact__note">
                    "We reply within two working days. For press inquiries, mention "
                    "your outlet and deadline."
                </p>
            </div>
        </section>
    }
}
