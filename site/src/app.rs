//! Root application component and the server-rendered shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Route, Router, Routes};

use crate::components::nav::SiteNav;
use crate::components::transition::PageVeil;
use crate::config::SiteConfig;
use crate::pages::contact::ContactPage;
use crate::pages::design::DesignPage;
use crate::pages::home::HomePage;
use crate::state::prefs::MotionPrefs;
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR and hydration. The vector
/// fallback player loads statically here; the 3D engine never does, it
/// waits for the visibility gate.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
                <script src=crate::config::LOTTIE_PLAYER_SRC></script>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root component: shared contexts, chrome and client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = SiteConfig::load();
    let prefs = RwSignal::new(MotionPrefs {
        reduced_motion: false,
        debug: config.debug,
    });
    let ui = RwSignal::new(UiState::default());

    #[cfg(feature = "hydrate")]
    {
        let reduced = crate::util::media::prefers_reduced_motion();
        prefs.update(|p| p.reduced_motion = reduced);
        crate::util::page::set_reduced_motion_attr(reduced);
        if !reduced {
            crate::util::scroll_sync::bootstrap();
        }
    }

    provide_context(config);
    provide_context(prefs);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/showroom.css"/>
        <Title text="Showroom"/>

        <Router>
            <SiteNav/>
            <PageVeil/>
            <main class="site-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("design") view=DesignPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                </Routes>
            </main>
        </Router>
    }
}
