//! Top navigation: brand, drawer toggle and route-aware links.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::transition::use_veiled_navigate;
use crate::state::ui::UiState;
use crate::util::page;

#[component]
pub fn SiteNav() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();

    // Keep the body's page attribute in step with the route.
    Effect::new(move || {
        page::set_page_attr(page_name(&location.pathname.get()));
    });

    let burger_class = move || {
        if ui.get().drawer_open {
            "site-nav__burger site-nav__burger--active"
        } else {
            "site-nav__burger"
        }
    };
    let menu_class = move || {
        if ui.get().drawer_open {
            "site-nav__menu site-nav__menu--open"
        } else {
            "site-nav__menu"
        }
    };

    view! {
        <header class="site-nav">
            <div class="site-nav__brand">
                <NavLink href="/">"Showroom"</NavLink>
            </div>
            <button
                class=burger_class
                aria-label="Toggle navigation"
                aria-expanded=move || if ui.get().drawer_open { "true" } else { "false" }
                on:click=move |_| ui.update(UiState::toggle_drawer)
            >
                <span class="site-nav__burger-bar"></span>
                <span class="site-nav__burger-bar"></span>
                <span class="site-nav__burger-bar"></span>
            </button>
            <nav class=menu_class>
                <NavLink href="/">"Home"</NavLink>
                <NavLink href="/design">"Design"</NavLink>
                <NavLink href="/contact">"Contact"</NavLink>
            </nav>
        </header>
    }
}

/// In-app link routed through the transition veil.
#[component]
pub fn NavLink(href: &'static str, children: Children) -> impl IntoView {
    let location = use_location();
    let go = use_veiled_navigate();

    let class = move || {
        if is_active(&location.pathname.get(), href) {
            "site-nav__link site-nav__link--active"
        } else {
            "site-nav__link"
        }
    };
    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        go.run(href);
    };

    view! {
        <a href=href class=class on:click=on_click>
            {children()}
        </a>
    }
}

/// Route-aware active test: exact match for the root, prefix for sections.
fn is_active(pathname: &str, href: &str) -> bool {
    if href == "/" {
        pathname == "/"
    } else {
        pathname == href || pathname.starts_with(&format!("{href}/"))
    }
}

/// Body `data-page` value for a route path.
fn page_name(pathname: &str) -> &'static str {
    if pathname == "/" {
        "home"
    } else if pathname.starts_with("/design") {
        "design"
    } else if pathname.starts_with("/contact") {
        "contact"
    } else {
        "not-found"
    }
}
