//! # site
//!
//! Leptos front end for the showroom marketing site. Pages render on the
//! server for first paint, hydrate in the browser, and from there this
//! crate wires the cosmetic feature set: the navigation drawer, the
//! page-transition veil, animated statistics counters, the pulsing call to
//! action, the visibility-gated 3D viewer with graceful degradation, and
//! the ambient smoke canvas behind it. Decisions about what moves where
//! come from the `motion` crate; this crate owns the DOM.

pub mod app;
pub mod components;
pub mod config;
#[cfg(feature = "hydrate")]
pub mod ffi;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry: initialize logging and hydrate the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let debug = web_sys::window()
        .map(|w| w.location())
        .and_then(|l| l.search().ok())
        .is_some_and(|search| config::debug_from_search(&search));
    let level = if debug {
        log::Level::Debug
    } else {
        log::Level::Warn
    };
    let _ = console_log::init_with_level(level);
    leptos::mount::hydrate_body(app::App);
}
