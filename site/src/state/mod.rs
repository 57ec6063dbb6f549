//! Reactive state shared through Leptos contexts.

pub mod prefs;
pub mod ui;
