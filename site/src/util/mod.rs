//! Browser-side utilities behind the components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure decisions (what fires, when, how values move) live in the `motion`
//! crate; these modules translate them to the DOM: script tags, observers,
//! frame scheduling and capability probes. Modules that cannot exist
//! without a browser compile only for hydration; the rest no-op on the
//! server.

#[cfg(feature = "hydrate")]
pub mod fallback;
#[cfg(feature = "hydrate")]
pub mod frame_loop;
pub mod media;
pub mod page;
#[cfg(feature = "hydrate")]
pub mod script_loader;
#[cfg(feature = "hydrate")]
pub mod scroll_sync;
#[cfg(feature = "hydrate")]
pub mod smoke;
#[cfg(feature = "hydrate")]
pub mod viewer3d;
#[cfg(feature = "hydrate")]
pub mod visibility;
