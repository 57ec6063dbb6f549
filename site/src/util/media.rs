//! Media-query probes resolved once at startup.
//!
//! TRADE-OFFS
//! ==========
//! Preferences are sampled at initialization, not observed live; a user
//! flipping reduced-motion mid-session gets the new behavior on the next
//! page load. Server renders see the conservative defaults.

/// Whether the user asks for reduced motion.
#[must_use]
pub fn prefers_reduced_motion() -> bool {
    #[cfg(feature = "hydrate")]
    {
        matches_query("(prefers-reduced-motion: reduce)")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Whether the pointing device is touch-only: no hover, coarse pointer.
/// Pointer-driven parallax is skipped on such devices.
#[must_use]
pub fn touch_only() -> bool {
    #[cfg(feature = "hydrate")]
    {
        matches_query("(hover: none) and (pointer: coarse)")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

#[cfg(feature = "hydrate")]
fn matches_query(query: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .is_some_and(|mq| mq.matches())
}
