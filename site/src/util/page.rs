//! Body-level flags consumed by page-scoped styling.

/// Record the active page on `<body data-page="...">`.
pub fn set_page_attr(page: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        {
            let _ = body.set_attribute("data-page", page);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = page;
    }
}

/// Record the reduced-motion preference on `<body data-reduced-motion>`,
/// so stylesheets can tone down CSS transitions to match.
pub fn set_reduced_motion_attr(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        {
            if enabled {
                let _ = body.set_attribute("data-reduced-motion", "true");
            } else {
                let _ = body.remove_attribute("data-reduced-motion");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}
