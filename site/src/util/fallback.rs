//! Vector-animation fallback for the 3D viewer.

use wasm_bindgen::JsValue;
use web_sys::Element;

/// Marker class; also what makes repeat inserts detectable.
const FALLBACK_CLASS: &str = "viewer-fallback";

/// Insert the looping vector animation into `region`, unless one is
/// already there. Returns whether a new element was inserted.
///
/// The element autoplays on a transparent background and never intercepts
/// pointer events, so the degraded region reads as a static illustration.
///
/// # Errors
///
/// Propagates DOM failures from element creation or insertion.
pub fn insert_fallback(region: &Element, animation_src: &str) -> Result<bool, JsValue> {
    if let Ok(Some(_)) = region.query_selector(&format!(".{FALLBACK_CLASS}")) {
        return Ok(false);
    }
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Ok(false);
    };

    let player = document.create_element("lottie-player")?;
    player.set_attribute("class", FALLBACK_CLASS)?;
    player.set_attribute("src", animation_src)?;
    player.set_attribute("background", "transparent")?;
    player.set_attribute("loop", "")?;
    player.set_attribute("autoplay", "")?;
    player.set_attribute("style", "width:100%;height:100%;pointer-events:none")?;
    region.append_child(&player)?;
    Ok(true)
}
