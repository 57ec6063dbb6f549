//! Optional smooth-scroll capability.
//!
//! The scroll library is an optional page-level global; it is probed once
//! at startup and either drives a frame loop or is absent, in which case
//! native scrolling stands and nothing else changes. Nothing here fails
//! loudly: absence is the designed-for case.

use js_sys::{Array, Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};

use crate::util::frame_loop::FrameLoop;

/// A resolved scroll-sync instance and its per-frame step method.
pub struct ScrollDriver {
    instance: JsValue,
    step: Function,
}

impl ScrollDriver {
    /// Probe the global scope for the scroll library and construct an
    /// instance. `None` when the library is not on the page or does not
    /// expose the expected surface.
    #[must_use]
    pub fn detect() -> Option<Self> {
        let window = web_sys::window()?;
        let ctor = Reflect::get(window.as_ref(), &JsValue::from_str("Lenis"))
            .ok()?
            .dyn_into::<Function>()
            .ok()?;
        let instance = Reflect::construct(&ctor, &Array::new()).ok()?;
        let step = Reflect::get(&instance, &JsValue::from_str("raf"))
            .ok()?
            .dyn_into::<Function>()
            .ok()?;
        Some(Self {
            instance: instance.into(),
            step,
        })
    }

    /// Drive the instance from the frame clock until the page unloads.
    pub fn run(self) {
        FrameLoop::start(move |ts| {
            if self
                .step
                .call1(&self.instance, &JsValue::from_f64(ts))
                .is_err()
            {
                log::debug!("scroll sync step failed; reverting to native scrolling");
                return false;
            }
            true
        });
    }
}

/// Bootstrap scroll syncing when the capability is present.
pub fn bootstrap() {
    match ScrollDriver::detect() {
        Some(driver) => {
            log::debug!("scroll sync library detected");
            driver.run();
        }
        None => log::debug!("scroll sync library absent; native scrolling"),
    }
}
