//! Viewport-entry gate wiring.
//!
//! Wraps an `IntersectionObserver` around [`motion::gate::OnceGate`] so the
//! single-fire decision lives in testable state; this module only turns
//! observer entries into ratio observations and tears the observer down
//! after the fire.

use std::cell::RefCell;
use std::rc::Rc;

use motion::gate::OnceGate;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Observe `target` and invoke `on_fire` exactly once when at least
/// `threshold` of it is visible. The observer disconnects itself after
/// firing, so scrolling away and back cannot re-trigger.
///
/// # Errors
///
/// Returns the underlying failure when the observer cannot be constructed,
/// typically an environment without `IntersectionObserver`.
pub fn observe_once(
    target: &Element,
    threshold: f64,
    on_fire: impl FnOnce() + 'static,
) -> Result<(), JsValue> {
    let gate = Rc::new(RefCell::new(OnceGate::new(threshold)));
    let action: Rc<RefCell<Option<Box<dyn FnOnce()>>>> =
        Rc::new(RefCell::new(Some(Box::new(on_fire))));

    let cb = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if gate.borrow_mut().observe(entry.intersection_ratio()) {
                    observer.disconnect();
                    if let Some(action) = action.borrow_mut().take() {
                        action();
                    }
                    return;
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &options)?;
    observer.observe(target);
    cb.forget();
    Ok(())
}
