//! Explicit start/stop wrapper over `requestAnimationFrame`.
//!
//! A raw recursive frame callback has no off switch; this wraps it in a
//! task whose tick decides continuation, so loops end through an explicit
//! check (usually "is my target still in the document") instead of running
//! forever. Dropping the handle does not stop the loop; call
//! [`FrameLoop::stop`] or return `false` from the tick.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

type TickClosure = Closure<dyn FnMut(f64)>;

/// Handle to a running per-frame task.
pub struct FrameLoop {
    running: Rc<Cell<bool>>,
}

impl FrameLoop {
    /// Start a repeating task. `tick` receives the frame timestamp in
    /// milliseconds and returns whether to keep running.
    pub fn start<F>(mut tick: F) -> Self
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let running = Rc::new(Cell::new(true));
        // The closure holds its own slot so it can reschedule itself. It is
        // never dropped from inside its own invocation; a stopped loop just
        // stops rescheduling.
        let holder: Rc<RefCell<Option<TickClosure>>> = Rc::new(RefCell::new(None));

        let running_cb = Rc::clone(&running);
        let holder_cb = Rc::clone(&holder);
        let cb = Closure::wrap(Box::new(move |ts: f64| {
            if !running_cb.get() || !tick(ts) {
                running_cb.set(false);
                return;
            }
            if !schedule(&holder_cb) {
                running_cb.set(false);
            }
        }) as Box<dyn FnMut(f64)>);

        *holder.borrow_mut() = Some(cb);
        if !schedule(&holder) {
            running.set(false);
            holder.borrow_mut().take();
        }
        Self { running }
    }

    /// Ask the loop to stop before its next tick.
    pub fn stop(&self) {
        self.running.set(false);
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running.get()
    }
}

fn schedule(holder: &Rc<RefCell<Option<TickClosure>>>) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let slot = holder.borrow();
    let Some(cb) = slot.as_ref() else {
        return false;
    };
    window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .is_ok()
}
