//! Smoke canvas host: sizing, the redraw loop and resize handling.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use motion::paint;
use motion::smoke::SmokeField;

use crate::util::frame_loop::FrameLoop;

/// Size the canvas to its layout box, spawn the field and start the redraw
/// loop. The loop ends on its own once the canvas leaves the document.
///
/// # Errors
///
/// Fails when the 2D context is unavailable.
pub fn start(canvas: &HtmlCanvasElement) -> Result<FrameLoop, JsValue> {
    let ctx = context_2d(canvas)?;
    let (width, height) = layout_size(canvas);
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);

    let field = Rc::new(RefCell::new(SmokeField::new(
        width,
        height,
        js_sys::Date::now() as u64,
    )));
    attach_resize(canvas, &field);

    let canvas = canvas.clone();
    let field_loop = Rc::clone(&field);
    let mut prev_ts: Option<f64> = None;
    Ok(FrameLoop::start(move |ts| {
        if !canvas.is_connected() {
            return false;
        }
        let dt_ms = prev_ts.map_or(0.0, |prev| ts - prev);
        prev_ts = Some(ts);
        let mut field = field_loop.borrow_mut();
        field.step(dt_ms);
        if let Err(err) = paint::draw_field(&ctx, &field) {
            log::debug!("smoke draw failed: {err:?}");
            return false;
        }
        true
    }))
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| JsValue::from_str("unexpected 2d context type"))
}

fn layout_size(canvas: &HtmlCanvasElement) -> (f64, f64) {
    (
        f64::from(canvas.client_width()).max(1.0),
        f64::from(canvas.client_height()).max(1.0),
    )
}

fn attach_resize(canvas: &HtmlCanvasElement, field: &Rc<RefCell<SmokeField>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let canvas = canvas.clone();
    let field = Rc::clone(field);
    let cb = Closure::wrap(Box::new(move || {
        let (width, height) = layout_size(&canvas);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);
        field.borrow_mut().resize(width, height);
    }) as Box<dyn FnMut()>);
    if window
        .add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref())
        .is_err()
    {
        log::debug!("smoke resize listener attach failed");
    }
    cb.forget();
}
