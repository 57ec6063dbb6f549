//! Canvas drawing for the smoke field.
//!
//! The only module that touches a drawing context. The field itself stays
//! drawable-agnostic so it runs under plain native tests.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::SMOKE_RGB;
use crate::smoke::SmokeField;

/// Clear the surface and redraw every blob as a three-stop radial gradient,
/// light blue-white at the center fading to fully transparent at the rim.
///
/// # Errors
///
/// Propagates canvas API failures (detached context, invalid gradient).
pub fn draw_field(ctx: &CanvasRenderingContext2d, field: &SmokeField) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, field.width(), field.height());
    let rim = format!("rgba({SMOKE_RGB}, 0)");
    for blob in field.blobs() {
        let gradient =
            ctx.create_radial_gradient(blob.x, blob.y, 0.0, blob.x, blob.y, blob.radius)?;
        gradient.add_color_stop(0.0, &format!("rgba({SMOKE_RGB}, {:.3})", blob.opacity))?;
        gradient.add_color_stop(0.55, &format!("rgba({SMOKE_RGB}, {:.3})", blob.opacity * 0.4))?;
        gradient.add_color_stop(1.0, &rim)?;
        ctx.set_fill_style_canvas_gradient(&gradient);
        ctx.begin_path();
        ctx.arc(blob.x, blob.y, blob.radius, 0.0, std::f64::consts::TAU)?;
        ctx.fill();
    }
    Ok(())
}
