use crate::core::{Camera, Ray};
use glam::Vec2;
use web_sys as web;

// ---------------- Pointer helpers ----------------
/// Pointer position in normalized device coordinates (x right, y up).
#[inline]
pub fn pointer_ndc(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Option<Vec2> {
    let rect = canvas.get_bounding_client_rect();
    let w = rect.width() as f32;
    let h = rect.height() as f32;
    if w <= 0.0 || h <= 0.0 {
        return None;
    }
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    Some(Vec2::new((x_css / w) * 2.0 - 1.0, -(y_css / h) * 2.0 + 1.0))
}

#[inline]
pub fn canvas_aspect(canvas: &web::HtmlCanvasElement) -> f32 {
    canvas.width().max(1) as f32 / canvas.height().max(1) as f32
}

/// World-space ray under the pointer, or `None` for a collapsed canvas.
#[inline]
pub fn pointer_ray(
    ev: &web::PointerEvent,
    canvas: &web::HtmlCanvasElement,
    camera: &Camera,
) -> Option<Ray> {
    let ndc = pointer_ndc(ev, canvas)?;
    Some(camera.ray_from_ndc(ndc, canvas_aspect(canvas)))
}
