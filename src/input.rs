use crate::core::TrackRect;
use glam::Vec2;
use web_sys as web;

// ---------------- Pointer helpers ----------------

#[inline]
pub fn pointer_client(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

#[inline]
pub fn track_rect(el: &web::Element) -> TrackRect {
    let rect = el.get_bounding_client_rect();
    TrackRect {
        left: rect.left() as f32,
        top: rect.top() as f32,
        width: rect.width() as f32,
        height: rect.height() as f32,
    }
}

/// Pointer in canvas backing pixels, origin at the bottom-left like the shader's uv.
#[inline]
pub fn pointer_surface_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> [f32; 2] {
    let rect = canvas.get_bounding_client_rect();
    let w = rect.width() as f32;
    let h = rect.height() as f32;
    if w <= 0.0 || h <= 0.0 {
        return [0.0, 0.0];
    }
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let sx = (x_css / w) * canvas.width() as f32;
    let sy = (1.0 - y_css / h) * canvas.height() as f32;
    [sx, sy]
}
