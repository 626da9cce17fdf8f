use glam::Vec2;
use web_sys as web;

#[derive(Default, Clone, Copy)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub down: bool,
}

/// Map raw pointer pixels to normalized device coordinates in [-1, 1].
///
/// Screen-down is positive y in pixel space, so y is flipped: the top-left
/// corner maps to (-1, 1) and the bottom-right corner to (1, -1).
/// A zero-sized viewport is a caller precondition violation.
#[inline]
pub fn normalize_pointer(sx: f32, sy: f32, width: f32, height: f32) -> Vec2 {
    Vec2::new((sx / width) * 2.0 - 1.0, -(sy / height) * 2.0 + 1.0)
}

/// Pointer position in canvas backing-store pixels. The backing size tracks
/// devicePixelRatio, so CSS-space client coordinates are rescaled.
#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let sx = (x_css / rect.width() as f32) * canvas.width() as f32;
    let sy = (y_css / rect.height() as f32) * canvas.height() as f32;
    Vec2::new(sx, sy)
}
