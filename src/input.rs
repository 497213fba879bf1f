// Pointer helpers free of browser types, so they can be tested on the host.

use panorama_core::PointerKind;

/// Client-space pointer position to scene CSS px (relative to the canvas corner).
#[inline]
pub fn client_to_scene(client_x: f64, client_y: f64, rect_left: f64, rect_top: f64) -> [f64; 2] {
    [client_x - rect_left, client_y - rect_top]
}

/// Backing-store pixel size for a CSS size at a device-pixel-ratio; never zero.
#[inline]
pub fn backing_size(css_w: f64, css_h: f64, dpr: f64) -> (u32, u32) {
    let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
    let w = (css_w.max(0.0) * dpr).round() as u32;
    let h = (css_h.max(0.0) * dpr).round() as u32;
    (w.max(1), h.max(1))
}

/// Map `PointerEvent.pointerType` to the engine's discriminator.
#[inline]
pub fn pointer_kind(pointer_type: &str) -> PointerKind {
    match pointer_type {
        "touch" => PointerKind::Touch,
        "pen" => PointerKind::Pen,
        _ => PointerKind::Mouse,
    }
}

/// Only the primary mouse button interacts; touch and pen always do.
#[inline]
pub fn is_primary_press(kind: PointerKind, button: i16) -> bool {
    kind != PointerKind::Mouse || button == 0
}
