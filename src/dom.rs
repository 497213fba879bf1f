use crate::constants::OVERLAY_ATTR;
use crate::input;
use glam::DVec2;
use panorama_core::{OverlayRegion, PointerCapabilities};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Attach a no-argument listener to `target` for the lifetime of the page.
pub fn add_listener(target: &web::EventTarget, event: &str, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::warn!("[dom] cannot listen for '{}': {:?}", event, e);
    }
    closure.forget();
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        add_listener(&el, "click", handler);
    }
}

/// CSS size of the canvas; the scene works in CSS px.
pub fn canvas_css_size(canvas: &web::HtmlCanvasElement) -> DVec2 {
    let rect = canvas.get_bounding_client_rect();
    DVec2::new(rect.width(), rect.height())
}

/// Match the backing store to CSS size * devicePixelRatio; returns the ratio used.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> f64 {
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let css = canvas_css_size(canvas);
    let (w_px, h_px) = input::backing_size(css.x, css.y, dpr);
    if canvas.width() != w_px {
        canvas.set_width(w_px);
    }
    if canvas.height() != h_px {
        canvas.set_height(h_px);
    }
    dpr
}

fn media_matches(window: &web::Window, query: &str) -> bool {
    window
        .match_media(query)
        .ok()
        .flatten()
        .map(|m| m.matches())
        .unwrap_or(false)
}

/// Hover/coarse-pointer support from media queries instead of user-agent sniffing.
pub fn pointer_capabilities(window: &web::Window) -> PointerCapabilities {
    PointerCapabilities {
        has_hover: media_matches(window, "(hover: hover)"),
        has_coarse_pointer: media_matches(window, "(pointer: coarse)"),
    }
}

/// Screen rectangles of page controls (`[data-overlay]`) laid over the canvas,
/// in scene coordinates.
pub fn overlay_regions(document: &web::Document, canvas: &web::HtmlCanvasElement) -> Vec<OverlayRegion> {
    let Ok(nodes) = document.query_selector_all(&format!("[{}]", OVERLAY_ATTR)) else {
        return Vec::new();
    };
    let origin = canvas.get_bounding_client_rect();
    (0..nodes.length())
        .filter_map(|i| nodes.item(i)?.dyn_into::<web::Element>().ok())
        .filter_map(|el| {
            let r = el.get_bounding_client_rect();
            if r.width() <= 0.0 || r.height() <= 0.0 {
                return None;
            }
            let [x0, y0] = input::client_to_scene(r.left(), r.top(), origin.left(), origin.top());
            let id = el.get_attribute(OVERLAY_ATTR).unwrap_or_default();
            Some(OverlayRegion::new(
                id,
                DVec2::new(x0, y0),
                DVec2::new(x0 + r.width(), y0 + r.height()),
            ))
        })
        .collect()
}

pub fn set_cursor(canvas: &web::HtmlCanvasElement, css: &str) {
    _ = canvas.style().set_property("cursor", css);
}

pub fn is_page_visible(document: &web::Document) -> bool {
    document.visibility_state() == web::VisibilityState::Visible
}
