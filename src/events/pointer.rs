use crate::dom;
use crate::input;
use glam::DVec2;
use panorama_core::{PointerEvent, PointerKind, PointerPhase, Scene};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<Scene>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointer(&w, "pointermove", PointerPhase::Move);
    wire_pointer(&w, "pointerup", PointerPhase::Up);
    wire_pointer(&w, "pointercancel", PointerPhase::Cancel);
    wire_pointerleave(&w);
}

fn scene_event(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement, phase: PointerPhase) -> PointerEvent {
    let rect = canvas.get_bounding_client_rect();
    let [x, y] = input::client_to_scene(ev.client_x() as f64, ev.client_y() as f64, rect.left(), rect.top());
    PointerEvent::new(
        phase,
        input::pointer_kind(&ev.pointer_type()),
        ev.pointer_id(),
        DVec2::new(x, y),
    )
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pe = scene_event(&ev, &w.canvas, PointerPhase::Down);
        if !input::is_primary_press(pe.kind, ev.button()) {
            return;
        }
        let outcome = w.scene.borrow_mut().pointer_event(pe);
        log::debug!("[pan] down id={} -> {:?}", pe.pointer_id, outcome.pan);
        if pe.kind != PointerKind::Touch {
            _ = w.canvas.set_pointer_capture(ev.pointer_id());
        }
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

// Move/up/cancel listen on the window so a drag keeps tracking outside the canvas.
fn wire_pointer(w: &InputWiring, event: &str, phase: PointerPhase) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pe = scene_event(&ev, &w.canvas, phase);
        // Activation runs inside this handler so the browser still sees a user gesture.
        let outcome = w.scene.borrow_mut().pointer_event(pe);
        if let Some((i, result)) = outcome.activation {
            log::debug!("[hotspot] {} activation -> {:?}", i, result);
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_pointerleave(w: &InputWiring) {
    let scene = w.scene.clone();
    dom::add_listener(&w.canvas, "pointerleave", move || {
        scene.borrow_mut().pointer_left();
    });
}

/// Resize-type events only record the new size; the next frame applies it.
pub fn wire_resize(w: &InputWiring, document: &web::Document) {
    let Some(window) = web::window() else { return };
    let make = || {
        let canvas = w.canvas.clone();
        let scene = w.scene.clone();
        let document = document.clone();
        move || {
            let size = dom::canvas_css_size(&canvas);
            let mut scene = scene.borrow_mut();
            scene.request_resize(size);
            if let Some(wnd) = web::window() {
                scene.set_capabilities(dom::pointer_capabilities(&wnd));
            }
            scene.set_overlays(dom::overlay_regions(&document, &canvas));
        }
    };
    dom::add_listener(&window, "resize", make());
    dom::add_listener(&window, "orientationchange", make());
    dom::add_listener(document, "fullscreenchange", make());
}

pub fn wire_focus(w: &InputWiring, document: &web::Document) {
    let Some(window) = web::window() else { return };
    {
        let scene = w.scene.clone();
        dom::add_listener(&window, "focus", move || scene.borrow_mut().on_focus_regained());
    }
    {
        let scene = w.scene.clone();
        dom::add_listener(&window, "blur", move || scene.borrow_mut().on_focus_lost());
    }
    {
        let scene = w.scene.clone();
        let doc = document.clone();
        dom::add_listener(document, "visibilitychange", move || {
            let mut scene = scene.borrow_mut();
            if dom::is_page_visible(&doc) {
                scene.on_focus_regained();
            } else {
                scene.on_focus_lost();
            }
        });
    }
}
