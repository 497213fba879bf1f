use crate::keys::{self, KeyCommand};
use panorama_core::Scene;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn toggle_fullscreen(canvas: &web::HtmlCanvasElement) {
    if let Some(doc) = crate::dom::window_document() {
        if doc.fullscreen_element().is_some() {
            _ = doc.exit_fullscreen();
        } else {
            _ = canvas.request_fullscreen();
        }
    }
}

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    scene: &Rc<RefCell<Scene>>,
    canvas: &web::HtmlCanvasElement,
) {
    if !keys::accepts_modifiers(ev.ctrl_key(), ev.meta_key(), ev.alt_key()) {
        return;
    }
    let Some(cmd) = keys::command_for_key(&ev.key()) else {
        return;
    };
    match cmd {
        KeyCommand::ToggleHint => {
            let visible = scene.borrow_mut().toggle_hint();
            log::info!("[keys] hint visible={}", visible);
        }
        KeyCommand::ToggleMute => {
            let muted = scene.borrow_mut().interaction_mut().toggle_muted();
            log::info!("[keys] muted={}", muted);
        }
        KeyCommand::ToggleFullscreen => toggle_fullscreen(canvas),
        KeyCommand::ExitFullscreen => {
            if let Some(doc) = crate::dom::window_document() {
                if doc.fullscreen_element().is_some() {
                    _ = doc.exit_fullscreen();
                }
            }
        }
    }
    ev.prevent_default();
}

pub fn wire_global_keydown(scene: Rc<RefCell<Scene>>, canvas: web::HtmlCanvasElement) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &scene, &canvas);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
