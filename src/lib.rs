#![cfg(target_arch = "wasm32")]
use panorama_core::{InteractionContext, Scene, SceneConfig};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod actions;
mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod keys;
mod layout;
mod overlay;
mod render;
mod sprites;

use constants::{CANVAS_ID, HINT_CLOSE_ID};

fn load_scene_config() -> SceneConfig {
    match SceneConfig::bundled() {
        Ok(cfg) => cfg,
        Err(e) => {
            log::error!("[config] bundled scene rejected: {}; using an empty scene", e);
            SceneConfig::default()
        }
    }
}

fn wire_hint_close(document: &web::Document, scene: &Rc<RefCell<Scene>>) {
    let scene = scene.clone();
    dom::add_click_listener(document, HINT_CLOSE_ID, move || {
        scene.borrow_mut().hide_hint();
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("panorama-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::sync_canvas_backing_size(&canvas);

    let config = load_scene_config();
    let caps = dom::pointer_capabilities(&window);
    let audio_target: web::EventTarget = document.clone().into();
    let scene = Scene::new(
        &config,
        dom::canvas_css_size(&canvas),
        caps,
        Box::new(actions::WebActionSink::new(window.clone())),
        InteractionContext::new(Box::new(audio::WebAudioSink::new(audio_target))),
    )?;
    let scene = Rc::new(RefCell::new(scene));
    scene
        .borrow_mut()
        .set_overlays(dom::overlay_regions(&document, &canvas));

    let sprites = sprites::collect(&document, &scene);
    let painter = render::Painter::new(&canvas)?;

    let wiring = events::InputWiring {
        canvas: canvas.clone(),
        scene: scene.clone(),
    };
    events::wire_resize(&wiring, &document);
    events::wire_focus(&wiring, &document);
    events::wire_input_handlers(wiring);
    events::wire_global_keydown(scene.clone(), canvas.clone());
    wire_hint_close(&document, &scene);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        scene, canvas, document, painter, sprites,
    )));
    frame::start_loop(frame_ctx);
    Ok(())
}
