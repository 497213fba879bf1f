use crate::constants::SPRITE_ATTR;
use glam::DVec2;
use panorama_core::{AnimationState, Frame, Placement, Scene};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// One host-page `<img data-sprite="id">` glued to the artwork.
pub struct Sprite {
    pub id: String,
    pub el: web::HtmlElement,
    index: Option<usize>,
    last_transform: String,
    last_frame: Option<usize>,
}

/// Collect the page's sprite elements and feed their natural sizes to the scene.
pub fn collect(document: &web::Document, scene: &Rc<RefCell<Scene>>) -> Vec<Sprite> {
    let Ok(nodes) = document.query_selector_all(&format!("[{}]", SPRITE_ATTR)) else {
        return Vec::new();
    };
    let mut sprites = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web::HtmlElement>().ok()) else {
            continue;
        };
        let Some(id) = el.get_attribute(SPRITE_ATTR) else {
            continue;
        };
        let index = scene.borrow().table().index_of(&id);
        if index.is_none() {
            log::debug!("[scene] sprite '{}' has no hotspot; following the background", id);
        }
        if let Some(img) = el.dyn_ref::<web::HtmlImageElement>() {
            track_image_size(img, &id, scene);
        }
        sprites.push(Sprite {
            id,
            el,
            index,
            last_transform: String::new(),
            last_frame: None,
        });
    }
    log::info!("[scene] {} sprites attached", sprites.len());
    sprites
}

fn record_size(img: &web::HtmlImageElement, id: &str, scene: &Rc<RefCell<Scene>>) {
    let size = DVec2::new(img.natural_width() as f64, img.natural_height() as f64);
    if size.x > 0.0 && size.y > 0.0 {
        scene.borrow_mut().set_asset_size(id, size);
    } else {
        scene.borrow_mut().forget_asset(id);
    }
}

fn track_image_size(img: &web::HtmlImageElement, id: &str, scene: &Rc<RefCell<Scene>>) {
    if img.complete() && img.natural_width() > 0 {
        record_size(img, id, scene);
        return;
    }
    {
        let img_ok = img.clone();
        let id = id.to_string();
        let scene = scene.clone();
        let closure = Closure::wrap(Box::new(move || {
            record_size(&img_ok, &id, &scene);
        }) as Box<dyn FnMut()>);
        _ = img.add_event_listener_with_callback("load", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        let id = id.to_string();
        let scene = scene.clone();
        let closure = Closure::wrap(Box::new(move || {
            scene.borrow_mut().forget_asset(&id);
        }) as Box<dyn FnMut()>);
        _ = img.add_event_listener_with_callback("error", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// CSS transform placing a sprite's center at `placement.center`.
pub fn sprite_transform(placement: &Placement, anim: Option<&AnimationState>) -> String {
    let (sway, rotation) = anim.map(|a| (a.sway, a.rotation)).unwrap_or((DVec2::ZERO, 0.0));
    let c = placement.center + sway;
    format!(
        "translate({:.2}px, {:.2}px) translate(-50%, -50%) rotate({:.4}rad) scale({:.5})",
        c.x, c.y, rotation, placement.scale
    )
}

/// Apply this frame's placements and playback state to every sprite.
pub fn apply(sprites: &mut [Sprite], scene: &Scene, frame: &Frame) {
    for sprite in sprites.iter_mut() {
        let view = sprite.index.and_then(|i| frame.hotspots.get(i));
        let placement = match view {
            Some(v) => v.placement,
            None => scene.placement_for(&sprite.id),
        };
        let anim = view.map(|v| &v.animation);
        let transform = sprite_transform(&placement, anim);
        let style = sprite.el.style();
        if transform != sprite.last_transform {
            _ = style.set_property("transform", &transform);
            sprite.last_transform = transform;
        }
        let Some(anim) = anim else { continue };
        _ = style.set_property("--playback-rate", &format!("{:.3}", anim.playback_rate));
        if sprite.last_frame != Some(anim.frame) {
            _ = sprite.el.set_attribute("data-frame", &anim.frame.to_string());
            sprite.last_frame = Some(anim.frame);
        }
        _ = sprite
            .el
            .set_attribute("data-playing", if anim.frame_playing { "1" } else { "0" });
    }
}
