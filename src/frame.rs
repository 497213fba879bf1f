use crate::constants::{MAX_FRAME_DT_SECS, NOTICE_AUTO_HIDE_SECS};
use crate::dom;
use crate::overlay;
use crate::render;
use crate::sprites;
use instant::Instant;
use panorama_core::{Countdown, CursorStyle, Scene};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: Rc<RefCell<Scene>>,
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub painter: render::Painter,
    pub sprites: Vec<sprites::Sprite>,

    pub last_instant: Instant,
    pub notice_timer: Countdown,
    pub cursor: Option<CursorStyle>,
    pub hint_visible: Option<bool>,
}

impl FrameContext {
    pub fn new(
        scene: Rc<RefCell<Scene>>,
        canvas: web::HtmlCanvasElement,
        document: web::Document,
        painter: render::Painter,
        sprites: Vec<sprites::Sprite>,
    ) -> Self {
        Self {
            scene,
            canvas,
            document,
            painter,
            sprites,
            last_instant: Instant::now(),
            notice_timer: Countdown::default(),
            cursor: None,
            hint_visible: None,
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).as_secs_f64().min(MAX_FRAME_DT_SECS);
        self.last_instant = now;

        let dpr = dom::sync_canvas_backing_size(&self.canvas);
        let mut scene = self.scene.borrow_mut();
        let frame = scene.tick(dt);

        sprites::apply(&mut self.sprites, &scene, &frame);
        self.painter.draw(&frame, scene.table(), dpr);

        if self.cursor != Some(frame.cursor) {
            dom::set_cursor(&self.canvas, frame.cursor.css());
            self.cursor = Some(frame.cursor);
        }
        if self.hint_visible != Some(frame.hint_visible) {
            overlay::set_hint_visible(&self.document, frame.hint_visible);
            self.hint_visible = Some(frame.hint_visible);
        }
        if let Some(notice) = frame.notices.last() {
            overlay::show_notice(&self.document, notice);
            self.notice_timer.arm(NOTICE_AUTO_HIDE_SECS);
        } else if self.notice_timer.tick(dt) {
            overlay::hide_notice(&self.document);
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
