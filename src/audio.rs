use crate::constants::INTERACTION_EVENT;
use panorama_core::{InteractionKind, InteractionSink};
use wasm_bindgen::JsValue;
use web_sys as web;

/// Audio side of the interaction context.
///
/// The browser refuses to start an `AudioContext` before a user gesture, so
/// the context is created suspended and resumed on the first pointer press.
/// Hotspot interactions are re-broadcast as a `hotspot-interaction` DOM event
/// that the host page's sound design listens to.
pub struct WebAudioSink {
    audio_ctx: Option<web::AudioContext>,
    target: web::EventTarget,
}

impl WebAudioSink {
    pub fn new(target: web::EventTarget) -> Self {
        let audio_ctx = match web::AudioContext::new() {
            Ok(ctx) => Some(ctx),
            Err(e) => {
                log::warn!("[audio] AudioContext unavailable: {:?}", e);
                None
            }
        };
        Self { audio_ctx, target }
    }

    fn dispatch(&self, id: &str, kind: InteractionKind, muted: bool) -> Result<(), JsValue> {
        let detail = js_sys::Object::new();
        js_sys::Reflect::set(&detail, &"id".into(), &id.into())?;
        let kind = match kind {
            InteractionKind::Hover => "hover",
            InteractionKind::Activate => "activate",
        };
        js_sys::Reflect::set(&detail, &"kind".into(), &kind.into())?;
        js_sys::Reflect::set(&detail, &"muted".into(), &muted.into())?;
        let init = web::CustomEventInit::new();
        init.set_detail(&detail);
        let event = web::CustomEvent::new_with_event_init_dict(INTERACTION_EVENT, &init)?;
        self.target.dispatch_event(&event)?;
        Ok(())
    }
}

impl InteractionSink for WebAudioSink {
    fn hotspot_interaction(&mut self, id: &str, kind: InteractionKind, muted: bool) {
        if let Err(e) = self.dispatch(id, kind, muted) {
            log::warn!("[audio] interaction event failed: {:?}", e);
        }
    }

    fn user_gesture(&mut self) {
        if let Some(ctx) = &self.audio_ctx {
            _ = ctx.resume();
            log::debug!("[audio] resume requested");
        }
    }
}
