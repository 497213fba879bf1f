// Shared fixtures for the host-side scene tests: a small artwork, recording
// collaborators and pointer shorthands.

#![allow(dead_code)]

use glam::DVec2;
use panorama_core::*;
use std::cell::RefCell;
use std::rc::Rc;

/// 1000x500 artwork shown on an 800x500 screen: cover scale 1, 200px of
/// horizontal overflow, origin (400, 250), artwork top-left at (-100, 0).
pub const SCREEN: DVec2 = DVec2::new(800.0, 500.0);

/// Canonical (500, 250) lands on screen (400, 250).
pub const CENTER_SPOT: DVec2 = DVec2::new(400.0, 250.0);
/// Canonical (200, 100) lands on screen (100, 100).
pub const CORNER_SPOT: DVec2 = DVec2::new(100.0, 100.0);
/// Far from every hotspot.
pub const EMPTY: DVec2 = DVec2::new(700.0, 420.0);

pub fn spot(id: &str, x: f64, y: f64, action: Option<HotspotAction>) -> CanonicalObject {
    let mut obj = CanonicalObject::at(id, x, y);
    obj.scale_multiplier = Some(1.0);
    obj.label = Some(id.to_uppercase());
    obj.action = action;
    obj
}

pub fn open_url(url: &str, new_tab: bool) -> Option<HotspotAction> {
    Some(HotspotAction::OpenUrl {
        url: url.to_string(),
        new_tab,
    })
}

pub fn navigate(path: &str) -> Option<HotspotAction> {
    Some(HotspotAction::Navigate {
        path: path.to_string(),
    })
}

pub fn config(hotspots: Vec<CanonicalObject>) -> SceneConfig {
    SceneConfig {
        artwork: ArtworkConfig {
            original_width: 1000.0,
            original_height: 500.0,
            natural_width: None,
            natural_height: None,
        },
        tuning: Tuning::default(),
        hotspots,
    }
}

pub fn default_spots() -> Vec<CanonicalObject> {
    vec![
        spot("center", 500.0, 250.0, open_url("https://example.com/a", true)),
        spot("corner", 200.0, 100.0, navigate("/corner")),
    ]
}

/// Action sink that records every call and can be told to refuse.
#[derive(Clone, Default)]
pub struct RecordingActions {
    pub calls: Rc<RefCell<Vec<String>>>,
    pub block_popups: Rc<RefCell<bool>>,
}

impl ActionSink for RecordingActions {
    fn open_url(&mut self, url: &str, new_tab: bool) -> Result<(), ActionError> {
        if new_tab && *self.block_popups.borrow() {
            return Err(ActionError::Blocked {
                url: url.to_string(),
            });
        }
        self.calls.borrow_mut().push(format!("open {url}"));
        Ok(())
    }

    fn navigate(&mut self, path: &str) -> Result<(), ActionError> {
        self.calls.borrow_mut().push(format!("navigate {path}"));
        Ok(())
    }
}

/// Interaction sink that records every signal.
#[derive(Clone, Default)]
pub struct RecordingInteractions {
    pub events: Rc<RefCell<Vec<(String, InteractionKind, bool)>>>,
    pub gestures: Rc<RefCell<usize>>,
}

impl InteractionSink for RecordingInteractions {
    fn hotspot_interaction(&mut self, id: &str, kind: InteractionKind, muted: bool) {
        self.events.borrow_mut().push((id.to_string(), kind, muted));
    }

    fn user_gesture(&mut self) {
        *self.gestures.borrow_mut() += 1;
    }
}

pub struct Harness {
    pub scene: Scene,
    pub actions: RecordingActions,
    pub interactions: RecordingInteractions,
}

pub fn harness_with(hotspots: Vec<CanonicalObject>, caps: PointerCapabilities) -> Harness {
    let actions = RecordingActions::default();
    let interactions = RecordingInteractions::default();
    let scene = Scene::new(
        &config(hotspots),
        SCREEN,
        caps,
        Box::new(actions.clone()),
        InteractionContext::new(Box::new(interactions.clone())),
    )
    .expect("scene builds");
    Harness {
        scene,
        actions,
        interactions,
    }
}

pub fn harness() -> Harness {
    harness_with(default_spots(), PointerCapabilities::DESKTOP)
}

pub fn mouse(scene: &mut Scene, phase: PointerPhase, at: DVec2) -> EventOutcome {
    scene.pointer_event(PointerEvent::mouse(phase, at))
}

pub fn touch(scene: &mut Scene, phase: PointerPhase, id: i32, at: DVec2) -> EventOutcome {
    scene.pointer_event(PointerEvent::touch(phase, id, at))
}

/// Press and release at the same point.
pub fn click(scene: &mut Scene, at: DVec2) -> Option<ActivationOutcome> {
    mouse(scene, PointerPhase::Down, at);
    mouse(scene, PointerPhase::Up, at)
        .activation
        .map(|(_, outcome)| outcome)
}

pub fn approx(a: DVec2, b: DVec2, eps: f64) -> bool {
    (a - b).abs().max_element() <= eps
}
