//! Scene: owns the single `ViewportState` and drives every controller.
//!
//! Event handlers (`pointer_event`, `resize`, focus changes) and the per-frame
//! `tick` are the only entry points, and the host calls them from one thread.
//! Within a tick the viewport is finalized first, hotspot bounds are tested
//! against centers projected from it, and animation playback is updated last.

use crate::animation::{AnimationState, AnimationSynchronizer};
use crate::canonical::CanonicalTable;
use crate::config::{SceneConfig, Tuning};
use crate::context::{
    ActionSink, AssetDimensions, AssetSizes, CursorStyle, DisplayMode, InteractionContext,
    InteractionKind, PointerCapabilities,
};
use crate::error::{ActionError, ConfigError};
use crate::hotspot::{ActivationOutcome, HotspotController, Phase, PulseRings, Transition};
use crate::pan::{PanController, PanState, PanUpdate, PointerEvent, PointerKind, PointerPhase};
use crate::timer::Countdown;
use crate::viewport::{Placement, ViewportState};
use glam::DVec2;

/// Non-hotspot interactive element in screen space (buttons, menus).
/// Overlays are probed before any hotspot.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayRegion {
    pub id: String,
    pub min: DVec2,
    pub max: DVec2,
}

impl OverlayRegion {
    pub fn new(id: impl Into<String>, min: DVec2, max: DVec2) -> Self {
        Self {
            id: id.into(),
            min: min.min(max),
            max: min.max(max),
        }
    }

    #[inline]
    pub fn contains(&self, p: DVec2) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitTarget {
    Overlay(usize),
    Hotspot(usize),
}

/// Message the host should show to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    PopupBlocked { id: String, url: String },
    ActionFailed { id: String, message: String },
}

/// What one pointer event did.
#[derive(Clone, Debug, PartialEq)]
pub struct EventOutcome {
    pub pan: PanUpdate,
    pub activation: Option<(usize, ActivationOutcome)>,
}

/// Render-ready view of one hotspot for the current frame.
#[derive(Clone, Debug, PartialEq)]
pub struct HotspotView {
    pub index: usize,
    pub placement: Placement,
    pub phase: Phase,
    pub hit_radius: f64,
    pub dot_visible: bool,
    pub label_visible: bool,
    pub label_progress: f64,
    pub rings: PulseRings,
    pub animation: AnimationState,
}

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub viewport: ViewportState,
    pub cursor: CursorStyle,
    pub display_mode: DisplayMode,
    pub hint_visible: bool,
    pub hotspots: Vec<HotspotView>,
    pub notices: Vec<Notice>,
}

#[derive(Clone, Copy, Debug)]
struct Press {
    target: usize,
    pointer_id: i32,
    start: DVec2,
    travel: f64,
}

pub struct Scene {
    table: CanonicalTable,
    tuning: Tuning,
    viewport: ViewportState,
    pending_resize: Option<DVec2>,
    pan: PanController,
    hotspots: HotspotController,
    animations: AnimationSynchronizer,
    overlays: Vec<OverlayRegion>,
    assets: AssetSizes,
    interaction: InteractionContext,
    actions: Box<dyn ActionSink>,
    hover: Option<DVec2>,
    press: Option<Press>,
    notices: Vec<Notice>,
    hint: Countdown,
    hint_visible: bool,
}

impl Scene {
    pub fn new(
        config: &SceneConfig,
        screen: DVec2,
        caps: PointerCapabilities,
        actions: Box<dyn ActionSink>,
        interaction: InteractionContext,
    ) -> Result<Self, ConfigError> {
        let artwork = config.artwork.geometry()?;
        let table = config.table();
        for w in table.validate(&artwork) {
            log::warn!("[config] {}", w);
        }
        let tuning = config.tuning.clone();
        let viewport = ViewportState::centered(artwork, screen);
        if let Some(w) = viewport.check() {
            log::warn!("[viewport] {}", w);
        }
        let mut hotspots = HotspotController::new(table.len(), caps, tuning.pulse_seed);
        hotspots.resize(viewport.screen, &tuning);
        let animations = AnimationSynchronizer::new(&table);
        let hint = Countdown::armed(tuning.hint_auto_hide_secs);
        log::info!(
            "[scene] {} hotspots, screen {}x{}, cover scale {:.4}, mode {:?}",
            table.len(),
            viewport.screen.x,
            viewport.screen.y,
            viewport.cover_scale,
            hotspots.display_mode()
        );
        Ok(Self {
            table,
            tuning,
            viewport,
            pending_resize: None,
            pan: PanController::default(),
            hotspots,
            animations,
            overlays: Vec::new(),
            assets: AssetSizes::default(),
            interaction,
            actions,
            hover: None,
            press: None,
            notices: Vec::new(),
            hint,
            hint_visible: true,
        })
    }

    #[inline]
    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    #[inline]
    pub fn table(&self) -> &CanonicalTable {
        &self.table
    }

    #[inline]
    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    #[inline]
    pub fn hotspots(&self) -> &HotspotController {
        &self.hotspots
    }

    #[inline]
    pub fn animations(&self) -> &AnimationSynchronizer {
        &self.animations
    }

    #[inline]
    pub fn interaction(&self) -> &InteractionContext {
        &self.interaction
    }

    #[inline]
    pub fn interaction_mut(&mut self) -> &mut InteractionContext {
        &mut self.interaction
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.viewport.is_dragging
    }

    #[inline]
    pub fn pan_state(&self) -> PanState {
        self.pan.state()
    }

    #[inline]
    pub fn hint_visible(&self) -> bool {
        self.hint_visible
    }

    // ---------------- Viewport writers ----------------

    /// Apply a new screen size immediately.
    pub fn resize(&mut self, screen: DVec2) {
        self.pending_resize = None;
        let next = self.viewport.resized(screen);
        if let Some(w) = next.check() {
            log::warn!("[viewport] {}", w);
        }
        self.viewport = next;
        self.hotspots.resize(self.viewport.screen, &self.tuning);
        log::debug!(
            "[viewport] resize {}x{} scale={:.4} origin=({:.1},{:.1})",
            self.viewport.screen.x,
            self.viewport.screen.y,
            self.viewport.cover_scale,
            self.viewport.origin.x,
            self.viewport.origin.y
        );
    }

    /// Record a size to apply at the start of the next tick. Bursts of resize
    /// events collapse into one recompute.
    pub fn request_resize(&mut self, screen: DVec2) {
        self.pending_resize = Some(screen);
    }

    /// Apply a size recorded by `request_resize`, if any. Runs before anything
    /// reads the viewport so hit tests never see a stale layout.
    fn flush_resize(&mut self) {
        if let Some(screen) = self.pending_resize.take() {
            self.resize(screen);
        }
    }

    fn apply_drag(&mut self, offset: DVec2, dragging: bool) -> DVec2 {
        let before = self.viewport.origin;
        self.viewport = self.viewport.with_drag(offset, dragging);
        self.viewport.origin - before
    }

    // ---------------- Collaborators ----------------

    pub fn set_capabilities(&mut self, caps: PointerCapabilities) {
        self.hotspots.set_capabilities(caps);
    }

    pub fn set_asset_size(&mut self, id: &str, size: DVec2) {
        self.assets.insert(id, size);
    }

    /// Forget an asset's size after it failed to load; the object falls back
    /// to the background's transform.
    pub fn forget_asset(&mut self, id: &str) {
        log::warn!("[scene] asset '{}' unavailable; using background transform", id);
        self.assets.remove(id);
    }

    pub fn set_overlays(&mut self, overlays: Vec<OverlayRegion>) {
        self.overlays = overlays;
    }

    // ---------------- Geometry ----------------

    /// Placement of the object at `index`, derived from the current viewport.
    pub fn placement(&self, index: usize) -> Placement {
        match self.table.get(index) {
            Some(obj) => self
                .viewport
                .place(obj, self.assets.natural_size(&obj.id)),
            None => self.viewport.background_placement(),
        }
    }

    /// Placement by id. Ids missing from the table take the background's
    /// position and scale so their art still appears.
    pub fn placement_for(&self, id: &str) -> Placement {
        match self.table.index_of(id) {
            Some(i) => self.placement(i),
            None => {
                log::debug!("[scene] no canonical entry for '{}'", id);
                self.viewport.background_placement()
            }
        }
    }

    /// Screen centers of every hotspot, in table order.
    pub fn centers(&self) -> Vec<DVec2> {
        (0..self.table.len())
            .map(|i| self.placement(i).center)
            .collect()
    }

    /// What is under `point`, overlays first, then hotspots by priority.
    pub fn probe(&self, point: DVec2) -> Option<HitTarget> {
        if let Some(i) = self.overlays.iter().position(|o| o.contains(point)) {
            return Some(HitTarget::Overlay(i));
        }
        let centers = self.centers();
        self.hotspots
            .probe(point, &centers, self.table.probe_order(), &self.tuning)
            .map(HitTarget::Hotspot)
    }

    fn on_screen(&self, point: DVec2) -> bool {
        point.cmpge(DVec2::ZERO).all() && point.cmple(self.viewport.screen).all()
    }

    fn hotspot_contains(&self, index: usize, point: DVec2) -> bool {
        match self.hotspots.state(index) {
            Some(s) => self.placement(index).center.distance(point) <= s.hit_radius(&self.tuning),
            None => false,
        }
    }

    pub fn cursor(&self) -> CursorStyle {
        if self.viewport.is_dragging {
            CursorStyle::Grabbing
        } else if self.hotspots.active().is_some() {
            CursorStyle::Pointer
        } else {
            CursorStyle::Default
        }
    }

    // ---------------- Events ----------------

    pub fn pointer_event(&mut self, ev: PointerEvent) -> EventOutcome {
        self.flush_resize();
        if ev.kind != PointerKind::Touch {
            // Window-level moves keep arriving after the pointer leaves the scene.
            self.hover = self.on_screen(ev.position).then_some(ev.position);
        }
        match ev.phase {
            PointerPhase::Down => self.pointer_down(ev),
            PointerPhase::Move => self.pointer_move(ev),
            PointerPhase::Up => self.pointer_up(ev),
            PointerPhase::Cancel => self.pointer_cancel(ev),
        }
    }

    fn pointer_down(&mut self, ev: PointerEvent) -> EventOutcome {
        self.interaction.gesture();
        let target = self.probe(ev.position);
        let pan = self.pan.pointer_down(&ev, &self.viewport, target.is_some());
        match pan {
            PanUpdate::Started => {
                self.apply_drag(self.viewport.drag_offset, true);
                self.hide_hint();
                log::debug!("[pan] drag start at ({:.1},{:.1})", ev.position.x, ev.position.y);
            }
            PanUpdate::Cancelled => {
                self.apply_drag(self.viewport.drag_offset, false);
            }
            _ => {}
        }
        self.press = match target {
            Some(HitTarget::Hotspot(i)) if self.pan.touch_count() <= 1 => Some(Press {
                target: i,
                pointer_id: ev.pointer_id,
                start: ev.position,
                travel: 0.0,
            }),
            _ => None,
        };
        EventOutcome {
            pan,
            activation: None,
        }
    }

    fn pointer_move(&mut self, ev: PointerEvent) -> EventOutcome {
        if let Some(p) = self.press.as_mut() {
            if p.pointer_id == ev.pointer_id {
                p.travel = p.travel.max(p.start.distance(ev.position));
            }
        }
        let pan = self.pan.pointer_move(&ev);
        if let PanUpdate::Moved(offset) = pan {
            let delta = self.apply_drag(offset, true);
            self.animations.on_pan(delta, &self.table);
        }
        EventOutcome {
            pan,
            activation: None,
        }
    }

    fn pointer_up(&mut self, ev: PointerEvent) -> EventOutcome {
        let pan = self.pan.pointer_up(&ev);
        if pan == PanUpdate::Ended {
            self.apply_drag(self.viewport.drag_offset, false);
            log::debug!(
                "[pan] drag end offset=({:.1},{:.1})",
                self.viewport.drag_offset.x,
                self.viewport.drag_offset.y
            );
        }
        let activation = match self.press.take() {
            Some(p) if p.pointer_id == ev.pointer_id => {
                // A press that wandered further than the slop is a drag, not a click.
                if p.travel <= self.tuning.click_slop_px && self.hotspot_contains(p.target, ev.position) {
                    Some((p.target, self.activate(p.target)))
                } else {
                    None
                }
            }
            other => {
                self.press = other;
                None
            }
        };
        EventOutcome { pan, activation }
    }

    fn pointer_cancel(&mut self, ev: PointerEvent) -> EventOutcome {
        let pan = self.pan.pointer_cancel(&ev);
        if pan == PanUpdate::Cancelled {
            self.apply_drag(self.viewport.drag_offset, false);
        }
        if self.press.map(|p| p.pointer_id) == Some(ev.pointer_id) {
            self.press = None;
        }
        EventOutcome {
            pan,
            activation: None,
        }
    }

    /// Fire the action of the hotspot at `index` through the action sink.
    pub fn activate(&mut self, index: usize) -> ActivationOutcome {
        let Some(obj) = self.table.get(index) else {
            return ActivationOutcome::NoAction;
        };
        let outcome = self
            .hotspots
            .activate(index, obj, self.actions.as_mut(), &self.tuning);
        match &outcome {
            ActivationOutcome::Fired => {
                self.interaction.notify(&obj.id, InteractionKind::Activate);
            }
            ActivationOutcome::Failed(ActionError::Blocked { url }) => {
                self.notices.push(Notice::PopupBlocked {
                    id: obj.id.clone(),
                    url: url.clone(),
                });
            }
            ActivationOutcome::Failed(e) => {
                self.notices.push(Notice::ActionFailed {
                    id: obj.id.clone(),
                    message: e.to_string(),
                });
            }
            _ => {}
        }
        outcome
    }

    /// The hovering pointer left the scene.
    pub fn pointer_left(&mut self) {
        self.hover = None;
    }

    /// Page became visible or focused again: re-arm every activation guard.
    pub fn on_focus_regained(&mut self) {
        log::debug!("[hotspot] focus regained; guards re-armed");
        self.hotspots.reset_guards();
    }

    /// Page lost focus: no drag may survive it.
    pub fn on_focus_lost(&mut self) {
        if self.pan.cancel() == PanUpdate::Cancelled {
            self.apply_drag(self.viewport.drag_offset, false);
        }
        self.press = None;
        self.hover = None;
        if let Some(t) = self.hotspots.clear_active() {
            self.animations.on_transition(t, &self.table);
        }
    }

    pub fn show_hint(&mut self) {
        self.hint_visible = true;
        self.hint.arm(self.tuning.hint_auto_hide_secs);
    }

    pub fn hide_hint(&mut self) {
        self.hint_visible = false;
        self.hint.clear();
    }

    pub fn toggle_hint(&mut self) -> bool {
        if self.hint_visible {
            self.hide_hint();
        } else {
            self.show_hint();
        }
        self.hint_visible
    }

    // ---------------- Frame ----------------

    /// Advance one frame of `dt` seconds and describe it.
    pub fn tick(&mut self, dt: f64) -> Frame {
        let dt = dt.max(0.0);
        self.flush_resize();

        let centers = self.centers();
        // Page controls shadow any hotspot beneath them.
        let hover = self
            .hover
            .filter(|_| !self.viewport.is_dragging)
            .filter(|p| !self.overlays.iter().any(|o| o.contains(*p)));
        let transitions =
            self.hotspots
                .update(dt, hover, &centers, self.table.probe_order(), &self.tuning);
        for t in transitions {
            self.animations.on_transition(t, &self.table);
            if let Transition::Entered(i) = t {
                if let Some(obj) = self.table.get(i) {
                    self.interaction.notify(&obj.id, InteractionKind::Hover);
                }
            }
        }
        self.animations.tick(dt, &self.table);

        if self.hint.tick(dt) {
            self.hint_visible = false;
        }

        let display_mode = self.hotspots.display_mode();
        let hotspots = (0..self.table.len())
            .filter_map(|i| {
                let state = self.hotspots.state(i)?;
                let animation = *self.animations.state(i)?;
                let phase = state.phase();
                let dot_visible = display_mode == DisplayMode::StaticLabel || phase == Phase::Idle;
                Some(HotspotView {
                    index: i,
                    placement: self.placement(i),
                    phase,
                    hit_radius: state.hit_radius(&self.tuning),
                    dot_visible,
                    label_visible: state.label_progress() > 0.0,
                    label_progress: state.label_progress(),
                    rings: if dot_visible {
                        state.pulse_rings(&self.tuning)
                    } else {
                        PulseRings::new()
                    },
                    animation,
                })
            })
            .collect();

        Frame {
            viewport: self.viewport,
            cursor: self.cursor(),
            display_mode,
            hint_visible: self.hint_visible,
            hotspots,
            notices: std::mem::take(&mut self.notices),
        }
    }
}
