//! Hotspot controller: per-object bounds test, idle/active phase, pulse rings
//! and the one-shot activation guard.
//!
//! Screen positions are never stored here. Every call receives the centers
//! projected from the current viewport, so a hotspot follows the artwork through
//! any pan or resize without bookkeeping.

use crate::canonical::{CanonicalObject, HotspotAction};
use crate::config::Tuning;
use crate::constants::{PULSE_ALPHA_MAX, PULSE_RING_COUNT, PULSE_RING_DAMPING};
use crate::context::{ActionSink, DisplayMode, PointerCapabilities};
use crate::error::ActionError;
use crate::timer::Countdown;
use glam::DVec2;
use rand::prelude::*;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Active,
}

/// One concentric ring of the idle pulse.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PulseRing {
    pub radius: f64,
    pub alpha: f64,
}

pub type PulseRings = SmallVec<[PulseRing; PULSE_RING_COUNT]>;

/// Mutable per-hotspot record. Only [`HotspotController`] writes it.
#[derive(Clone, Debug, Default)]
pub struct HotspotState {
    phase: Phase,
    pulse_time: f64,
    activation_fired: bool,
    base_radius: f64,
    label_progress: f64,
    rearm: Countdown,
}

impl HotspotState {
    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn pulse_time(&self) -> f64 {
        self.pulse_time
    }

    #[inline]
    pub fn activation_fired(&self) -> bool {
        self.activation_fired
    }

    #[inline]
    pub fn base_radius(&self) -> f64 {
        self.base_radius
    }

    /// 0 = collapsed dot, 1 = fully expanded label.
    #[inline]
    pub fn label_progress(&self) -> f64 {
        self.label_progress
    }

    /// Radius within which the pointer counts as "on" the hotspot.
    #[inline]
    pub fn hit_radius(&self, tuning: &Tuning) -> f64 {
        self.base_radius + tuning.pulse_expansion_px + tuning.hit_tolerance_px
    }

    /// Rings of the breathing dot at the current pulse time. Cosmetic only.
    pub fn pulse_rings(&self, tuning: &Tuning) -> PulseRings {
        (0..PULSE_RING_COUNT)
            .map(|i| {
                let damping = PULSE_RING_DAMPING[i];
                let wave = (self.pulse_time + i as f64 * tuning.pulse_ring_phase_step).sin();
                PulseRing {
                    radius: (self.base_radius + wave * tuning.pulse_expansion_px * damping)
                        .max(0.0),
                    alpha: (PULSE_ALPHA_MAX * damping * (0.5 + 0.5 * wave)).clamp(0.0, 1.0),
                }
            })
            .collect()
    }
}

/// Dot radius for a given screen size.
pub fn responsive_base_radius(screen: DVec2, tuning: &Tuning) -> f64 {
    (screen.min_element() * tuning.base_radius_fraction)
        .clamp(tuning.base_radius_min_px, tuning.base_radius_max_px)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Entered(usize),
    Exited(usize),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActivationOutcome {
    Fired,
    /// The guard already fired for this interaction.
    Suppressed,
    /// The hotspot has no action configured.
    NoAction,
    /// The sink refused; the guard was re-armed so the user can retry.
    Failed(ActionError),
}

#[derive(Clone, Debug)]
pub struct HotspotController {
    states: Vec<HotspotState>,
    display: DisplayMode,
    active: Option<usize>,
}

impl HotspotController {
    /// Build states for `count` hotspots. Pulse phases are jittered from `seed`
    /// so neighbouring dots do not breathe in lockstep.
    pub fn new(count: usize, caps: PointerCapabilities, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let states = (0..count)
            .map(|_| HotspotState {
                pulse_time: rng.gen_range(0.0..std::f64::consts::TAU),
                ..HotspotState::default()
            })
            .collect();
        let display = caps.display_mode();
        let mut ctl = Self {
            states,
            display,
            active: None,
        };
        ctl.apply_display_mode();
        ctl
    }

    #[inline]
    pub fn state(&self, index: usize) -> Option<&HotspotState> {
        self.states.get(index)
    }

    /// Index of the hotspot currently in the Active phase.
    #[inline]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    #[inline]
    pub fn display_mode(&self) -> DisplayMode {
        self.display
    }

    pub fn set_capabilities(&mut self, caps: PointerCapabilities) {
        let mode = caps.display_mode();
        if mode != self.display {
            log::info!("[hotspot] display mode -> {:?}", mode);
            self.display = mode;
            self.apply_display_mode();
        }
    }

    fn apply_display_mode(&mut self) {
        if self.display == DisplayMode::StaticLabel {
            self.active = None;
            for s in &mut self.states {
                s.phase = Phase::Idle;
                s.label_progress = 1.0;
            }
        } else {
            for s in &mut self.states {
                s.label_progress = if s.phase == Phase::Active { 1.0 } else { 0.0 };
            }
        }
    }

    /// Recompute the responsive dot radius after a viewport change.
    pub fn resize(&mut self, screen: DVec2, tuning: &Tuning) {
        let r = responsive_base_radius(screen, tuning);
        for s in &mut self.states {
            s.base_radius = r;
        }
    }

    /// First hotspot in `probe_order` whose hit region contains `point`.
    pub fn probe(
        &self,
        point: DVec2,
        centers: &[DVec2],
        probe_order: &[usize],
        tuning: &Tuning,
    ) -> Option<usize> {
        probe_order.iter().copied().find(|&i| {
            match (self.states.get(i), centers.get(i)) {
                (Some(s), Some(c)) => c.distance(point) <= s.hit_radius(tuning),
                _ => false,
            }
        })
    }

    /// Per-frame update: advance pulses and timers, then run the bounds test.
    ///
    /// `pointer` is the hover position, or `None` when there is no hovering
    /// pointer (touch, pointer left the scene, drag in progress).
    pub fn update(
        &mut self,
        dt: f64,
        pointer: Option<DVec2>,
        centers: &[DVec2],
        probe_order: &[usize],
        tuning: &Tuning,
    ) -> SmallVec<[Transition; 2]> {
        for s in &mut self.states {
            s.pulse_time = (s.pulse_time + dt * tuning.pulse_speed) % std::f64::consts::TAU;
            if s.rearm.tick(dt) {
                s.activation_fired = false;
            }
        }

        let mut transitions = SmallVec::new();
        if self.display == DisplayMode::HoverExpand {
            let target = pointer.and_then(|p| self.probe(p, centers, probe_order, tuning));
            if target != self.active {
                if let Some(prev) = self.active.take() {
                    if let Some(s) = self.states.get_mut(prev) {
                        s.phase = Phase::Idle;
                    }
                    transitions.push(Transition::Exited(prev));
                }
                if let Some(next) = target {
                    if let Some(s) = self.states.get_mut(next) {
                        s.phase = Phase::Active;
                        self.active = Some(next);
                        transitions.push(Transition::Entered(next));
                    }
                }
            }
            let step = if tuning.label_expand_secs > 0.0 {
                dt / tuning.label_expand_secs
            } else {
                1.0
            };
            for s in &mut self.states {
                let goal = if s.phase == Phase::Active { 1.0 } else { 0.0 };
                s.label_progress = if goal > s.label_progress {
                    (s.label_progress + step).min(goal)
                } else {
                    (s.label_progress - step).max(goal)
                };
            }
        }
        transitions
    }

    /// Fire the hotspot's action through `sink`, at most once per interaction.
    pub fn activate(
        &mut self,
        index: usize,
        obj: &CanonicalObject,
        sink: &mut dyn ActionSink,
        tuning: &Tuning,
    ) -> ActivationOutcome {
        let Some(state) = self.states.get_mut(index) else {
            return ActivationOutcome::NoAction;
        };
        let Some(action) = obj.action.as_ref() else {
            return ActivationOutcome::NoAction;
        };
        if state.activation_fired {
            log::debug!("[hotspot] '{}' activation suppressed", obj.id);
            return ActivationOutcome::Suppressed;
        }
        state.activation_fired = true;
        let result = match action {
            HotspotAction::OpenUrl { url, new_tab } => sink.open_url(url, *new_tab),
            HotspotAction::Navigate { path } => sink.navigate(path),
        };
        match result {
            Ok(()) => {
                log::info!("[action] '{}' -> {}", obj.id, action.target());
                if action.is_same_page() {
                    state.rearm.arm(tuning.same_page_rearm_secs);
                }
                ActivationOutcome::Fired
            }
            Err(e) => {
                log::warn!("[action] '{}' failed: {}", obj.id, e);
                state.activation_fired = false;
                state.rearm.clear();
                ActivationOutcome::Failed(e)
            }
        }
    }

    /// The page regained focus or visibility: every guard re-arms.
    pub fn reset_guards(&mut self) {
        for s in &mut self.states {
            s.activation_fired = false;
            s.rearm.clear();
        }
    }

    /// Force every hotspot back to idle (pointer left the scene).
    pub fn clear_active(&mut self) -> Option<Transition> {
        let prev = self.active.take()?;
        if let Some(s) = self.states.get_mut(prev) {
            s.phase = Phase::Idle;
        }
        Some(Transition::Exited(prev))
    }
}
