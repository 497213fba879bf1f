//! Animation synchronizer: couples hover and pan state to sprite playback.
//!
//! Three independent behaviors, each enabled per object by its
//! [`AnimationProfile`](crate::canonical::AnimationProfile):
//! - hover speed-up of a looping sprite, applied and reverted instantly;
//! - a one-shot decayed wobble started on every hover entry;
//! - frame stepping driven by accumulated pan distance.

use crate::canonical::{CanonicalTable, PanStepConfig, WobbleConfig};
use crate::hotspot::Transition;
use crate::timer::Countdown;
use glam::DVec2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Wobble {
    clock: f64,
    running: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct PanSteps {
    accum: DVec2,
    frame: usize,
    stop: Countdown,
}

/// Playback values a renderer applies to one object's sprite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationState {
    pub playback_rate: f64,
    /// Rotation in radians; exactly 0 whenever no wobble is running.
    pub rotation: f64,
    /// Small positional sway that accompanies the wobble.
    pub sway: DVec2,
    pub frame: usize,
    /// False once the pan stop-timer has expired.
    pub frame_playing: bool,
    wobble: Wobble,
    steps: PanSteps,
}

impl AnimationState {
    fn new(base_rate: f64) -> Self {
        Self {
            playback_rate: base_rate,
            rotation: 0.0,
            sway: DVec2::ZERO,
            frame: 0,
            frame_playing: false,
            wobble: Wobble::default(),
            steps: PanSteps::default(),
        }
    }

    #[inline]
    pub fn is_wobbling(&self) -> bool {
        self.wobble.running
    }

    fn restart_wobble(&mut self) {
        self.wobble = Wobble {
            clock: 0.0,
            running: true,
        };
        self.rotation = 0.0;
        self.sway = DVec2::ZERO;
    }

    fn advance_wobble(&mut self, dt: f64, cfg: &WobbleConfig) {
        if !self.wobble.running {
            return;
        }
        self.wobble.clock += dt;
        let progress = if cfg.duration_secs > 0.0 {
            self.wobble.clock / cfg.duration_secs
        } else {
            1.0
        };
        if progress >= 1.0 {
            self.wobble.running = false;
            self.rotation = 0.0;
            self.sway = DVec2::ZERO;
            return;
        }
        let decay = 1.0 - progress * progress;
        let wave = (std::f64::consts::TAU * cfg.frequency_hz * self.wobble.clock).sin();
        self.rotation = cfg.amplitude_rad * wave * decay;
        self.sway = DVec2::new(cfg.offset_px * wave * decay, 0.0);
    }

    fn accumulate_pan(&mut self, delta: DVec2, cfg: &PanStepConfig) {
        if cfg.frame_count == 0 {
            return;
        }
        let steps = &mut self.steps;
        steps.accum += delta;
        let dominant = if steps.accum.x.abs() >= steps.accum.y.abs() {
            steps.accum.x
        } else {
            steps.accum.y
        };
        if dominant.abs() <= cfg.threshold_px {
            return;
        }
        let dir: isize = if dominant > 0.0 { 1 } else { -1 };
        steps.frame = (steps.frame as isize + dir).rem_euclid(cfg.frame_count as isize) as usize;
        steps.accum = DVec2::ZERO;
        steps.stop.arm(cfg.stop_delay_secs);
        self.frame = steps.frame;
        self.frame_playing = true;
    }

    fn advance_steps(&mut self, dt: f64) {
        if self.steps.stop.tick(dt) {
            self.frame_playing = false;
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AnimationSynchronizer {
    states: Vec<AnimationState>,
}

impl AnimationSynchronizer {
    pub fn new(table: &CanonicalTable) -> Self {
        Self {
            states: table
                .iter()
                .map(|o| AnimationState::new(o.animation.base_rate()))
                .collect(),
        }
    }

    #[inline]
    pub fn state(&self, index: usize) -> Option<&AnimationState> {
        self.states.get(index)
    }

    /// React to hotspot phase changes from the current frame.
    pub fn on_transition(&mut self, transition: Transition, table: &CanonicalTable) {
        let (index, entered) = match transition {
            Transition::Entered(i) => (i, true),
            Transition::Exited(i) => (i, false),
        };
        let (Some(obj), Some(state)) = (table.get(index), self.states.get_mut(index)) else {
            return;
        };
        let profile = &obj.animation;
        state.playback_rate = match (entered, profile.hover_speedup) {
            (true, Some(factor)) => profile.base_rate() * factor,
            _ => profile.base_rate(),
        };
        if entered && profile.wobble.is_some() {
            log::debug!("[anim] '{}' wobble restart", obj.id);
            state.restart_wobble();
        }
    }

    /// Feed the actual origin movement of a pan step.
    pub fn on_pan(&mut self, delta: DVec2, table: &CanonicalTable) {
        if delta == DVec2::ZERO {
            return;
        }
        for (obj, state) in table.iter().zip(self.states.iter_mut()) {
            if let Some(cfg) = obj.animation.pan_steps.as_ref() {
                state.accumulate_pan(delta, cfg);
            }
        }
    }

    /// Advance wobble clocks and pan stop-timers.
    pub fn tick(&mut self, dt: f64, table: &CanonicalTable) {
        for (obj, state) in table.iter().zip(self.states.iter_mut()) {
            if let Some(cfg) = obj.animation.wobble.as_ref() {
                state.advance_wobble(dt, cfg);
            }
            state.advance_steps(dt);
        }
    }
}
