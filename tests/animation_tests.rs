// Host-side tests for the animation synchronizer: hover speed-up, wobble and
// pan-driven frame stepping.

mod common;

use common::*;
use glam::DVec2;
use panorama_core::*;

fn hover(h: &mut Harness, at: DVec2) -> Frame {
    mouse(&mut h.scene, PointerPhase::Move, at);
    h.scene.tick(0.016)
}

fn anim(h: &Harness, index: usize) -> AnimationState {
    *h.scene.animations().state(index).expect("animation state")
}

#[test]
fn hover_speeds_up_playback_and_restores_on_exit() {
    let mut obj = spot("capsule", 500.0, 250.0, None);
    obj.animation.base_rate = Some(0.5);
    obj.animation.hover_speedup = Some(4.0);
    let mut h = harness_with(vec![obj], PointerCapabilities::DESKTOP);
    assert_eq!(anim(&h, 0).playback_rate, 0.5);

    let frame = hover(&mut h, CENTER_SPOT);
    assert_eq!(frame.hotspots[0].animation.playback_rate, 2.0);

    hover(&mut h, EMPTY);
    assert_eq!(anim(&h, 0).playback_rate, 0.5);
}

#[test]
fn objects_without_profile_keep_base_rate() {
    let mut h = harness();
    hover(&mut h, CENTER_SPOT);
    assert_eq!(anim(&h, 0).playback_rate, 1.0);
    assert_eq!(anim(&h, 0).rotation, 0.0);
}

#[test]
fn wobble_decays_to_exact_rest() {
    let mut obj = spot("tower", 500.0, 250.0, None);
    obj.animation.wobble = Some(WobbleConfig {
        offset_px: 2.0,
        ..WobbleConfig::default()
    });
    let mut h = harness_with(vec![obj], PointerCapabilities::DESKTOP);

    hover(&mut h, CENTER_SPOT);
    let state = anim(&h, 0);
    assert!(state.is_wobbling());
    assert!(state.rotation != 0.0);
    assert!(state.rotation.abs() <= WOBBLE_AMPLITUDE_RAD);

    // Staying hovered does not restart it; it runs out and lands on zero.
    for _ in 0..60 {
        h.scene.tick(0.016);
    }
    let state = anim(&h, 0);
    assert!(!state.is_wobbling());
    assert_eq!(state.rotation, 0.0);
    assert_eq!(state.sway, DVec2::ZERO);
}

#[test]
fn wobble_restarts_on_every_entry() {
    let mut obj = spot("tower", 500.0, 250.0, None);
    obj.animation.wobble = Some(WobbleConfig::default());
    let mut h = harness_with(vec![obj], PointerCapabilities::DESKTOP);

    hover(&mut h, CENTER_SPOT);
    h.scene.tick(0.5);
    hover(&mut h, EMPTY);
    hover(&mut h, CENTER_SPOT);
    h.scene.tick(0.5);
    // 1s since the first entry but only ~0.5s since the second.
    assert!(anim(&h, 0).is_wobbling());

    h.scene.tick(0.5);
    assert!(!anim(&h, 0).is_wobbling());
    assert_eq!(anim(&h, 0).rotation, 0.0);
}

#[test]
fn panning_steps_frames_and_stops_after_delay() {
    let mut obj = spot("book", 900.0, 450.0, None);
    obj.animation.pan_steps = Some(PanStepConfig {
        frame_count: 3,
        threshold_px: 40.0,
        stop_delay_secs: 0.2,
    });
    let mut h = harness_with(vec![obj], PointerCapabilities::DESKTOP);

    mouse(&mut h.scene, PointerPhase::Down, EMPTY);
    mouse(&mut h.scene, PointerPhase::Move, EMPTY - DVec2::new(30.0, 0.0));
    assert_eq!(anim(&h, 0).frame, 0);
    assert!(!anim(&h, 0).frame_playing);

    mouse(&mut h.scene, PointerPhase::Move, EMPTY - DVec2::new(60.0, 0.0));
    // Leftward motion steps backwards and wraps.
    assert_eq!(anim(&h, 0).frame, 2);
    assert!(anim(&h, 0).frame_playing);

    h.scene.tick(0.1);
    assert!(anim(&h, 0).frame_playing);
    h.scene.tick(0.15);
    let state = anim(&h, 0);
    assert!(!state.frame_playing);
    assert_eq!(state.frame, 2);
}

#[test]
fn pinned_pan_does_not_step_frames() {
    let mut obj = spot("book", 900.0, 450.0, None);
    obj.animation.pan_steps = Some(PanStepConfig::default());
    let mut h = harness_with(vec![obj], PointerCapabilities::DESKTOP);

    // Vertical motion cannot move the origin: there is no vertical overflow.
    mouse(&mut h.scene, PointerPhase::Down, EMPTY);
    mouse(&mut h.scene, PointerPhase::Move, EMPTY - DVec2::new(0.0, 300.0));
    assert_eq!(anim(&h, 0).frame, 0);
    assert!(!anim(&h, 0).frame_playing);
}
