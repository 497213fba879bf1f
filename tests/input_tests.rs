// Host-side tests for pure input, layout and keyboard functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}
mod layout {
    include!("../src/layout.rs");
}
mod keys {
    include!("../src/keys.rs");
}

use input::*;
use keys::*;
use layout::*;
use panorama_core::PointerKind;

#[test]
fn client_coordinates_are_relative_to_canvas() {
    assert_eq!(client_to_scene(150.0, 90.0, 50.0, 40.0), [100.0, 50.0]);
    assert_eq!(client_to_scene(10.0, 10.0, 10.0, 10.0), [0.0, 0.0]);
}

#[test]
fn backing_size_scales_by_dpr_and_never_hits_zero() {
    assert_eq!(backing_size(800.0, 600.0, 2.0), (1600, 1200));
    assert_eq!(backing_size(333.4, 100.0, 1.5), (500, 150));
    assert_eq!(backing_size(0.0, 0.0, 2.0), (1, 1));
    // Garbage ratios fall back to 1.
    assert_eq!(backing_size(640.0, 480.0, f64::NAN), (640, 480));
    assert_eq!(backing_size(640.0, 480.0, 0.0), (640, 480));
}

#[test]
fn pointer_type_maps_to_kind() {
    assert_eq!(pointer_kind("touch"), PointerKind::Touch);
    assert_eq!(pointer_kind("pen"), PointerKind::Pen);
    assert_eq!(pointer_kind("mouse"), PointerKind::Mouse);
    assert_eq!(pointer_kind(""), PointerKind::Mouse);
}

#[test]
fn only_primary_mouse_button_presses() {
    assert!(is_primary_press(PointerKind::Mouse, 0));
    assert!(!is_primary_press(PointerKind::Mouse, 2));
    assert!(is_primary_press(PointerKind::Touch, -1));
    assert!(is_primary_press(PointerKind::Pen, 0));
}

#[test]
fn label_grows_from_pill_to_full_width() {
    let collapsed = label_box([400.0, 300.0], 24.0, 120.0, 0.0, 12.0, 30.0, 10.0);
    assert_eq!(collapsed.w, 30.0);
    assert_eq!(collapsed.x, 385.0);
    assert_eq!(collapsed.y, 300.0 - 24.0 - 10.0 - 30.0);

    let full = label_box([400.0, 300.0], 24.0, 120.0, 1.0, 12.0, 30.0, 10.0);
    assert_eq!(full.w, 144.0);
    assert_eq!(full.x, 400.0 - 72.0);

    let half = label_box([400.0, 300.0], 24.0, 120.0, 0.5, 12.0, 30.0, 10.0);
    assert!(half.w > collapsed.w && half.w < full.w);
}

#[test]
fn label_is_kept_on_screen() {
    let b = label_box([5.0, 20.0], 24.0, 200.0, 1.0, 12.0, 30.0, 10.0);
    let c = clamp_to_screen(b, 800.0, 600.0);
    assert_eq!(c.x, 0.0);
    assert_eq!(c.y, 0.0);
    let b = label_box([790.0, 300.0], 24.0, 200.0, 1.0, 12.0, 30.0, 10.0);
    let c = clamp_to_screen(b, 800.0, 600.0);
    assert_eq!(c.x + c.w, 800.0);
}

#[test]
fn easing_is_monotonic_and_clamped() {
    assert_eq!(ease(-1.0), 0.0);
    assert_eq!(ease(2.0), 1.0);
    let mut prev = 0.0;
    for i in 1..=20 {
        let v = ease(i as f64 / 20.0);
        assert!(v >= prev);
        prev = v;
    }
    assert!(!text_visible(0.1));
    assert!(text_visible(1.0));
}

#[test]
fn shortcuts_map_to_commands() {
    assert_eq!(command_for_key("h"), Some(KeyCommand::ToggleHint));
    assert_eq!(command_for_key("H"), Some(KeyCommand::ToggleHint));
    assert_eq!(command_for_key("m"), Some(KeyCommand::ToggleMute));
    assert_eq!(command_for_key("Enter"), Some(KeyCommand::ToggleFullscreen));
    assert_eq!(command_for_key("Escape"), Some(KeyCommand::ExitFullscreen));
    assert_eq!(command_for_key("x"), None);
    assert!(accepts_modifiers(false, false, false));
    assert!(!accepts_modifiers(true, false, false));
    assert!(!accepts_modifiers(false, true, false));
}
