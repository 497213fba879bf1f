// Host-side tests for the viewport transform: cover scale, projection and the
// clamped pan origin.

use glam::DVec2;
use panorama_core::*;

const EPS: f64 = 1e-9;

fn artwork() -> ArtworkGeometry {
    ArtworkGeometry::new(DVec2::new(5333.0, 3558.0), DVec2::new(1600.0, 1067.0))
        .expect("valid artwork")
}

fn approx(a: DVec2, b: DVec2, eps: f64) -> bool {
    (a - b).abs().max_element() <= eps
}

const SCREENS: [(f64, f64); 7] = [
    (1920.0, 1080.0),
    (1280.0, 800.0),
    (390.0, 844.0),
    (3840.0, 1200.0),
    (800.0, 2400.0),
    (1600.0, 1067.0),
    (1.0, 1.0),
];

#[test]
fn cover_scale_matches_worked_scenario() {
    let vp = ViewportState::centered(artwork(), DVec2::new(1920.0, 1080.0));
    assert!((vp.cover_scale - 1.2).abs() < EPS);
    assert!(approx(vp.displayed, DVec2::new(1920.0, 1280.4), 1e-6));

    let p = vp.project(DVec2::new(2666.5, 1630.5));
    let expected_x = vp.origin.x - vp.displayed.x / 2.0 + (2666.5 / 5333.0) * vp.displayed.x;
    let expected_y = vp.origin.y - vp.displayed.y / 2.0 + (1630.5 / 3558.0) * vp.displayed.y;
    assert!((p.x - expected_x).abs() < 1e-6);
    assert!((p.y - expected_y).abs() < 1e-6);
    // The horizontal midpoint of the grid lands on the screen center.
    assert!((p.x - 960.0).abs() < 1e-6);
}

#[test]
fn cover_never_letterboxes() {
    for (w, h) in SCREENS {
        let screen = DVec2::new(w, h);
        let vp = ViewportState::centered(artwork(), screen);
        assert!(vp.displayed.x >= screen.x - 1e-6, "{w}x{h} letterboxed horizontally");
        assert!(vp.displayed.y >= screen.y - 1e-6, "{w}x{h} letterboxed vertically");
        // One axis fits exactly; cover never over-scales both.
        let fits = (vp.displayed.x - screen.x).abs() < 1e-6 || (vp.displayed.y - screen.y).abs() < 1e-6;
        assert!(fits, "{w}x{h} overscaled");
    }
}

#[test]
fn cover_scale_snaps_to_one_at_native_size() {
    assert_eq!(cover_scale(DVec2::new(1600.0, 1067.0), DVec2::new(1600.0, 1067.0)), 1.0);
    let vp = ViewportState::centered(artwork(), DVec2::new(1600.0, 1067.0));
    assert_eq!(vp.cover_scale, 1.0);
    assert_eq!(vp.overflow(), DVec2::ZERO);
}

#[test]
fn project_and_unproject_round_trip() {
    let points = [
        DVec2::ZERO,
        DVec2::new(5333.0, 3558.0),
        DVec2::new(2666.5, 1630.5),
        DVec2::new(120.0, 3400.0),
    ];
    for (w, h) in SCREENS {
        let base = ViewportState::centered(artwork(), DVec2::new(w, h));
        let vp = base.with_drag(DVec2::new(-37.0, 81.0), false);
        for c in points {
            let back = vp.unproject(vp.project(c));
            assert!(approx(back, c, 1e-6), "{w}x{h}: {c:?} -> {back:?}");
        }
    }
}

#[test]
fn origin_stays_within_bounds_for_any_drag() {
    let drags = [
        DVec2::new(10_000.0, 10_000.0),
        DVec2::new(-10_000.0, 3.0),
        DVec2::new(0.0, -10_000.0),
        DVec2::new(25.0, -25.0),
    ];
    for (w, h) in SCREENS {
        let base = ViewportState::centered(artwork(), DVec2::new(w, h));
        for d in drags {
            let vp = base.with_drag(d, true);
            let (lo, hi) = vp.origin_bounds();
            assert!(vp.origin.cmpge(lo - EPS).all() && vp.origin.cmple(hi + EPS).all());
            // The artwork still covers every screen edge.
            let tl = vp.artwork_top_left();
            let br = tl + vp.displayed;
            assert!(tl.x <= 1e-6 && tl.y <= 1e-6, "{w}x{h} {d:?}: gap at top/left");
            assert!(br.x >= vp.screen.x - 1e-6 && br.y >= vp.screen.y - 1e-6);
        }
    }
}

#[test]
fn drag_on_axis_without_overflow_is_pinned() {
    // 1920x1080: width fits exactly, so only vertical panning is possible.
    let vp = ViewportState::centered(artwork(), DVec2::new(1920.0, 1080.0))
        .with_drag(DVec2::new(300.0, 50.0), true);
    assert!(vp.drag_offset.x.abs() < 1e-9);
    assert!((vp.drag_offset.y - 50.0).abs() < EPS);
    let (lo, hi) = vp.origin_bounds();
    assert!((hi.y - lo.y - 200.4).abs() < 1e-6);
}

#[test]
fn resize_reclamps_offset_and_is_idempotent() {
    let wide = ViewportState::centered(artwork(), DVec2::new(390.0, 844.0))
        .with_drag(DVec2::new(-400.0, 0.0), false);
    assert!(wide.drag_offset.x < -300.0);

    let resized = wide.resized(DVec2::new(1280.0, 800.0));
    let (lo, hi) = resized.origin_bounds();
    assert!(resized.origin.cmpge(lo - EPS).all() && resized.origin.cmple(hi + EPS).all());

    let again = resized.resized(DVec2::new(1280.0, 800.0));
    assert_eq!(resized, again);
}

#[test]
fn degenerate_screen_is_treated_as_one_pixel() {
    let vp = ViewportState::centered(artwork(), DVec2::ZERO);
    assert_eq!(vp.screen, DVec2::ONE);
    assert!(vp.cover_scale.is_finite() && vp.cover_scale > 0.0);
    assert!(vp.check().is_some(), "tiny viewport should warn about near-zero scale");
}

#[test]
fn invalid_artwork_is_rejected() {
    assert!(ArtworkGeometry::new(DVec2::new(0.0, 10.0), DVec2::ONE).is_err());
    assert!(ArtworkGeometry::uniform(DVec2::new(f64::NAN, 10.0)).is_err());
    assert!(ArtworkGeometry::uniform(DVec2::new(100.0, 50.0)).is_ok());
}

#[test]
fn placement_uses_multiplier_then_box_fit_then_fallback() {
    let vp = ViewportState::centered(artwork(), DVec2::new(1920.0, 1080.0));

    let mut with_mult = CanonicalObject::at("tower", 2666.5, 1630.5);
    with_mult.scale_multiplier = Some(0.9);
    with_mult.offset_y = -12.0;
    let p = vp.place(&with_mult, Some(DVec2::new(10.0, 10.0)));
    assert!((p.scale - 0.9 * 1.2).abs() < EPS);
    assert!(!p.fallback);
    let expected = vp.project(DVec2::new(2666.5, 1630.5)) + DVec2::new(0.0, -12.0);
    assert!(approx(p.center, expected, 1e-9));

    let mut boxed = CanonicalObject::at("sign", 1000.0, 1000.0);
    boxed.canonical_width = 400.0;
    boxed.canonical_height = 200.0;
    let p = vp.place(&boxed, Some(DVec2::new(200.0, 200.0)));
    let ratio = vp.canonical_to_screen_ratio();
    assert!((p.scale - 1.0 * ratio.x.min(ratio.y)).abs() < EPS);
    assert!(!p.fallback);

    let p = vp.place(&boxed, None);
    assert!(p.fallback);
    assert_eq!(p.scale, vp.cover_scale);
}

#[test]
fn glued_point_moves_with_origin() {
    let base = ViewportState::centered(artwork(), DVec2::new(1280.0, 800.0));
    let obj = CanonicalObject::at("x", 4000.0, 900.0);
    let before = base.place(&obj, None).center;
    let dragged = base.with_drag(DVec2::new(-60.0, 20.0), true);
    let after = dragged.place(&obj, None).center;
    assert!(approx(after - before, dragged.origin - base.origin, 1e-9));
}
