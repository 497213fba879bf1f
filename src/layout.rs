// Label and dot geometry in scene CSS px. No browser types, so host tests can include it.

/// Axis-aligned box, top-left corner plus size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelBox {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// Smoothstep easing for the label expansion.
#[inline]
pub fn ease(progress: f64) -> f64 {
    let t = progress.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Box for a hotspot label: horizontally centered on the hotspot and sitting
/// `gap` px above its hit circle. Width grows from a pill the height of the
/// label to the full text width as `progress` goes 0..1.
pub fn label_box(
    center: [f64; 2],
    hit_radius: f64,
    text_width: f64,
    progress: f64,
    pad_x: f64,
    height: f64,
    gap: f64,
) -> LabelBox {
    let full = text_width.max(0.0) + 2.0 * pad_x;
    let w = height + (full - height).max(0.0) * ease(progress);
    LabelBox {
        x: center[0] - w * 0.5,
        y: center[1] - hit_radius - gap - height,
        w,
        h: height,
    }
}

/// Keep a box on screen; boxes wider than the screen stay left-aligned.
pub fn clamp_to_screen(b: LabelBox, screen_w: f64, screen_h: f64) -> LabelBox {
    let x = b.x.min(screen_w - b.w).max(0.0);
    let y = b.y.min(screen_h - b.h).max(0.0);
    LabelBox { x, y, ..b }
}

/// Text is drawn only once the pill is wide enough to hold most of it.
#[inline]
pub fn text_visible(progress: f64) -> bool {
    ease(progress) > 0.6
}
