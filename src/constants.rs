// Web frontend constants: DOM hooks and overlay styling.
// Geometry and interaction tuning live in `panorama_core::constants`.

// DOM element ids the host page provides
pub const CANVAS_ID: &str = "scene-canvas";
pub const HINT_ID: &str = "hint-overlay";
pub const HINT_CLOSE_ID: &str = "hint-close";
pub const NOTICE_ID: &str = "notice";
pub const SPRITE_ATTR: &str = "data-sprite"; // value is the hotspot id
pub const OVERLAY_ATTR: &str = "data-overlay"; // controls laid over the scene

// Custom DOM event announcing hotspot interactions to the audio layer
pub const INTERACTION_EVENT: &str = "hotspot-interaction";

// Blocked-popup notice stays up this long
pub const NOTICE_AUTO_HIDE_SECS: f64 = 5.0;

// Frame time clamp so a backgrounded tab does not produce one huge step
pub const MAX_FRAME_DT_SECS: f64 = 0.1;

// Overlay palette
pub const DOT_COLOR: &str = "255, 248, 231"; // rgb triplet, alpha applied per ring
pub const OUTLINE_COLOR: &str = "rgba(255, 248, 231, 0.9)";
pub const LABEL_BG: &str = "rgba(12, 16, 28, 0.82)";
pub const LABEL_FG: &str = "#fff8e7";
pub const CAPTION_FG: &str = "rgba(255, 248, 231, 0.72)";

// Label layout (CSS px)
pub const LABEL_FONT: &str = "600 15px system-ui, sans-serif";
pub const CAPTION_FONT: &str = "13px system-ui, sans-serif";
pub const LABEL_PAD_X: f64 = 12.0;
pub const LABEL_HEIGHT: f64 = 30.0;
pub const CAPTION_HEIGHT: f64 = 20.0;
pub const LABEL_GAP: f64 = 10.0;
pub const DOT_CORE_RADIUS_FRACTION: f64 = 0.45;
