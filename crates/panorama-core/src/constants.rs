// Shared geometry and interaction tuning constants used by the web frontend and
// the native inspection tool. Every value here is a default; a scene file may
// override most of them through its `tuning` section.

// Authoring grid of the bundled panorama
pub const DEFAULT_ORIGINAL_WIDTH: f64 = 5333.0;
pub const DEFAULT_ORIGINAL_HEIGHT: f64 = 3558.0;

// Scale sanity
pub const NEAR_ZERO_SCALE: f64 = 1e-3; // cover scales below this are reported as config warnings
pub const NATIVE_SIZE_EPSILON: f64 = 1e-9; // screen == natural size comparison tolerance
pub const MIN_SCREEN_DIM: f64 = 1.0; // zero-sized viewports are treated as 1px

// Idle pulse (breathing dot)
pub const PULSE_RING_COUNT: usize = 4;
pub const PULSE_SPEED: f64 = 2.4; // radians of pulse phase per second
pub const PULSE_RING_PHASE_STEP: f64 = 0.65; // phase lag between consecutive rings
pub const PULSE_EXPANSION_PX: f64 = 10.0; // max ring growth over the base radius
pub const PULSE_RING_DAMPING: [f64; PULSE_RING_COUNT] = [1.0, 0.72, 0.48, 0.26];
pub const PULSE_ALPHA_MAX: f64 = 0.85;

// Responsive dot radius
pub const BASE_RADIUS_FRACTION: f64 = 0.011; // of min(screen w, h)
pub const BASE_RADIUS_MIN_PX: f64 = 6.0;
pub const BASE_RADIUS_MAX_PX: f64 = 14.0;

// Hit testing
pub const HIT_TOLERANCE_PX: f64 = 8.0;
pub const CLICK_SLOP_PX: f64 = 6.0; // pointer travel beyond this turns a press into a drag

// Active label
pub const LABEL_EXPAND_SECS: f64 = 0.22;

// Guard re-arm after a same-page redirect
pub const SAME_PAGE_REARM_SECS: f64 = 2.0;

// Animation synchronizer
pub const WOBBLE_DURATION_SECS: f64 = 0.9;
pub const WOBBLE_AMPLITUDE_RAD: f64 = 0.12;
pub const WOBBLE_FREQUENCY_HZ: f64 = 4.5;
pub const WOBBLE_OFFSET_PX: f64 = 0.0;
pub const PAN_STEP_THRESHOLD_PX: f64 = 40.0;
pub const PAN_STEP_STOP_DELAY_SECS: f64 = 0.18;

// Instruction hint
pub const HINT_AUTO_HIDE_SECS: f64 = 6.0;

// Pulse phase jitter
pub const PULSE_JITTER_SEED: u64 = 0x5EED_D07;
