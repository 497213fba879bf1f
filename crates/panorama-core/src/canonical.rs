//! Canonical coordinate table.
//!
//! Every hotspot is described once, in the units of the original authoring grid.
//! Objects differ only by data: the same projection, hover and animation code
//! runs for all of them.

use crate::constants::*;
use crate::error::ConfigWarning;
use crate::viewport::ArtworkGeometry;
use fnv::FnvHashMap;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// What happens when a hotspot is activated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HotspotAction {
    /// Open an absolute URL, optionally in a new browsing context.
    OpenUrl {
        url: String,
        #[serde(default = "default_new_tab")]
        new_tab: bool,
    },
    /// Navigate the current page to a site-relative path.
    Navigate { path: String },
}

fn default_new_tab() -> bool {
    true
}

impl HotspotAction {
    /// True when the action replaces the current page instead of opening a new one.
    pub fn is_same_page(&self) -> bool {
        match self {
            HotspotAction::OpenUrl { new_tab, .. } => !*new_tab,
            HotspotAction::Navigate { .. } => true,
        }
    }

    /// Target string used in log lines and notices.
    pub fn target(&self) -> &str {
        match self {
            HotspotAction::OpenUrl { url, .. } => url,
            HotspotAction::Navigate { path } => path,
        }
    }
}

/// Damped rotation played once on hover entry.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WobbleConfig {
    pub duration_secs: f64,
    pub amplitude_rad: f64,
    pub frequency_hz: f64,
    /// Horizontal sway in screen px; 0 keeps the sprite anchored.
    pub offset_px: f64,
}

impl Default for WobbleConfig {
    fn default() -> Self {
        Self {
            duration_secs: WOBBLE_DURATION_SECS,
            amplitude_rad: WOBBLE_AMPLITUDE_RAD,
            frequency_hz: WOBBLE_FREQUENCY_HZ,
            offset_px: WOBBLE_OFFSET_PX,
        }
    }
}

/// Frame stepping driven by panning ("page flip" art).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanStepConfig {
    pub frame_count: usize,
    pub threshold_px: f64,
    pub stop_delay_secs: f64,
}

impl Default for PanStepConfig {
    fn default() -> Self {
        Self {
            frame_count: 8,
            threshold_px: PAN_STEP_THRESHOLD_PX,
            stop_delay_secs: PAN_STEP_STOP_DELAY_SECS,
        }
    }
}

/// Per-object animation behavior. All parts are optional and independent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationProfile {
    /// Playback rate of the looping sprite when idle (1.0 when absent).
    pub base_rate: Option<f64>,
    /// Multiplier applied to `base_rate` while the hotspot is active.
    pub hover_speedup: Option<f64>,
    pub wobble: Option<WobbleConfig>,
    pub pan_steps: Option<PanStepConfig>,
}

impl AnimationProfile {
    pub fn base_rate(&self) -> f64 {
        self.base_rate.unwrap_or(1.0)
    }
}

/// Immutable descriptor of one hotspot in canonical (authoring) units.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CanonicalObject {
    pub id: String,
    pub canonical_x: f64,
    pub canonical_y: f64,
    #[serde(default)]
    pub canonical_width: f64,
    #[serde(default)]
    pub canonical_height: f64,
    #[serde(default)]
    pub scale_multiplier: Option<f64>,
    #[serde(default)]
    pub offset_x: f64,
    #[serde(default)]
    pub offset_y: f64,
    /// Higher values are probed first when hit regions overlap.
    #[serde(default)]
    pub priority: i32,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub action: Option<HotspotAction>,
    #[serde(default)]
    pub animation: AnimationProfile,
}

impl CanonicalObject {
    /// Minimal descriptor with no box, multiplier, offset or action.
    pub fn at(id: impl Into<String>, canonical_x: f64, canonical_y: f64) -> Self {
        Self {
            id: id.into(),
            canonical_x,
            canonical_y,
            canonical_width: 0.0,
            canonical_height: 0.0,
            scale_multiplier: None,
            offset_x: 0.0,
            offset_y: 0.0,
            priority: 0,
            label: None,
            caption: None,
            action: None,
            animation: AnimationProfile::default(),
        }
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.canonical_x, self.canonical_y)
    }

    #[inline]
    pub fn offset(&self) -> DVec2 {
        DVec2::new(self.offset_x, self.offset_y)
    }

    #[inline]
    pub fn canonical_size(&self) -> DVec2 {
        DVec2::new(self.canonical_width, self.canonical_height)
    }

    /// Collect the configuration problems of this single entry.
    pub fn warnings(&self, artwork: &ArtworkGeometry) -> Vec<ConfigWarning> {
        let mut out = Vec::new();
        let x_ok = (0.0..=artwork.original.x).contains(&self.canonical_x);
        let y_ok = (0.0..=artwork.original.y).contains(&self.canonical_y);
        if !x_ok || !y_ok {
            out.push(ConfigWarning::CenterOutOfRange {
                id: self.id.clone(),
                x: self.canonical_x,
                y: self.canonical_y,
                width: artwork.original.x,
                height: artwork.original.y,
            });
        }
        match self.scale_multiplier {
            Some(m) if !(m > 0.0) => out.push(ConfigWarning::InvalidMultiplier {
                id: self.id.clone(),
                multiplier: m,
            }),
            Some(_) => {}
            // Without a multiplier the object is fitted into its canonical box.
            None => {
                if !(self.canonical_width > 0.0 && self.canonical_height > 0.0) {
                    out.push(ConfigWarning::EmptyCanonicalBox {
                        id: self.id.clone(),
                        width: self.canonical_width,
                        height: self.canonical_height,
                    });
                }
            }
        }
        out
    }
}

/// Ordered list of canonical objects with id lookup and hit-probe order.
#[derive(Clone, Debug, Default)]
pub struct CanonicalTable {
    objects: Vec<CanonicalObject>,
    index: FnvHashMap<String, usize>,
    probe_order: Vec<usize>,
    duplicates: Vec<String>,
}

impl CanonicalTable {
    pub fn new(objects: Vec<CanonicalObject>) -> Self {
        let mut index = FnvHashMap::default();
        let mut duplicates = Vec::new();
        for (i, obj) in objects.iter().enumerate() {
            if index.contains_key(&obj.id) {
                duplicates.push(obj.id.clone());
            } else {
                index.insert(obj.id.clone(), i);
            }
        }
        // Stable sort keeps table order among equal priorities.
        let mut probe_order: Vec<usize> = (0..objects.len()).collect();
        probe_order.sort_by(|&a, &b| objects[b].priority.cmp(&objects[a].priority));
        Self {
            objects,
            index,
            probe_order,
            duplicates,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&CanonicalObject> {
        self.objects.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CanonicalObject> {
        self.objects.iter()
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn by_id(&self, id: &str) -> Option<&CanonicalObject> {
        self.index_of(id).and_then(|i| self.objects.get(i))
    }

    /// Indices in hit-test order: priority descending, then table order.
    #[inline]
    pub fn probe_order(&self) -> &[usize] {
        &self.probe_order
    }

    /// Check every entry against the authoring grid.
    pub fn validate(&self, artwork: &ArtworkGeometry) -> Vec<ConfigWarning> {
        let mut out: Vec<ConfigWarning> = self
            .objects
            .iter()
            .flat_map(|o| o.warnings(artwork))
            .collect();
        out.extend(
            self.duplicates
                .iter()
                .map(|id| ConfigWarning::DuplicateId { id: id.clone() }),
        );
        out
    }
}
