//! Scene file support.
//!
//! A scene file is JSON with three sections: the artwork dimensions, optional
//! tuning overrides, and the ordered canonical hotspot table.

use crate::canonical::{CanonicalObject, CanonicalTable};
use crate::constants::*;
use crate::error::ConfigError;
use crate::viewport::ArtworkGeometry;
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Scene bundled with the web frontend.
pub static DEFAULT_SCENE_JSON: &str = include_str!("../data/scene.json");

/// Artwork section of the scene file.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArtworkConfig {
    pub original_width: f64,
    pub original_height: f64,
    /// Pixel size of the loaded background; defaults to the authoring size.
    #[serde(default)]
    pub natural_width: Option<f64>,
    #[serde(default)]
    pub natural_height: Option<f64>,
}

impl Default for ArtworkConfig {
    fn default() -> Self {
        Self {
            original_width: DEFAULT_ORIGINAL_WIDTH,
            original_height: DEFAULT_ORIGINAL_HEIGHT,
            natural_width: None,
            natural_height: None,
        }
    }
}

impl ArtworkConfig {
    pub fn geometry(&self) -> Result<ArtworkGeometry, ConfigError> {
        let original = DVec2::new(self.original_width, self.original_height);
        let natural = DVec2::new(
            self.natural_width.unwrap_or(self.original_width),
            self.natural_height.unwrap_or(self.original_height),
        );
        ArtworkGeometry::new(original, natural)
    }
}

/// Interaction and animation tuning. Every field has a default.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub pulse_speed: f64,
    pub pulse_ring_phase_step: f64,
    pub pulse_expansion_px: f64,
    pub hit_tolerance_px: f64,
    pub base_radius_fraction: f64,
    pub base_radius_min_px: f64,
    pub base_radius_max_px: f64,
    pub label_expand_secs: f64,
    pub same_page_rearm_secs: f64,
    pub click_slop_px: f64,
    pub hint_auto_hide_secs: f64,
    pub pulse_seed: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            pulse_speed: PULSE_SPEED,
            pulse_ring_phase_step: PULSE_RING_PHASE_STEP,
            pulse_expansion_px: PULSE_EXPANSION_PX,
            hit_tolerance_px: HIT_TOLERANCE_PX,
            base_radius_fraction: BASE_RADIUS_FRACTION,
            base_radius_min_px: BASE_RADIUS_MIN_PX,
            base_radius_max_px: BASE_RADIUS_MAX_PX,
            label_expand_secs: LABEL_EXPAND_SECS,
            same_page_rearm_secs: SAME_PAGE_REARM_SECS,
            click_slop_px: CLICK_SLOP_PX,
            hint_auto_hide_secs: HINT_AUTO_HIDE_SECS,
            pulse_seed: PULSE_JITTER_SEED,
        }
    }
}

/// Full scene file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    #[serde(default)]
    pub artwork: ArtworkConfig,
    #[serde(default)]
    pub tuning: Tuning,
    #[serde(default)]
    pub hotspots: Vec<CanonicalObject>,
}

impl SceneConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let cfg: SceneConfig = serde_json::from_str(text)?;
        // Surface bad artwork sizes at load time rather than at first resize.
        cfg.artwork.geometry()?;
        log::info!(
            "[config] loaded {} hotspots on a {}x{} grid",
            cfg.hotspots.len(),
            cfg.artwork.original_width,
            cfg.artwork.original_height
        );
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// The bundled scene.
    pub fn bundled() -> Result<Self, ConfigError> {
        Self::from_json(DEFAULT_SCENE_JSON)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn table(&self) -> CanonicalTable {
        CanonicalTable::new(self.hotspots.clone())
    }
}
