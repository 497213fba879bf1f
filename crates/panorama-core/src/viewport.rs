//! Viewport transform: cover-fit scale, clamped origin, canonical ↔ screen.
//!
//! `ViewportState` is a value. Resizes and drags build a fresh state from
//! scratch with [`ViewportState::compute`] and swap it in, so readers never see
//! a half-updated origin. All projection helpers are pure functions of the
//! state they are called on.

use crate::canonical::CanonicalObject;
use crate::constants::{MIN_SCREEN_DIM, NATIVE_SIZE_EPSILON, NEAR_ZERO_SCALE};
use crate::error::{ConfigError, ConfigWarning};
use glam::DVec2;

/// Artwork dimensions.
///
/// `original` is the authoring grid every canonical coordinate is expressed in.
/// `natural` is the pixel size of the background asset actually loaded, which
/// may differ after re-encoding. Cover scale is computed against `natural`;
/// canonical normalization always divides by `original`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArtworkGeometry {
    pub original: DVec2,
    pub natural: DVec2,
}

impl ArtworkGeometry {
    pub fn new(original: DVec2, natural: DVec2) -> Result<Self, ConfigError> {
        for size in [original, natural] {
            if !(size.x > 0.0 && size.y > 0.0 && size.is_finite()) {
                return Err(ConfigError::InvalidArtwork {
                    width: size.x,
                    height: size.y,
                });
            }
        }
        Ok(Self { original, natural })
    }

    /// Artwork whose loaded background matches the authoring grid.
    pub fn uniform(original: DVec2) -> Result<Self, ConfigError> {
        Self::new(original, original)
    }
}

/// Where and how large an object is drawn on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Screen-space center, including the object's fine-tune offset.
    pub center: DVec2,
    /// Uniform scale applied to the object's natural asset size.
    pub scale: f64,
    /// True when the object fell back to the background's own transform.
    pub fallback: bool,
}

/// Scale that makes the artwork cover the whole screen with no margins.
///
/// Snaps to exactly 1.0 when the screen matches the artwork's natural pixel size.
pub fn cover_scale(natural: DVec2, screen: DVec2) -> f64 {
    if (screen - natural).abs().max_element() < NATIVE_SIZE_EPSILON {
        return 1.0;
    }
    (screen.x / natural.x).max(screen.y / natural.y)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    pub artwork: ArtworkGeometry,
    pub screen: DVec2,
    pub cover_scale: f64,
    /// Natural artwork size times `cover_scale`.
    pub displayed: DVec2,
    /// Artwork center in screen space.
    pub origin: DVec2,
    pub is_dragging: bool,
    /// Pan offset from the screen center, already clamped.
    pub drag_offset: DVec2,
}

impl ViewportState {
    /// Recompute the whole state from its inputs.
    pub fn compute(
        artwork: ArtworkGeometry,
        screen: DVec2,
        drag_offset: DVec2,
        is_dragging: bool,
    ) -> Self {
        let screen = screen.max(DVec2::splat(MIN_SCREEN_DIM));
        let scale = cover_scale(artwork.natural, screen);
        let displayed = artwork.natural * scale;
        let half_overflow = (displayed - screen).max(DVec2::ZERO) * 0.5;
        let drag_offset = drag_offset.clamp(-half_overflow, half_overflow);
        Self {
            artwork,
            screen,
            cover_scale: scale,
            displayed,
            origin: screen * 0.5 + drag_offset,
            is_dragging,
            drag_offset,
        }
    }

    /// Centered viewport with no pan.
    pub fn centered(artwork: ArtworkGeometry, screen: DVec2) -> Self {
        Self::compute(artwork, screen, DVec2::ZERO, false)
    }

    /// Same pan, new screen size; the offset is re-clamped against the new scale.
    pub fn resized(&self, screen: DVec2) -> Self {
        Self::compute(self.artwork, screen, self.drag_offset, self.is_dragging)
    }

    /// Same screen, new pan offset.
    pub fn with_drag(&self, drag_offset: DVec2, is_dragging: bool) -> Self {
        Self::compute(self.artwork, self.screen, drag_offset, is_dragging)
    }

    #[inline]
    pub fn screen_center(&self) -> DVec2 {
        self.screen * 0.5
    }

    /// How far the displayed artwork extends past the screen on each axis.
    #[inline]
    pub fn overflow(&self) -> DVec2 {
        (self.displayed - self.screen).max(DVec2::ZERO)
    }

    /// Inclusive range the origin may occupy without revealing empty space.
    pub fn origin_bounds(&self) -> (DVec2, DVec2) {
        let half = self.overflow() * 0.5;
        let c = self.screen_center();
        (c - half, c + half)
    }

    /// Top-left corner of the displayed artwork in screen space.
    #[inline]
    pub fn artwork_top_left(&self) -> DVec2 {
        self.origin - self.displayed * 0.5
    }

    /// Screen px per canonical unit.
    #[inline]
    pub fn canonical_to_screen_ratio(&self) -> DVec2 {
        self.displayed / self.artwork.original
    }

    /// Canonical point to screen point. Offsets are not applied here.
    #[inline]
    pub fn project(&self, canonical: DVec2) -> DVec2 {
        self.artwork_top_left() + (canonical / self.artwork.original) * self.displayed
    }

    /// Screen point to canonical point; inverse of [`Self::project`].
    #[inline]
    pub fn unproject(&self, screen: DVec2) -> DVec2 {
        (screen - self.artwork_top_left()) / self.displayed * self.artwork.original
    }

    /// Transform used by the background itself and by objects without config.
    pub fn background_placement(&self) -> Placement {
        Placement {
            center: self.origin,
            scale: self.cover_scale,
            fallback: true,
        }
    }

    /// Screen placement of a canonical object.
    ///
    /// `asset_size` is the natural pixel size of the object's loaded image; it is
    /// only consulted when the object has no scale multiplier. When neither a
    /// multiplier nor a usable asset/box pair is available, the object keeps its
    /// canonical position but takes the background's scale.
    pub fn place(&self, obj: &CanonicalObject, asset_size: Option<DVec2>) -> Placement {
        let center = self.project(obj.center()) + obj.offset();
        if let Some(m) = obj.scale_multiplier.filter(|m| *m > 0.0) {
            return Placement {
                center,
                scale: m * self.cover_scale,
                fallback: false,
            };
        }
        let boxed = obj.canonical_size();
        match asset_size {
            Some(asset) if asset.min_element() > 0.0 && boxed.min_element() > 0.0 => {
                let fit = (boxed / asset).min_element();
                // Canonical units per asset px -> screen px per asset px.
                let ratio = self.canonical_to_screen_ratio();
                Placement {
                    center,
                    scale: fit * ratio.x.min(ratio.y),
                    fallback: false,
                }
            }
            _ => Placement {
                center,
                scale: self.cover_scale,
                fallback: true,
            },
        }
    }

    /// Report degenerate scales; the caller logs and carries on.
    pub fn check(&self) -> Option<ConfigWarning> {
        (self.cover_scale < NEAR_ZERO_SCALE).then(|| ConfigWarning::NearZeroScale {
            scale: self.cover_scale,
            width: self.screen.x,
            height: self.screen.y,
        })
    }
}
