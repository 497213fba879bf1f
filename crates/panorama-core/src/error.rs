//! Error and warning types for scene configuration and hotspot actions.
//!
//! Nothing here aborts the scene. `ConfigError` only stops a table from being
//! loaded; `ConfigWarning` values are collected and logged while the engine keeps
//! running with best-effort geometry; `ActionError` rolls back the activation
//! guard so the user can retry.

use thiserror::Error;

/// Errors raised while loading a scene file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// I/O error while reading the scene file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Artwork dimensions that cannot be normalized against
    #[error("Invalid artwork size {width}x{height}")]
    InvalidArtwork {
        /// Configured width
        width: f64,
        /// Configured height
        height: f64,
    },
}

/// Non-fatal configuration problems.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigWarning {
    #[error("hotspot '{id}' center ({x}, {y}) lies outside the {width}x{height} authoring grid")]
    CenterOutOfRange {
        id: String,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },

    #[error("hotspot '{id}' has a non-positive canonical box {width}x{height}")]
    EmptyCanonicalBox { id: String, width: f64, height: f64 },

    #[error("hotspot '{id}' has a non-positive scale multiplier {multiplier}")]
    InvalidMultiplier { id: String, multiplier: f64 },

    #[error("hotspot id '{id}' appears more than once; only the first entry is reachable by id")]
    DuplicateId { id: String },

    #[error("cover scale {scale} is near zero for a {width}x{height} viewport")]
    NearZeroScale { scale: f64, width: f64, height: f64 },
}

/// Failures reported by an [`crate::ActionSink`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// The browser refused to open a new window or tab.
    #[error("popup blocked for {url}")]
    Blocked { url: String },

    /// The host has no way to perform the action.
    #[error("action unavailable: {0}")]
    Unavailable(String),
}
