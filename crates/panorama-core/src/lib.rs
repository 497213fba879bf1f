//! Canonical-to-viewport coordinate engine and hotspot interaction state machine
//! for the panorama scene.
//!
//! Nothing in this crate touches a platform API. The web frontend and the native
//! inspection tool feed it pointer events, screen sizes and frame times, and read
//! back [`Frame`]s.

pub mod animation;
pub mod canonical;
pub mod config;
pub mod constants;
pub mod context;
pub mod error;
pub mod hotspot;
pub mod pan;
pub mod scene;
pub mod timer;
pub mod viewport;

pub use animation::*;
pub use canonical::*;
pub use config::*;
pub use constants::*;
pub use context::*;
pub use error::*;
pub use hotspot::*;
pub use pan::*;
pub use scene::*;
pub use timer::*;
pub use viewport::*;
