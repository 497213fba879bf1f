//! Injected collaborators: pointer capabilities, asset sizes, the action sink
//! and the interaction (audio-unlock) context.

use crate::error::ActionError;
use fnv::FnvHashMap;
use glam::DVec2;

/// What the primary input device can do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointerCapabilities {
    pub has_hover: bool,
    pub has_coarse_pointer: bool,
}

impl PointerCapabilities {
    pub const DESKTOP: Self = Self {
        has_hover: true,
        has_coarse_pointer: false,
    };
    pub const TOUCH: Self = Self {
        has_hover: false,
        has_coarse_pointer: true,
    };

    pub fn display_mode(&self) -> DisplayMode {
        if self.has_hover && !self.has_coarse_pointer {
            DisplayMode::HoverExpand
        } else {
            DisplayMode::StaticLabel
        }
    }
}

impl Default for PointerCapabilities {
    fn default() -> Self {
        Self::DESKTOP
    }
}

/// How the active state is presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayMode {
    /// Dot while idle, expanding label while hovered.
    HoverExpand,
    /// Label always shown; activation by direct tap.
    StaticLabel,
}

/// Cursor the host should display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CursorStyle {
    #[default]
    Default,
    Pointer,
    Grabbing,
}

impl CursorStyle {
    pub fn css(&self) -> &'static str {
        match self {
            CursorStyle::Default => "default",
            CursorStyle::Pointer => "pointer",
            CursorStyle::Grabbing => "grabbing",
        }
    }
}

/// Natural pixel sizes of hotspot assets.
pub trait AssetDimensions {
    fn natural_size(&self, id: &str) -> Option<DVec2>;
}

/// Map-backed [`AssetDimensions`]; hosts insert sizes as images finish loading.
#[derive(Clone, Debug, Default)]
pub struct AssetSizes {
    sizes: FnvHashMap<String, DVec2>,
}

impl AssetSizes {
    pub fn insert(&mut self, id: impl Into<String>, size: DVec2) {
        self.sizes.insert(id.into(), size);
    }

    /// Drop a size, e.g. after a failed load, so the object falls back.
    pub fn remove(&mut self, id: &str) {
        self.sizes.remove(id);
    }
}

impl AssetDimensions for AssetSizes {
    fn natural_size(&self, id: &str) -> Option<DVec2> {
        self.sizes.get(id).copied()
    }
}

/// Where activations go.
pub trait ActionSink {
    fn open_url(&mut self, url: &str, new_tab: bool) -> Result<(), ActionError>;
    fn navigate(&mut self, path: &str) -> Result<(), ActionError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionKind {
    Hover,
    Activate,
}

/// Receiver for "user interacted" signals, typically the audio layer.
pub trait InteractionSink {
    fn hotspot_interaction(&mut self, id: &str, kind: InteractionKind, muted: bool);

    /// First user gesture anywhere in the scene.
    fn user_gesture(&mut self) {}
}

/// Interaction flags that used to be globals, plus the sink they feed.
#[derive(Default)]
pub struct InteractionContext {
    sink: Option<Box<dyn InteractionSink>>,
    muted: bool,
    unlocked: bool,
}

impl InteractionContext {
    pub fn new(sink: Box<dyn InteractionSink>) -> Self {
        Self {
            sink: Some(sink),
            muted: false,
            unlocked: false,
        }
    }

    /// Context with no listener; used by tools and tests of the geometry engine.
    pub fn detached() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn toggle_muted(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    #[inline]
    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    /// Record a user gesture; the sink hears about the first one only.
    pub fn gesture(&mut self) {
        if self.unlocked {
            return;
        }
        self.unlocked = true;
        if let Some(s) = self.sink.as_mut() {
            s.user_gesture();
        }
    }

    pub fn notify(&mut self, id: &str, kind: InteractionKind) {
        let muted = self.muted;
        if let Some(s) = self.sink.as_mut() {
            s.hotspot_interaction(id, kind, muted);
        }
    }
}
