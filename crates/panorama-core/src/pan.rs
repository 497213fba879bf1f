//! Pan/drag controller and the normalized pointer stream it consumes.
//!
//! Panning is directly pointer-coupled: there is no velocity, so releasing the
//! pointer stops the artwork exactly where it is.

use crate::viewport::ViewportState;
use glam::DVec2;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
    Pen,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    Cancel,
}

/// One pointer sample in CSS px relative to the scene's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub kind: PointerKind,
    pub pointer_id: i32,
    pub position: DVec2,
}

impl PointerEvent {
    pub fn new(phase: PointerPhase, kind: PointerKind, pointer_id: i32, position: DVec2) -> Self {
        Self {
            phase,
            kind,
            pointer_id,
            position,
        }
    }

    pub fn mouse(phase: PointerPhase, position: DVec2) -> Self {
        Self::new(phase, PointerKind::Mouse, 1, position)
    }

    pub fn touch(phase: PointerPhase, pointer_id: i32, position: DVec2) -> Self {
        Self::new(phase, PointerKind::Touch, pointer_id, position)
    }
}

/// Ephemeral record of an in-progress drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub pointer_id: i32,
    pub start_pointer: DVec2,
    pub start_offset: DVec2,
}

impl DragSession {
    /// Pan offset for the current pointer position, before clamping.
    #[inline]
    pub fn offset_for(&self, pointer: DVec2) -> DVec2 {
        self.start_offset + (pointer - self.start_pointer)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanState {
    Idle,
    Dragging,
}

/// Result of feeding one pointer event to the controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PanUpdate {
    Ignored,
    Started,
    /// New unclamped pan offset; the viewport clamps it.
    Moved(DVec2),
    Ended,
    Cancelled,
}

#[derive(Clone, Debug, Default)]
pub struct PanController {
    session: Option<DragSession>,
    touches: SmallVec<[i32; 4]>,
}

impl PanController {
    pub fn state(&self) -> PanState {
        if self.session.is_some() {
            PanState::Dragging
        } else {
            PanState::Idle
        }
    }

    #[inline]
    pub fn touch_count(&self) -> usize {
        self.touches.len()
    }

    /// Handle a pointer-down. `over_interactive` must be the result of probing
    /// every hotspot and overlay at the event position; a hit never starts a drag.
    pub fn pointer_down(
        &mut self,
        ev: &PointerEvent,
        viewport: &ViewportState,
        over_interactive: bool,
    ) -> PanUpdate {
        if ev.kind == PointerKind::Touch && !self.touches.contains(&ev.pointer_id) {
            self.touches.push(ev.pointer_id);
        }
        if self.touches.len() > 1 {
            // Multi-touch never pans and kills any drag already running.
            return if self.session.take().is_some() {
                log::debug!("[pan] multi-touch cancelled drag");
                PanUpdate::Cancelled
            } else {
                PanUpdate::Ignored
            };
        }
        if over_interactive || self.session.is_some() {
            return PanUpdate::Ignored;
        }
        self.session = Some(DragSession {
            pointer_id: ev.pointer_id,
            start_pointer: ev.position,
            start_offset: viewport.drag_offset,
        });
        PanUpdate::Started
    }

    pub fn pointer_move(&mut self, ev: &PointerEvent) -> PanUpdate {
        match &self.session {
            Some(s) if s.pointer_id == ev.pointer_id => PanUpdate::Moved(s.offset_for(ev.position)),
            _ => PanUpdate::Ignored,
        }
    }

    pub fn pointer_up(&mut self, ev: &PointerEvent) -> PanUpdate {
        self.release_touch(ev);
        match &self.session {
            Some(s) if s.pointer_id == ev.pointer_id => {
                self.session = None;
                PanUpdate::Ended
            }
            _ => PanUpdate::Ignored,
        }
    }

    pub fn pointer_cancel(&mut self, ev: &PointerEvent) -> PanUpdate {
        self.release_touch(ev);
        match &self.session {
            Some(s) if s.pointer_id == ev.pointer_id => {
                self.session = None;
                PanUpdate::Cancelled
            }
            _ => PanUpdate::Ignored,
        }
    }

    /// Drop the session regardless of pointer, e.g. when the window loses focus.
    pub fn cancel(&mut self) -> PanUpdate {
        self.touches.clear();
        if self.session.take().is_some() {
            PanUpdate::Cancelled
        } else {
            PanUpdate::Ignored
        }
    }

    fn release_touch(&mut self, ev: &PointerEvent) {
        if ev.kind == PointerKind::Touch {
            self.touches.retain(|id| *id != ev.pointer_id);
        }
    }
}
