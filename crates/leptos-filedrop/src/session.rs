//! Drag Session
//!
//! Combines the frame and target trackers, applies the file filter and
//! decides which application notification (if any) each event produces.
//!
//! Handlers return a [`FileDropEvent`] instead of calling back directly, so
//! the caller can release its borrow of the session before running
//! application code.

use crate::config::{DropEffect, Engine};
use crate::frame::{FrameTracker, FrameTransition};
use crate::target::TargetTracker;
use crate::transfer::DragPayload;

/// Observable hover state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    /// Files are over the frame but not the target
    OverFrame,
    /// Files are over the target
    OverTarget,
}

impl DragState {
    /// Combine the two hover flags. The target wins even if the frame
    /// counter has drifted to zero.
    pub fn from_flags(over_frame: bool, over_target: bool) -> Self {
        if over_target {
            DragState::OverTarget
        } else if over_frame {
            DragState::OverFrame
        } else {
            DragState::Idle
        }
    }

    pub fn is_dragging(&self) -> bool {
        !matches!(self, DragState::Idle)
    }
}

/// Notification to forward to the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileDropEvent<F> {
    FrameEntered,
    FrameLeft,
    /// Drop landed on the frame outside the target
    FrameDropped,
    TargetDragOver,
    TargetDragLeave,
    /// Drop on the target, with the files found on the transfer object
    TargetDropped(Option<F>),
}

/// Per-instance drag session
#[derive(Debug, Clone, Default)]
pub struct DragSession {
    frame: FrameTracker,
    target: TargetTracker,
    drop_effect: DropEffect,
    engine: Engine,
}

impl DragSession {
    pub fn new(drop_effect: DropEffect, engine: Engine) -> Self {
        Self {
            frame: FrameTracker::new(),
            target: TargetTracker::new(),
            drop_effect,
            engine,
        }
    }

    pub fn is_over_frame(&self) -> bool {
        self.frame.is_over()
    }

    pub fn is_over_target(&self) -> bool {
        self.target.is_over()
    }

    /// Current frame nesting depth
    pub fn frame_depth(&self) -> u32 {
        self.frame.depth()
    }

    pub fn state(&self) -> DragState {
        DragState::from_flags(self.frame.is_over(), self.target.is_over())
    }

    /// Back to `{false, false}` with a zero counter
    pub fn reset(&mut self) {
        if self.state().is_dragging() || self.frame.depth() > 0 {
            log::debug!("[FileDrop] reset from {:?} (depth {})", self.state(), self.frame.depth());
        }
        self.frame.reset();
        self.target.reset();
    }

    // ---- frame ----

    /// `dragenter` anywhere inside the frame
    pub fn frame_enter<P: DragPayload>(&mut self, evt: &P) -> Option<FileDropEvent<P::Files>> {
        if !evt.has_files() {
            log::trace!("[FileDrop] frame enter without files, ignored");
            return None;
        }
        match self.frame.enter() {
            Some(FrameTransition::Entered) => {
                log::debug!("[FileDrop] files entered frame");
                Some(FileDropEvent::FrameEntered)
            }
            _ => None,
        }
    }

    /// `dragleave` anywhere inside the frame
    pub fn frame_leave<P: DragPayload>(&mut self, _evt: &P) -> Option<FileDropEvent<P::Files>> {
        match self.frame.leave() {
            Some(FrameTransition::Left) => {
                log::debug!("[FileDrop] files left frame");
                Some(FileDropEvent::FrameLeft)
            }
            _ => None,
        }
    }

    /// `drop` anywhere inside the frame.
    /// Only reported when the target is not hovered; always resets.
    pub fn frame_drop<P: DragPayload>(&mut self, _evt: &P) -> Option<FileDropEvent<P::Files>> {
        let outside_target = !self.target.is_over();
        self.reset();
        if outside_target {
            log::debug!("[FileDrop] drop on frame outside target");
            Some(FileDropEvent::FrameDropped)
        } else {
            None
        }
    }

    // ---- target ----

    /// `dragover` on the target
    pub fn target_drag_over<P: DragPayload>(
        &mut self,
        evt: &P,
    ) -> Option<FileDropEvent<P::Files>> {
        if !evt.has_files() {
            return None;
        }
        if self.target.hover() {
            log::debug!("[FileDrop] files over target");
        }
        if self.engine.supports_drop_effect() {
            evt.set_drop_effect(self.drop_effect);
        }
        Some(FileDropEvent::TargetDragOver)
    }

    /// `dragleave` on the target. Not filtered by kind, since transfer
    /// kinds are not reliably exposed on leave.
    pub fn target_drag_leave<P: DragPayload>(
        &mut self,
        _evt: &P,
    ) -> Option<FileDropEvent<P::Files>> {
        if self.target.leave() {
            log::debug!("[FileDrop] files left target");
        }
        Some(FileDropEvent::TargetDragLeave)
    }

    /// `drop` on the target. Reports the files if the drag carried any;
    /// always resets.
    pub fn target_drop<P: DragPayload>(&mut self, evt: &P) -> Option<FileDropEvent<P::Files>> {
        let dropped = evt.has_files().then(|| evt.files());
        self.reset();
        dropped.map(|files| {
            log::debug!("[FileDrop] files dropped on target");
            FileDropEvent::TargetDropped(files)
        })
    }

    /// `click` on the target, after the application saw it. Clears hover
    /// state left by gestures that ended without a drop.
    pub fn target_click(&mut self) {
        self.reset();
    }
}
