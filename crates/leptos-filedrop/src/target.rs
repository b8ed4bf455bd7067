//! Target Tracker
//!
//! Hover flag for the drop target region, driven by direct
//! dragover/dragleave on the target rather than bubble counting.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TargetTracker {
    over: bool,
}

impl TargetTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Files are over the target. Returns `true` if this is a change.
    pub fn hover(&mut self) -> bool {
        !std::mem::replace(&mut self.over, true)
    }

    /// Pointer left the target. Returns `true` if this is a change.
    pub fn leave(&mut self) -> bool {
        std::mem::replace(&mut self.over, false)
    }

    pub fn reset(&mut self) {
        self.over = false;
    }

    pub fn is_over(&self) -> bool {
        self.over
    }
}
