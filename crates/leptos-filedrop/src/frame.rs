//! Frame Tracker
//!
//! Turns the bubbling enter/leave stream of a whole surface into a single
//! "files are somewhere over the frame" flag.
//!
//! Every element boundary the pointer crosses produces one `dragenter` on
//! the element entered and one `dragleave` on the element left, so a plain
//! boolean would flicker while moving over nested children. Counting the
//! nesting depth yields exactly one transition per logical enter/exit.

/// Frame-level transition produced by the tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameTransition {
    /// Depth went 0 -> 1
    Entered,
    /// Depth went 1 -> 0
    Left,
}

/// Nested enter/leave counter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameTracker {
    depth: u32,
}

impl FrameTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an enter notification. Callers filter out non-file drags.
    pub fn enter(&mut self) -> Option<FrameTransition> {
        self.depth += 1;
        (self.depth == 1).then_some(FrameTransition::Entered)
    }

    /// Record a leave notification.
    ///
    /// Leaves are not filtered by kind, so a non-file drag can leave without
    /// ever having been counted in. The depth saturates at zero and such a
    /// leave reports nothing.
    pub fn leave(&mut self) -> Option<FrameTransition> {
        if self.depth == 0 {
            return None;
        }
        self.depth -= 1;
        (self.depth == 0).then_some(FrameTransition::Left)
    }

    pub fn reset(&mut self) {
        self.depth = 0;
    }

    /// Current nesting depth
    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn is_over(&self) -> bool {
        self.depth > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_enter_leave() {
        let mut frame = FrameTracker::new();
        assert_eq!(frame.enter(), Some(FrameTransition::Entered));
        assert!(frame.is_over());
        assert_eq!(frame.leave(), Some(FrameTransition::Left));
        assert!(!frame.is_over());
    }

    #[test]
    fn test_nested_transitions_only_at_edges() {
        let mut frame = FrameTracker::new();
        let mut transitions = Vec::new();

        // body -> main -> section -> back out
        for _ in 0..3 {
            transitions.push(frame.enter());
            assert!(frame.is_over());
        }
        for _ in 0..3 {
            assert!(frame.is_over());
            transitions.push(frame.leave());
        }

        assert_eq!(
            transitions,
            vec![
                Some(FrameTransition::Entered),
                None,
                None,
                None,
                None,
                Some(FrameTransition::Left),
            ]
        );
        assert_eq!(frame.depth(), 0);
    }

    #[test]
    fn test_interleaved_balanced_sequence_is_drift_free() {
        let mut frame = FrameTracker::new();
        // enter child before leaving parent, as browsers deliver it
        let steps = [true, true, false, true, false, true, true, false, false, false];
        for enter in steps {
            if enter {
                frame.enter();
            } else {
                frame.leave();
            }
        }
        assert_eq!(frame.depth(), 0);
        assert!(!frame.is_over());
    }

    #[test]
    fn test_leave_at_zero_is_clamped() {
        let mut frame = FrameTracker::new();
        assert_eq!(frame.leave(), None);
        assert_eq!(frame.leave(), None);
        assert_eq!(frame.depth(), 0);

        // A later file drag is not swallowed by the stray leaves
        assert_eq!(frame.enter(), Some(FrameTransition::Entered));
    }

    #[test]
    fn test_reset_clears_depth() {
        let mut frame = FrameTracker::new();
        frame.enter();
        frame.enter();
        frame.reset();
        assert_eq!(frame.depth(), 0);
        assert!(!frame.is_over());
        assert_eq!(frame.enter(), Some(FrameTransition::Entered));
    }
}
