//! Event Source Binding
//!
//! Lifecycle of the single live frame subscription.

use crate::session::DragSession;

/// A live set of listeners on some event source
pub trait Subscription {
    /// Remove every listener this subscription attached
    fn unsubscribe(self);
}

/// Holds at most one live subscription
#[derive(Debug)]
pub struct SourceBinding<S: Subscription> {
    live: Option<S>,
}

impl<S: Subscription> Default for SourceBinding<S> {
    fn default() -> Self {
        Self { live: None }
    }
}

impl<S: Subscription> SourceBinding<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_bound(&self) -> bool {
        self.live.is_some()
    }

    /// Switch to a new source.
    ///
    /// The old subscription is fully removed and the session reset before
    /// `attach` runs. `attach` returning `None` leaves nothing bound.
    pub fn rebind<F>(&mut self, session: &mut DragSession, attach: F)
    where
        F: FnOnce() -> Option<S>,
    {
        self.unbind();
        session.reset();
        self.live = attach();
    }

    pub fn unbind(&mut self) {
        if let Some(old) = self.live.take() {
            old.unsubscribe();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DropEffect, Engine};
    use crate::transfer::fake::FakeDrag;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Log = Rc<RefCell<Vec<String>>>;

    struct Recorder {
        name: &'static str,
        log: Log,
    }

    impl Recorder {
        fn attach(name: &'static str, log: &Log) -> Self {
            log.borrow_mut().push(format!("attach {}", name));
            Self { name, log: log.clone() }
        }
    }

    impl Subscription for Recorder {
        fn unsubscribe(self) {
            self.log.borrow_mut().push(format!("detach {}", self.name));
        }
    }

    #[test]
    fn test_rebind_detaches_before_attaching() {
        let log: Log = Rc::default();
        let mut session = DragSession::new(DropEffect::Copy, Engine::Standard);
        let mut binding = SourceBinding::new();

        binding.rebind(&mut session, || Some(Recorder::attach("document", &log)));
        binding.rebind(&mut session, || Some(Recorder::attach("#panel", &log)));

        assert_eq!(
            *log.borrow(),
            vec!["attach document", "detach document", "attach #panel"]
        );
        assert!(binding.is_bound());
    }

    #[test]
    fn test_rebind_mid_drag_resets_session() {
        let log: Log = Rc::default();
        let mut session = DragSession::new(DropEffect::Copy, Engine::Standard);
        let mut binding = SourceBinding::new();
        binding.rebind(&mut session, || Some(Recorder::attach("document", &log)));

        let drag = FakeDrag::with_files(&["a.png"]);
        session.frame_enter(&drag);
        session.frame_enter(&drag);
        session.target_drag_over(&drag);

        binding.rebind(&mut session, || Some(Recorder::attach("#panel", &log)));
        assert!(!session.is_over_frame());
        assert!(!session.is_over_target());
        assert_eq!(session.frame_depth(), 0);
    }

    #[test]
    fn test_missing_source_leaves_nothing_bound() {
        let log: Log = Rc::default();
        let mut session = DragSession::default();
        let mut binding = SourceBinding::new();
        binding.rebind(&mut session, || Some(Recorder::attach("document", &log)));
        binding.rebind(&mut session, || None);

        assert!(!binding.is_bound());
        assert_eq!(*log.borrow(), vec!["attach document", "detach document"]);
    }

    #[test]
    fn test_unbind_is_idempotent() {
        let log: Log = Rc::default();
        let mut binding = SourceBinding::new();
        binding.rebind(&mut DragSession::default(), || Some(Recorder::attach("document", &log)));

        binding.unbind();
        binding.unbind();
        assert_eq!(log.borrow().len(), 2);
    }
}
