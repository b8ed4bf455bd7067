//! FileDrop Component
//!
//! Wires the drag session to the DOM: frame listeners on the configured
//! source, target handlers on the rendered element, the window guard, and
//! the application callbacks.

use leptos::prelude::*;
use web_sys::{DragEvent, FileList, MouseEvent};

use crate::binding::SourceBinding;
use crate::config::{FileDropConfig, FrameSource};
use crate::session::{DragSession, DragState, FileDropEvent};
use crate::transfer::DragPayload;
use crate::web::{bind_window_guard, detect_engine, resolve_frame, BindError, ListenerSet};

/// Application callbacks, all optional.
/// `P` is the drag event type, `C` the click event type.
struct Handlers<P: DragPayload + 'static, C: 'static> {
    on_frame_drag_enter: Option<Callback<P>>,
    on_frame_drag_leave: Option<Callback<P>>,
    on_frame_drop: Option<Callback<P>>,
    on_drag_over: Option<Callback<P>>,
    on_drag_leave: Option<Callback<P>>,
    on_drop: Option<Callback<(Option<P::Files>, P)>>,
    on_target_click: Option<Callback<C>>,
    on_state_change: Option<Callback<DragState>>,
}

// Callbacks are Copy whatever the event type is; a derive would ask for `P: Copy`
impl<P: DragPayload + 'static, C: 'static> Clone for Handlers<P, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: DragPayload + 'static, C: 'static> Copy for Handlers<P, C> {}

impl<P: DragPayload + 'static, C: 'static> Default for Handlers<P, C> {
    fn default() -> Self {
        Self {
            on_frame_drag_enter: None,
            on_frame_drag_leave: None,
            on_frame_drop: None,
            on_drag_over: None,
            on_drag_leave: None,
            on_drop: None,
            on_target_click: None,
            on_state_change: None,
        }
    }
}

impl<P: DragPayload + 'static, C: 'static> Handlers<P, C> {
    fn dispatch(&self, event: FileDropEvent<P::Files>, raw: P) {
        let callback = match event {
            FileDropEvent::FrameEntered => self.on_frame_drag_enter,
            FileDropEvent::FrameLeft => self.on_frame_drag_leave,
            FileDropEvent::FrameDropped => self.on_frame_drop,
            FileDropEvent::TargetDragOver => self.on_drag_over,
            FileDropEvent::TargetDragLeave => self.on_drag_leave,
            FileDropEvent::TargetDropped(files) => {
                if let Some(on_drop) = self.on_drop {
                    on_drop.run((files, raw));
                }
                return;
            }
        };
        if let Some(callback) = callback {
            callback.run(raw);
        }
    }
}

/// Everything an event handler needs, cheap to copy into closures
struct Driver<P: DragPayload + 'static, C: 'static> {
    session: StoredValue<DragSession>,
    /// (over frame, over target)
    hover: RwSignal<(bool, bool)>,
    handlers: Handlers<P, C>,
}

impl<P: DragPayload + 'static, C: 'static> Clone for Driver<P, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: DragPayload + 'static, C: 'static> Copy for Driver<P, C> {}

impl<P: DragPayload + 'static, C: 'static> Driver<P, C> {
    /// Run one session operation, then forward its notification
    fn handle(&self, ev: P, op: fn(&mut DragSession, &P) -> Option<FileDropEvent<P::Files>>) {
        let event = self.session.try_update_value(|s| op(s, &ev)).flatten();
        match event {
            // the application sees the drop before the reset lands
            Some(event @ FileDropEvent::TargetDropped(_)) => {
                self.handlers.dispatch(event, ev);
                self.publish();
            }
            Some(event) => {
                self.publish();
                self.handlers.dispatch(event, ev);
            }
            None => self.publish(),
        }
    }

    /// Frame `drop`. While the target is hovered the target's own drop
    /// follows in the same dispatch and publishes after `on_drop`, so the
    /// reset is applied here without being published.
    fn frame_drop(&self, ev: P) {
        let over_target = self
            .session
            .try_with_value(DragSession::is_over_target)
            .unwrap_or(false);
        if over_target {
            self.session.update_value(|s| {
                s.frame_drop(&ev);
            });
            return;
        }
        self.handle(ev, DragSession::frame_drop);
    }

    fn click(&self, ev: C) {
        if let Some(callback) = self.handlers.on_target_click {
            callback.run(ev);
        }
        self.session.update_value(DragSession::target_click);
        self.publish();
    }

    /// Push hover flags to the view, only when they changed
    fn publish(&self) {
        let Some(next) = self
            .session
            .try_with_value(|s| (s.is_over_frame(), s.is_over_target()))
        else {
            return;
        };
        let prev = self.hover.get_untracked();
        if prev == next {
            return;
        }
        self.hover.set(next);

        let prev_state = DragState::from_flags(prev.0, prev.1);
        let next_state = DragState::from_flags(next.0, next.1);
        if prev_state != next_state {
            if let Some(callback) = self.handlers.on_state_change {
                callback.run(next_state);
            }
        }
    }
}

type DomDriver = Driver<DragEvent, MouseEvent>;

/// Attach enter/leave/drop on the frame. Capture phase, so a drop on the
/// target reaches the frame tracker while the target is still hovered.
fn bind_frame(source: &FrameSource, driver: DomDriver) -> Result<ListenerSet, BindError> {
    let target = resolve_frame(source)?;
    let mut set = ListenerSet::new(target, true);
    set.listen("dragenter", move |ev| driver.handle(ev, DragSession::frame_enter))?;
    set.listen("dragleave", move |ev| driver.handle(ev, DragSession::frame_leave))?;
    set.listen("drop", move |ev| driver.frame_drop(ev))?;
    log::debug!("[FileDrop] bound frame {}", source.label());
    Ok(set)
}

/// Drop target for files, aware of drags over the surrounding frame
#[component]
pub fn FileDrop(
    /// Event source of the frame; the whole document when absent
    #[prop(optional, into)]
    frame: MaybeProp<FrameSource>,
    /// Drop effect and class names
    #[prop(optional)]
    config: FileDropConfig,
    /// Files entered the frame
    #[prop(optional)]
    on_frame_drag_enter: Option<Callback<DragEvent>>,
    /// Files left the frame
    #[prop(optional)]
    on_frame_drag_leave: Option<Callback<DragEvent>>,
    /// Files dropped on the frame outside the target
    #[prop(optional)]
    on_frame_drop: Option<Callback<DragEvent>>,
    /// Files dragged over the target
    #[prop(optional)]
    on_drag_over: Option<Callback<DragEvent>>,
    /// Drag left the target
    #[prop(optional)]
    on_drag_leave: Option<Callback<DragEvent>>,
    /// Files dropped on the target
    #[prop(optional)]
    on_drop: Option<Callback<(Option<FileList>, DragEvent)>>,
    /// Target clicked
    #[prop(optional)]
    on_target_click: Option<Callback<MouseEvent>>,
    /// Hover state changed
    #[prop(optional)]
    on_state_change: Option<Callback<DragState>>,
    children: Children,
) -> impl IntoView {
    let driver: DomDriver = Driver {
        session: StoredValue::new(DragSession::new(config.drop_effect, detect_engine())),
        hover: RwSignal::new((false, false)),
        handlers: Handlers {
            on_frame_drag_enter,
            on_frame_drag_leave,
            on_frame_drop,
            on_drag_over,
            on_drag_leave,
            on_drop,
            on_target_click,
            on_state_change,
        },
    };

    let guard = StoredValue::new_local(
        bind_window_guard()
            .map_err(|e| log::warn!("[FileDrop] window guard not bound: {}", e))
            .ok(),
    );
    let binding = StoredValue::new_local(SourceBinding::<ListenerSet>::new());

    // (Re)bind whenever the frame source changes
    Effect::new(move |_| {
        let source = frame.get().unwrap_or_default();
        binding.update_value(|b| {
            driver.session.update_value(|s| {
                b.rebind(s, || {
                    bind_frame(&source, driver)
                        .map_err(|e| log::warn!("[FileDrop] frame not bound: {}", e))
                        .ok()
                });
            });
        });
        driver.publish();
    });

    on_cleanup(move || {
        binding.update_value(SourceBinding::unbind);
        guard.set_value(None);
    });

    let class_names = config.class_names;
    let root_class = class_names.root.clone();
    let target_class = move || {
        let (over_frame, over_target) = driver.hover.get();
        class_names.target_class(over_frame, over_target)
    };

    view! {
        <div
            class=root_class
            on:dragover=move |ev: DragEvent| driver.handle(ev, DragSession::target_drag_over)
            on:dragleave=move |ev: DragEvent| driver.handle(ev, DragSession::target_drag_leave)
            on:drop=move |ev: DragEvent| driver.handle(ev, DragSession::target_drop)
            on:click=move |ev: MouseEvent| driver.click(ev)
        >
            <div class=target_class>{children()}</div>
        </div>
    }
}
