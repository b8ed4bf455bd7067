//! Browser Adapter
//!
//! `DragPayload` for `web_sys::DragEvent`, engine detection, and
//! removable listener sets for the frame and the window guard.

use std::collections::BTreeMap;

use js_sys::{Array, Object, Reflect};
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{DataTransfer, DragEvent, EventTarget, FileList};

use crate::binding::Subscription;
use crate::config::{DropEffect, Engine, FrameSource};
use crate::transfer::{DragPayload, TransferKinds};

/// Why a source could not be bound
#[derive(Debug, Error)]
pub enum BindError {
    #[error("no window object")]
    NoWindow,
    #[error("no document object")]
    NoDocument,
    #[error("frame selector `{0}` matched nothing")]
    FrameNotFound(String),
    #[error("frame selector `{0}` is not valid")]
    InvalidSelector(String),
    #[error("failed to register listener: {0}")]
    Listener(String),
}

impl From<JsValue> for BindError {
    fn from(value: JsValue) -> Self {
        BindError::Listener(format!("{:?}", value))
    }
}

impl DragPayload for DragEvent {
    type Files = FileList;

    fn kinds(&self) -> Option<TransferKinds> {
        self.data_transfer().and_then(|dt| read_kinds(&dt))
    }

    fn set_drop_effect(&self, effect: DropEffect) {
        if let Some(dt) = self.data_transfer() {
            dt.set_drop_effect(effect.as_str());
        }
    }

    fn files(&self) -> Option<FileList> {
        self.data_transfer().and_then(|dt| dt.files())
    }
}

/// Read `DataTransfer.types`, which is an array on modern engines and a
/// `DOMStringList` on the legacy one
fn read_kinds(dt: &DataTransfer) -> Option<TransferKinds> {
    let types = Reflect::get(dt.as_ref(), &JsValue::from_str("types")).ok()?;
    if types.is_undefined() || types.is_null() {
        return None;
    }
    if Array::is_array(&types) {
        let kinds = Array::from(&types)
            .iter()
            .filter_map(|v| v.as_string())
            .collect();
        return Some(TransferKinds::Ordered(kinds));
    }
    let object = types.dyn_ref::<Object>()?;
    let mut kinds = BTreeMap::new();
    for entry in Object::entries(object).iter() {
        let pair = Array::from(&entry);
        if let (Some(key), Some(kind)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
            kinds.insert(key, kind);
        }
    }
    Some(TransferKinds::Keyed(kinds))
}

/// Detect the engine family from the navigator
pub fn detect_engine() -> Engine {
    let Some(window) = web_sys::window() else {
        return Engine::Standard;
    };
    let navigator = window.navigator();
    let user_agent = navigator.user_agent().unwrap_or_default();
    let app_version = navigator.app_version().unwrap_or_default();
    engine_from_agent(&user_agent, &app_version)
}

fn engine_from_agent(user_agent: &str, app_version: &str) -> Engine {
    if user_agent.contains("MSIE ") || app_version.contains("Trident/") {
        Engine::Legacy
    } else {
        Engine::Standard
    }
}

/// Where frame listeners go
pub fn resolve_frame(source: &FrameSource) -> Result<EventTarget, BindError> {
    let window = web_sys::window().ok_or(BindError::NoWindow)?;
    if *source == FrameSource::Window {
        return Ok(window.into());
    }
    let document = window.document().ok_or(BindError::NoDocument)?;
    match source {
        FrameSource::Selector(sel) => document
            .query_selector(sel)
            .map_err(|_| BindError::InvalidSelector(sel.clone()))?
            .map(Into::into)
            .ok_or_else(|| BindError::FrameNotFound(sel.clone())),
        _ => Ok(document.into()),
    }
}

type DragClosure = Closure<dyn FnMut(DragEvent)>;

/// Listeners attached to one event target, removed together
pub struct ListenerSet {
    target: EventTarget,
    capture: bool,
    listeners: Vec<(&'static str, DragClosure)>,
}

impl std::fmt::Debug for ListenerSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerSet")
            .field("capture", &self.capture)
            .field("events", &self.listeners.iter().map(|(e, _)| *e).collect::<Vec<_>>())
            .finish()
    }
}

impl ListenerSet {
    pub fn new(target: EventTarget, capture: bool) -> Self {
        Self {
            target,
            capture,
            listeners: Vec::new(),
        }
    }

    /// Attach a drag listener. On failure the set keeps what was attached
    /// so far; dropping or unsubscribing it removes those.
    pub fn listen<F>(&mut self, event: &'static str, handler: F) -> Result<(), BindError>
    where
        F: FnMut(DragEvent) + 'static,
    {
        let closure = DragClosure::new(handler);
        self.target.add_event_listener_with_callback_and_bool(
            event,
            closure.as_ref().unchecked_ref(),
            self.capture,
        )?;
        self.listeners.push((event, closure));
        Ok(())
    }

    fn remove_all(&mut self) {
        for (event, closure) in self.listeners.drain(..) {
            if let Err(e) = self.target.remove_event_listener_with_callback_and_bool(
                event,
                closure.as_ref().unchecked_ref(),
                self.capture,
            ) {
                log::debug!("[FileDrop] failed to remove {} listener: {:?}", event, e);
            }
        }
    }
}

impl Subscription for ListenerSet {
    fn unsubscribe(mut self) {
        self.remove_all();
    }
}

impl Drop for ListenerSet {
    fn drop(&mut self) {
        self.remove_all();
    }
}

/// Window-level guard: keeps the browser from navigating to a file
/// dropped anywhere outside a handler that cancels the event.
pub fn bind_window_guard() -> Result<ListenerSet, BindError> {
    let window = web_sys::window().ok_or(BindError::NoWindow)?;
    let mut set = ListenerSet::new(window.into(), false);
    set.listen("dragover", |ev: DragEvent| ev.prevent_default())?;
    set.listen("drop", |ev: DragEvent| ev.prevent_default())?;
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_detection() {
        assert_eq!(
            engine_from_agent(
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 Chrome/120.0",
                "5.0 (Windows NT 10.0; Win64; x64)"
            ),
            Engine::Standard
        );
        // IE 10
        assert_eq!(
            engine_from_agent("Mozilla/5.0 (compatible; MSIE 10.0; Windows NT 6.2)", "5.0"),
            Engine::Legacy
        );
        // IE 11 drops the MSIE token but keeps Trident
        assert_eq!(
            engine_from_agent(
                "Mozilla/5.0 (Windows NT 10.0; Trident/7.0; rv:11.0) like Gecko",
                "5.0 (Windows NT 10.0; Trident/7.0; rv:11.0) like Gecko"
            ),
            Engine::Legacy
        );
    }

    #[test]
    fn test_bind_error_messages() {
        assert_eq!(
            BindError::FrameNotFound("#drop-area".into()).to_string(),
            "frame selector `#drop-area` matched nothing"
        );
        assert_eq!(
            BindError::InvalidSelector("##".into()).to_string(),
            "frame selector `##` is not valid"
        );
        assert_eq!(BindError::NoWindow.to_string(), "no window object");
    }
}
