//! Leptos FileDrop
//!
//! File drag-and-drop for Leptos that tells apart files dragged over the
//! whole frame (usually the document) from files dragged over the drop
//! target itself.
//!
//! The frame side counts nested `dragenter`/`dragleave` pairs so that
//! moving across child elements produces one enter and one leave for the
//! whole surface instead of a burst of flickering updates. Drags that do
//! not carry files (selected text, links) are ignored.
//!
//! ```ignore
//! view! {
//!     <FileDrop
//!         on_drop=Callback::new(|(files, _ev)| { /* ... */ })
//!         on_frame_drop=Callback::new(|_ev| log::info!("missed the target"))
//!     >
//!         "Drop files here"
//!     </FileDrop>
//! }
//! ```

mod binding;
mod component;
mod config;
mod frame;
mod session;
mod target;
mod transfer;
mod web;

pub use binding::{SourceBinding, Subscription};
pub use component::{FileDrop, FileDropProps};
pub use config::{ClassNames, DropEffect, Engine, FileDropConfig, FrameSource};
pub use frame::{FrameTracker, FrameTransition};
pub use session::{DragSession, DragState, FileDropEvent};
pub use target::TargetTracker;
pub use transfer::{has_files, DragPayload, TransferKinds, FILES_KIND};
pub use web::{bind_window_guard, detect_engine, resolve_frame, BindError, ListenerSet};
