//! File Drop Demo App
//!
//! One drop target inside a workspace panel. The frame cycles through the
//! document, the panel and the window to watch the rebind.

use leptos::prelude::*;
use leptos_filedrop::{DragState, FileDrop, FrameSource};
use web_sys::{DragEvent, FileList, MouseEvent};

use crate::components::{EventLog, FileTable};
use crate::models::{DroppedFile, LogEntry};
use crate::settings::PageSettings;

/// Selector of the panel used as the alternative frame
const PANEL_SELECTOR: &str = "#workspace";

/// Keep the log short
const MAX_LOG_ENTRIES: usize = 50;

#[component]
pub fn App(settings: PageSettings) -> impl IntoView {
    let (files, set_files) = signal(Vec::<DroppedFile>::new());
    let (entries, set_entries) = signal(Vec::<LogEntry>::new());
    let (next_id, set_next_id) = signal(0u32);
    let (drag_state, set_drag_state) = signal(DragState::Idle);
    let (frame, set_frame) = signal(settings.frame_source());

    let push = move |kind: &'static str, detail: String| {
        let id = next_id.get_untracked();
        set_next_id.set(id + 1);
        set_entries.update(|list| {
            list.push(LogEntry { id, kind, detail });
            if list.len() > MAX_LOG_ENTRIES {
                list.remove(0);
            }
        });
    };

    let on_drop = Callback::new(move |(list, _ev): (Option<FileList>, DragEvent)| {
        let dropped = list.as_ref().map(DroppedFile::from_list).unwrap_or_default();
        log::info!("[APP] {} file(s) dropped on target", dropped.len());
        push("drop", format!("{} file(s)", dropped.len()));
        set_files.set(dropped);
    });

    // document -> panel -> window -> document
    let toggle_frame = move |_| {
        let next = match frame.get_untracked() {
            FrameSource::Document => FrameSource::from(PANEL_SELECTOR),
            FrameSource::Selector(_) => FrameSource::Window,
            FrameSource::Window => FrameSource::Document,
        };
        log::info!("[APP] frame -> {}", next.label());
        push("rebind", next.label().to_string());
        set_frame.set(next);
    };

    let state_label = move || match drag_state.get() {
        DragState::Idle => "idle",
        DragState::OverFrame => "files over frame",
        DragState::OverTarget => "files over target",
    };

    view! {
        <div class="app-layout">
            <header class="toolbar">
                <h1>"File Drop"</h1>
                <span class=move || format!("state {:?}", drag_state.get()).to_lowercase()>
                    {state_label}
                </span>
                <button class="frame-btn" on:click=toggle_frame>
                    {move || match frame.get() {
                        FrameSource::Document => "Frame: document",
                        FrameSource::Selector(_) => "Frame: panel",
                        FrameSource::Window => "Frame: window",
                    }}
                </button>
            </header>

            <main id="workspace" class="workspace">
                <FileDrop
                    frame=frame
                    config=settings.file_drop.clone()
                    on_frame_drag_enter=Callback::new(move |_: DragEvent| push("frame-enter", String::new()))
                    on_frame_drag_leave=Callback::new(move |_: DragEvent| push("frame-leave", String::new()))
                    on_frame_drop=Callback::new(move |_: DragEvent| push("frame-drop", "missed the target".to_string()))
                    on_drop=on_drop
                    on_target_click=Callback::new(move |_: MouseEvent| push("click", String::new()))
                    on_state_change=Callback::new(move |state: DragState| set_drag_state.set(state))
                >
                    <p class="drop-hint">"Drop files here"</p>
                </FileDrop>

                <FileTable files=files />
            </main>

            <EventLog entries=entries on_clear=move || set_entries.set(Vec::new()) />
        </div>
    }
}
