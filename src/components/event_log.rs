//! Event Log Component
//!
//! Most recent drag notifications, newest first.

use leptos::prelude::*;

use crate::models::LogEntry;

#[component]
pub fn EventLog(
    entries: ReadSignal<Vec<LogEntry>>,
    #[prop(into)]
    on_clear: Callback<()>,
) -> impl IntoView {
    view! {
        <section class="event-log">
            <div class="event-log-header">
                <h3>"Events"</h3>
                <button class="clear-btn" on:click=move |_| on_clear.run(())>"Clear"</button>
            </div>
            <Show
                when=move || !entries.get().is_empty()
                fallback=|| view! { <p class="empty">"Drag a file into the window"</p> }
            >
                <ul>
                    <For
                        each=move || entries.get().into_iter().rev()
                        key=|entry| entry.id
                        children=|entry| {
                            view! {
                                <li class=format!("event {}", entry.kind)>
                                    <span class="event-kind">{entry.kind}</span>
                                    <span class="event-detail">{entry.detail}</span>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </section>
    }
}
