//! File Table Component
//!
//! Lists the files from the last drop on the target.

use leptos::prelude::*;

use crate::models::DroppedFile;

#[component]
pub fn FileTable(files: ReadSignal<Vec<DroppedFile>>) -> impl IntoView {
    view! {
        <Show when=move || !files.get().is_empty()>
            <table class="file-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Type"</th>
                        <th>"Size"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        files
                            .get()
                            .into_iter()
                            .map(|f| {
                                let size = f.size_label();
                                let mime = if f.mime.is_empty() { "-".to_string() } else { f.mime };
                                view! {
                                    <tr>
                                        <td>{f.name}</td>
                                        <td>{mime}</td>
                                        <td>{size}</td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </Show>
    }
}
