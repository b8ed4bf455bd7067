//! File Drop Demo Entry Point

mod app;
mod components;
mod logger;
mod models;
mod settings;

use app::App;
use leptos::prelude::*;
use settings::PageSettings;

fn main() {
    console_error_panic_hook::set_once();

    let (settings, parse_error) = PageSettings::load();
    if let Err(e) = logger::init(settings.level_filter()) {
        web_sys::console::error_1(&format!("[APP] logger not installed: {}", e).into());
    }
    if let Some(e) = parse_error {
        log::warn!("[APP] ignoring malformed page settings: {}", e);
    }
    log::debug!("[APP] settings {:?}", settings);

    mount_to_body(move || view! { <App settings=settings.clone() /> });
}
