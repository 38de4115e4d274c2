//! Scout Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod filters;
mod logging;
mod models;
mod nav;
mod pages;
mod pin_layout;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();

    if let Err(e) = config::apply_document_metadata(&config::APP_META) {
        log::warn!("[APP] Could not apply document metadata: {}", e);
    }

    mount_to_body(App);
}
