//! AI Visibility Dashboard Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod markdown;
mod pages;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_logger::init_logger("visibility-ui", config::log_level()) {
        web_sys::console::error_1(&format!("Logger init failed: {}", e).into());
    }
    mount_to_body(App);
}
