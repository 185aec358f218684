//! CampusConnect Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod models;
mod pages;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::error_1(&format!("[APP] logger init failed: {}", e).into());
    }
    log::info!("[APP] starting CampusConnect");
    mount_to_body(App);
}
