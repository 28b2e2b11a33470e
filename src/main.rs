//! Pedalboard Designer Entry Point

mod app;
mod catalog;
mod components;
mod config;
mod context;
mod geometry;
mod i18n;
mod models;
mod search;
mod session;
mod shops;
mod snapshot;
mod store;
mod units;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    mount_to_body(App);
}
