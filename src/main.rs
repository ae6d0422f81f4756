//! Water Bill Console Frontend Entry Point

mod api;
mod app;
mod billing;
mod components;
mod config;
mod context;
mod error;
mod logger;
mod models;
mod rules;
mod session;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init();
    mount_to_body(App);
}
