//! Todo Frontend Entry Point

mod api;
mod app;
mod cache;
mod components;
mod config;
mod context;
mod models;
mod session;
mod store;
mod token;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
