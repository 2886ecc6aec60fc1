#![allow(warnings)]
//! Promo Interview Frontend Entry Point

mod app;
mod autosave;
mod candidates;
mod components;
mod context;
mod dom;
mod logging;
mod models;
mod route;
mod schema;
mod services;
mod session;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
