#![allow(warnings)]
//! VALOS Dashboard Frontend Entry Point

mod models;
mod session;
mod api;
mod totals;
mod sync;
mod query;
mod store;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
