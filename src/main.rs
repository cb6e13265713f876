//! Gaba Inventory Frontend Entry Point

mod logger;
mod storage;
mod remote;
mod store;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Debug);
    mount_to_body(App);
}
