#![allow(warnings)]
//! MMIS Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod download;
mod notify;
mod pages;
mod routes;
mod session;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(AppConfig::from_build_env().console_level()));
    log::info!("MMIS UI starting");
    mount_to_body(App);
}
