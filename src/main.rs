//! Folio Frontend Entry Point

mod app;
mod browser;
mod commands;
mod components;
mod config;
mod context;
mod format;
mod markdown;
mod models;
mod pages;
mod store;
mod typing;

use app::App;
use config::SiteConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = rolling_logger::init_logger("folio", log::LevelFilter::Trace) {
        web_sys::console::warn_1(&format!("logger not installed: {}", e).into());
    }
    // Installed first so config warnings are kept; the configured level applies after.
    let config = SiteConfig::load();
    log::set_max_level(config.log_level());
    log::info!("starting {}", config.site_name);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
