//! Idea List Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod dates;
mod error;
mod form;
mod load_gate;
mod logging;
mod message;
mod models;
mod store;

use app::App;
use config::{ClientConfig, Locale};
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match ClientConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (ClientConfig::default(), Some(e)),
    };
    let config = config.with_page_locale(Locale::from_document());
    logging::init(&config);
    if let Some(e) = config_error {
        log::warn!("using default config: {}", e);
    }

    mount_to_body(move || view! { <App config=config /> });
}
