pub mod app;
pub mod config;
pub mod domain;
pub mod shared;

use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    let config = config::load_config();

    // initializes logging using the `log` crate
    let level = config
        .as_ref()
        .map(|config| config.logging.level())
        .unwrap_or(log::Level::Debug);
    _ = console_log::init_with_level(level);
    console_error_panic_hook::set_once();

    match config {
        Ok(config) => {
            log::info!("Using default embedded configuration");
            leptos::mount::mount_to_body(move || view! { <app::App config=config /> });
        }
        Err(e) => {
            log::error!("Failed to load config: {:#}", e);
            let message = format!("{:#}", e);
            leptos::mount::mount_to_body(move || {
                view! { <app::StartupError message=message /> }
            });
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
