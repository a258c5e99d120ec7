pub mod app;
pub mod dashboards;
pub mod shared;

use shared::config::load_config;
use shared::storage::BrowserStorage;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate, narrowed to the
    // configured level once the config is read
    _ = console_log::init_with_level(log::Level::Trace);
    console_error_panic_hook::set_once();

    let config = load_config(&BrowserStorage);
    log::set_max_level(config.logging.log_level().to_level_filter());

    leptos::mount::mount_to_body(move || leptos::view! { <app::App config=config.clone() /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
