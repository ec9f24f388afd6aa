//! WASM entry point for the portfolio frontend.

use app::App;
use wasm_bindgen::prelude::wasm_bindgen;

/// Mounts the application as soon as the wasm module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    leptos::mount::mount_to_body(App);
}
