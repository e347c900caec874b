pub mod app;
pub mod shared;
pub mod usecases;

use wasm_bindgen::prelude::wasm_bindgen;

pub use shared::external_viewer::init_external_viewer_controls;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
