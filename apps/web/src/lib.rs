#![recursion_limit = "512"]

pub mod app;
pub mod components;
pub mod errors;
pub mod host;
pub mod models;
pub mod pages;

pub use app::App;

// WASM hydration entry point
#[cfg(feature = "hydrate")]
mod hydrate {
    use wasm_bindgen::prelude::wasm_bindgen;
    use crate::App;

    #[wasm_bindgen(start)]
    pub fn hydrate() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Debug);
        leptos::mount::hydrate_body(App);
    }
}
