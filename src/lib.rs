pub mod api;
pub mod app;
pub mod auth;
pub mod components;
pub mod config;
pub mod error;
pub mod models;
pub mod pages;
pub mod reviews;
pub mod state;
pub mod utils;

#[cfg(test)]
mod testing;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;

    console_error_panic_hook::set_once();
    utils::panic_hook::init();

    leptos::mount_to_body(App);
}
