//! StoryLand Web Client - Leptos Frontend
//!
//! Catalog browser, reader, and account/subscription UI for the StoryLand
//! children's storybook service. All story content, PDFs, and billing live
//! behind the REST API; this crate only orchestrates session state, data
//! fetching, and rendering.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod pages;
pub mod services;
pub mod state;
pub mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Initialize logger
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("StoryLand web client starting...");

    // Hide the static loading screen before mounting
    hide_loading_screen();

    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the loading screen element shipped in index.html
fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if let Some(loading_element) = document.get_element_by_id("leptos-loading") {
        if loading_element
            .set_attribute("style", "display: none !important;")
            .is_err()
        {
            log::warn!("failed to hide loading screen");
        }
    }
}
