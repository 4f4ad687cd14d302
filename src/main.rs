#![allow(non_snake_case)]

use dioxus::prelude::*;

// Modules
mod components;
mod config;
mod context;
mod hooks;
mod routes;
mod services;
mod utils;

use config::ApiConfig;

fn main() {
    // Initialize panic hook for better error messages in browser console
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    }

    log::info!("Starting JobPortal Rust client");

    // Launch the Dioxus web app
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Backend location is shared with every page through context
    use_context_provider(ApiConfig::load);

    rsx! {
        Router::<routes::Route> {}
    }
}
