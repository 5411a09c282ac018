//! ZenLife
//!
//! Personal life organizer built with Leptos (WASM).
//!
//! # Features
//!
//! - Task calendar with status filters
//! - Monthly bills timeline with live countdowns
//! - Grocery list grouped by category
//! - Summary dashboard with pie charts
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All data is seeded in memory from the `zenlife` crate; each
//! page owns its own state and nothing is persisted.

use leptos::*;

mod app;
mod components;
mod logging;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    let loaded = state::global::embedded_config();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    logging::init(config.logging.level_filter());
    if let Err(e) = loaded {
        tracing::warn!("Using default configuration: {}", e);
    }
    tracing::info!(app = %config.display.app_name, "Starting");

    // Mount the app to the document body
    mount_to_body(move || view! { <app::App config=config /> });
}
