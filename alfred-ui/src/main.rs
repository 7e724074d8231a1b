//! AlFred Knowledge Management
//!
//! Knowledge board built with Leptos (WASM).
//!
//! # Features
//!
//! - Grid of knowledge cards loaded from the backend
//! - Upload modal for new documents (name, description, files)
//! - Card removal with confirmation
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to the knowledge backend over HTTP; the backend
//! address is fixed at build time (see `build.rs`).

use leptos::*;

mod api;
mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    web_sys::console::log_1(&format!("API_BASE_URL {}", api::get_api_base()).into());

    mount_to_body(|| view! { <app::App /> });
}
