//! Bakes the backend address into the WASM bundle.
//!
//! `API_BASE_URL` comes from the build environment, or from a `.env` file
//! next to this crate (or any parent directory).

fn main() {
    println!("cargo:rerun-if-changed=.env");
    println!("cargo:rerun-if-env-changed=API_BASE_URL");

    // A missing .env is fine; the app falls back to its default address
    let _ = dotenvy::dotenv();

    if let Ok(url) = std::env::var("API_BASE_URL") {
        println!("cargo:rustc-env=API_BASE_URL={}", url);
    }
}
