//! Backend API

pub mod client;

pub use client::{fetch_knowledge, get_api_base, remove_knowledge, upload_knowledge};
