//! HTTP API Client
//!
//! Functions for communicating with the knowledge backend.

use gloo_net::http::Request;
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

use crate::state::board::Knowledge;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8001";

/// Get the API base URL baked in at build time, or the default
pub fn get_api_base() -> String {
    normalize_base(option_env!("API_BASE_URL"))
}

fn normalize_base(configured: Option<&str>) -> String {
    let url = configured
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_API_BASE);
    url.trim_end_matches('/').to_string()
}

pub fn list_url(api_base: &str) -> String {
    format!("{}/get_data", api_base)
}

pub fn upload_url(api_base: &str, name: &str, description: &str) -> String {
    format!(
        "{}/upload?namedoc={}&description_doc={}",
        api_base,
        urlencoding::encode(name),
        urlencoding::encode(description)
    )
}

pub fn remove_url(api_base: &str, id: &str) -> String {
    format!("{}/remove_data?id={}", api_base, urlencoding::encode(id))
}

fn js_error(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

// ============ API Functions ============

/// Fetch every knowledge record
pub async fn fetch_knowledge() -> Result<Vec<Knowledge>, String> {
    let response = Request::get(&list_url(&get_api_base()))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch data ({})", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Upload a document as multipart form data
pub async fn upload_knowledge(
    name: &str,
    description: &str,
    files: &[File],
) -> Result<(), String> {
    let form = FormData::new().map_err(js_error)?;
    form.append_with_str("namedoc", name).map_err(js_error)?;
    form.append_with_str("description_doc", description).map_err(js_error)?;
    for file in files {
        form.append_with_blob_and_filename("files", file, &file.name())
            .map_err(js_error)?;
    }

    let response = Request::post(&upload_url(&get_api_base(), name, description))
        .body(form)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err("Failed to upload files".to_string());
    }

    Ok(())
}

/// Remove one record by id
pub async fn remove_knowledge(id: &str) -> Result<(), String> {
    let response = Request::delete(&remove_url(&get_api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err("Failed to remove data".to_string());
    }

    Ok(())
}
