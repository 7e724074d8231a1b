//! Knowledge Backend REST Client
//!
//! HTTP client for the three endpoints the backend exposes.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use std::time::Duration;

use super::error::{ClientError, ClientResult, Operation};
use super::KnowledgeApi;
use crate::config::ApiConfig;
use crate::records::{Draft, Record};

/// Knowledge backend REST client
pub struct KnowledgeClient {
    client: Client,
    config: ClientConfig,
}

/// Configuration for the knowledge client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for the backend (e.g., "http://localhost:8001")
    pub base_url: String,
    /// Per-request timeout, `None` to wait indefinitely
    pub request_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: crate::config::DEFAULT_API_BASE_URL.to_string(),
            request_timeout: Some(Duration::from_secs(30)),
        }
    }
}

impl From<&ApiConfig> for ClientConfig {
    fn from(api: &ApiConfig) -> Self {
        Self {
            base_url: api.base_url.clone(),
            request_timeout: match api.request_timeout_secs {
                0 => None,
                secs => Some(Duration::from_secs(secs)),
            },
        }
    }
}

impl KnowledgeClient {
    /// Create a new client with the given configuration
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let mut builder =
            Client::builder().user_agent(concat!("alfred/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Turn a non-success response into a status error
    async fn check(response: Response, operation: Operation) -> ClientResult<Response> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        tracing::debug!(%operation, status, body = %body, "backend rejected request");

        Err(ClientError::Status {
            operation,
            status,
            body,
        })
    }
}

/// Multipart body for `POST /upload`
fn upload_form(draft: &Draft) -> ClientResult<Form> {
    let mut form = Form::new()
        .text("namedoc", draft.name.clone())
        .text("description_doc", draft.description.clone());

    for file in &draft.files {
        let part = Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str(&file.content_type)?;
        form = form.part("files", part);
    }

    Ok(form)
}

#[async_trait]
impl KnowledgeApi for KnowledgeClient {
    async fn list_records(&self) -> ClientResult<Vec<Record>> {
        let response = self
            .client
            .get(self.url("get_data"))
            .send()
            .await
            .map_err(ClientError::from_send)?;

        let response = Self::check(response, Operation::List).await?;
        let text = response.text().await.map_err(ClientError::from_send)?;

        let records: Vec<Record> =
            serde_json::from_str(&text).map_err(|e| ClientError::Decode(e.to_string()))?;

        tracing::debug!(count = records.len(), "fetched knowledge records");
        Ok(records)
    }

    async fn upload(&self, draft: &Draft) -> ClientResult<()> {
        let form = upload_form(draft)?;

        let response = self
            .client
            .post(self.url("upload"))
            .query(&[
                ("namedoc", draft.name.as_str()),
                ("description_doc", draft.description.as_str()),
            ])
            .multipart(form)
            .send()
            .await
            .map_err(ClientError::from_send)?;

        Self::check(response, Operation::Upload).await?;

        tracing::info!(
            name = %draft.name,
            files = draft.files.len(),
            "uploaded knowledge document"
        );
        Ok(())
    }

    async fn remove(&self, id: &str) -> ClientResult<()> {
        let response = self
            .client
            .delete(self.url("remove_data"))
            .query(&[("id", id)])
            .send()
            .await
            .map_err(ClientError::from_send)?;

        Self::check(response, Operation::Remove).await?;

        tracing::info!(id, "removed knowledge record");
        Ok(())
    }
}
