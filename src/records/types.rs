//! Record and Draft Types

use serde::{Deserialize, Serialize};
use std::path::Path;

/// A knowledge document as served by `GET /get_data`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Opaque server-assigned identifier
    #[serde(rename = "_id")]
    pub id: String,

    /// Document name
    #[serde(rename = "namedoc", default)]
    pub name: String,

    /// Free-form description
    #[serde(rename = "description_doc", default)]
    pub description: String,
}

impl Record {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
        }
    }
}

/// A file attached to an upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    /// Build an upload file from in-memory bytes, guessing the content type
    /// from the file name
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = mime_guess::from_path(&file_name)
            .first_or_octet_stream()
            .essence_str()
            .to_string();

        Self {
            file_name,
            content_type,
            bytes,
        }
    }

    /// Read a file from disk
    pub async fn from_path(path: &Path) -> std::io::Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "upload".to_string());

        Ok(Self::new(file_name, bytes))
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// In-progress upload form state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub description: String,
    pub files: Vec<UploadFile>,
}

impl Draft {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            files: Vec::new(),
        }
    }

    /// Attach a file (builder pattern)
    pub fn file(mut self, file: UploadFile) -> Self {
        self.files.push(file);
        self
    }

    pub fn file_names(&self) -> Vec<&str> {
        self.files.iter().map(|f| f.file_name.as_str()).collect()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
