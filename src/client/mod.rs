//! Knowledge Backend Client
//!
//! Talks to the external knowledge backend over HTTP.
//!
//! ## Endpoints
//!
//! - `GET /get_data` - JSON array of records
//! - `POST /upload?namedoc=..&description_doc=..` - multipart upload
//! - `DELETE /remove_data?id=..` - remove one record
//!
//! Every call is independent: no retries, no de-duplication.

mod error;
mod rest;

pub use error::{ClientError, ClientResult, Operation};
pub use rest::{ClientConfig, KnowledgeClient};

use async_trait::async_trait;

use crate::records::{Draft, Record};

/// The backend operations the board depends on
#[async_trait]
pub trait KnowledgeApi: Send + Sync {
    /// Fetch every record
    async fn list_records(&self) -> ClientResult<Vec<Record>>;

    /// Upload a draft as a new document
    async fn upload(&self, draft: &Draft) -> ClientResult<()>;

    /// Remove the record with the given identifier
    async fn remove(&self, id: &str) -> ClientResult<()>;
}
