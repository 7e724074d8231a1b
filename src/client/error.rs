//! Client Error Types

use std::fmt;
use thiserror::Error;

/// The backend call an error came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Upload,
    Remove,
}

impl Operation {
    /// User-facing failure message for this call
    pub fn failure_message(&self) -> &'static str {
        match self {
            Operation::List => "Failed to fetch data",
            Operation::Upload => "Failed to upload files",
            Operation::Remove => "Failed to remove data",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.failure_message())
    }
}

/// Errors that can occur when talking to the knowledge backend
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Knowledge backend unavailable")]
    Unavailable,

    #[error("Request timeout")]
    Timeout,

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{operation} (HTTP {status})")]
    Status {
        operation: Operation,
        status: u16,
        body: String,
    },

    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    /// Classify a reqwest send failure
    pub(crate) fn from_send(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ClientError::Timeout
        } else if e.is_connect() {
            ClientError::Unavailable
        } else {
            ClientError::Transport(e)
        }
    }

    /// Message suitable for an alert; status details stay in the logs
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Status { operation, .. } => operation.failure_message().to_string(),
            other => other.to_string(),
        }
    }
}

/// Result type for backend calls
pub type ClientResult<T> = Result<T, ClientError>;
