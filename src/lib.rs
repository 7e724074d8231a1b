//! # AlFred
//!
//! Knowledge management client - list, upload, and remove knowledge documents
//! held by an AlFred backend.
//!
//! ## Modules
//!
//! - [`records`]: Record and upload draft types
//! - [`client`]: HTTP client for the backend API
//! - [`board`]: The root view: record cards, upload modal, removal flow
//! - [`config`]: TOML and environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use alfred::board::{AssumeYes, Board};
//! use alfred::client::{ClientConfig, KnowledgeClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = KnowledgeClient::new(ClientConfig::default())?;
//!     let mut board = Board::new(client, AssumeYes);
//!
//!     board.load().await;
//!     println!("{}", board.view());
//!
//!     Ok(())
//! }
//! ```

pub mod board;
pub mod client;
pub mod config;
pub mod records;

// Re-export top-level types for convenience
pub use board::{Action, Board, BoardView, Outcome, Prompt, RecordCard};
pub use client::{ClientConfig, ClientError, KnowledgeApi, KnowledgeClient};
pub use config::{Config, ConfigError, LoggingConfig};
pub use records::{Draft, Record, UploadFile};
