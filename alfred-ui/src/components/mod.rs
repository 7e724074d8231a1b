//! UI Components
//!
//! Leptos components for the knowledge board.

pub mod knowledge_card;
pub mod upload_dialog;

pub use knowledge_card::{KnowledgeCard, BUTTON_CLASS};
pub use upload_dialog::UploadDialog;
