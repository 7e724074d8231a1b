//! Knowledge Board
//!
//! The root view of the application, without a rendering toolkit:
//!
//! - **Board**: record list, upload modal toggle, draft form, submit/remove
//! - **RecordCard**: stateless card for one record
//! - **Prompt**: alerts and confirmations
//! - **BoardView**: what the board currently shows
//!
//! ## Flow
//!
//! 1. `load` replaces the cached list with the server's
//! 2. `open_form` / draft setters / `submit` post a multipart upload
//! 3. a card's `remove_action` is dispatched; the board confirms, deletes,
//!    and drops the card from the cached list

mod card;
mod prompt;
mod state;
mod view;

pub use card::{CardView, RecordCard, CARD_IMAGE, REMOVE_LABEL};
pub use prompt::{AssumeYes, ConsolePrompt, Prompt};
pub use state::{Board, CONFIRM_REMOVE, UPLOAD_SUCCESS};
pub use view::{BoardView, DialogView, ADD_LABEL, BOARD_TITLE, DIALOG_TITLE, EMPTY_PLACEHOLDER};

use crate::records::UploadFile;

/// Everything a user can do on the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Load,
    OpenForm,
    CloseForm,
    SetName(String),
    SetDescription(String),
    SetFiles(Vec<UploadFile>),
    Submit,
    Remove(String),
}

/// How a board operation ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    /// The user declined a confirmation
    Declined,
    /// A backend call failed; the message was already surfaced
    Failed(String),
}

impl Outcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, Outcome::Completed)
    }
}
