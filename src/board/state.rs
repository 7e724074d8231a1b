//! Board State
//!
//! Holds the cached record list, modal toggle, and draft, and runs the
//! load/submit/remove flows against a [`KnowledgeApi`].

use super::card::RecordCard;
use super::prompt::Prompt;
use super::view::{BoardView, DialogView, BOARD_TITLE, DIALOG_TITLE, EMPTY_PLACEHOLDER};
use super::{Action, Outcome};
use crate::client::KnowledgeApi;
use crate::config::BoardConfig;
use crate::records::{Draft, Record, UploadFile};

pub const CONFIRM_REMOVE: &str = "Are you sure you want to remove this knowledge card?";
pub const UPLOAD_SUCCESS: &str = "Files uploaded successfully!";

/// The root view's state
pub struct Board<A, P> {
    api: A,
    prompt: P,
    records: Vec<Record>,
    dialog_open: bool,
    draft: Draft,
    refresh_after_upload: bool,
}

impl<A: KnowledgeApi, P: Prompt> Board<A, P> {
    pub fn new(api: A, prompt: P) -> Self {
        Self::with_config(api, prompt, &BoardConfig::default())
    }

    pub fn with_config(api: A, prompt: P, config: &BoardConfig) -> Self {
        Self {
            api,
            prompt,
            records: Vec::new(),
            dialog_open: false,
            draft: Draft::default(),
            refresh_after_upload: config.refresh_after_upload,
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog_open
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    pub fn cards(&self) -> impl Iterator<Item = RecordCard<'_>> {
        self.records.iter().map(RecordCard::new)
    }

    /// Replace the cached list with the server's; a failure is logged and
    /// leaves the list as it was
    pub async fn load(&mut self) -> Outcome {
        match self.api.list_records().await {
            Ok(records) => {
                tracing::debug!(count = records.len(), "board loaded");
                self.records = records;
                Outcome::Completed
            }
            Err(e) => {
                tracing::error!("Error fetching knowledge data: {}", e);
                Outcome::Failed(e.to_string())
            }
        }
    }

    pub fn open_form(&mut self) {
        self.dialog_open = true;
    }

    pub fn close_form(&mut self) {
        self.dialog_open = false;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
    }

    /// Replace the selected file set
    pub fn set_files(&mut self, files: Vec<UploadFile>) {
        self.draft.files = files;
    }

    /// Post the draft. Success alerts, closes the modal, clears the draft,
    /// and (unless disabled) re-reads the list. Failure alerts and keeps the
    /// modal and draft as they are.
    pub async fn submit(&mut self) -> Outcome {
        match self.api.upload(&self.draft).await {
            Ok(()) => {
                self.prompt.alert(UPLOAD_SUCCESS);
                self.close_form();
                self.draft.clear();

                if self.refresh_after_upload {
                    match self.api.list_records().await {
                        Ok(records) => self.records = records,
                        Err(e) => tracing::warn!("Failed to refresh after upload: {}", e),
                    }
                }
                Outcome::Completed
            }
            Err(e) => {
                tracing::error!("Error uploading files: {}", e);
                let message = e.user_message();
                self.prompt.alert(&format!("Error: {}", message));
                Outcome::Failed(message)
            }
        }
    }

    /// Confirm, delete on the server, then drop the card locally
    pub async fn remove(&mut self, id: &str) -> Outcome {
        if !self.prompt.confirm(CONFIRM_REMOVE) {
            return Outcome::Declined;
        }

        match self.api.remove(id).await {
            Ok(()) => {
                self.records.retain(|record| record.id != id);
                Outcome::Completed
            }
            Err(e) => {
                tracing::error!(id, "Error removing knowledge data: {}", e);
                Outcome::Failed(e.to_string())
            }
        }
    }

    pub async fn dispatch(&mut self, action: Action) -> Outcome {
        match action {
            Action::Load => return self.load().await,
            Action::OpenForm => self.open_form(),
            Action::CloseForm => self.close_form(),
            Action::SetName(name) => self.set_name(name),
            Action::SetDescription(description) => self.set_description(description),
            Action::SetFiles(files) => self.set_files(files),
            Action::Submit => return self.submit().await,
            Action::Remove(id) => return self.remove(&id).await,
        }
        Outcome::Completed
    }

    pub fn view(&self) -> BoardView {
        let cards: Vec<_> = self.cards().map(|card| card.view()).collect();
        let placeholder = cards.is_empty().then_some(EMPTY_PLACEHOLDER);

        let dialog = self.dialog_open.then(|| DialogView {
            title: DIALOG_TITLE,
            name: self.draft.name.clone(),
            description: self.draft.description.clone(),
            files: self
                .draft
                .file_names()
                .into_iter()
                .map(str::to_string)
                .collect(),
        });

        BoardView {
            title: BOARD_TITLE,
            cards,
            placeholder,
            dialog,
        }
    }
}
