//! Board State
//!
//! Reactive state for the knowledge board using Leptos signals.

use leptos::*;
use web_sys::File;

use crate::api;

pub const BOARD_TITLE: &str = "AlFred Knowledge Management";
pub const EMPTY_PLACEHOLDER: &str = "No knowledge cards available";
pub const CONFIRM_REMOVE: &str = "Are you sure you want to remove this knowledge card?";
pub const UPLOAD_SUCCESS: &str = "Files uploaded successfully!";

/// A knowledge record from the backend
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Knowledge {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "namedoc", default)]
    pub name: String,
    #[serde(rename = "description_doc", default)]
    pub description: String,
}

/// Board state provided to all components
#[derive(Clone, Copy)]
pub struct BoardState {
    /// Cached record list
    pub knowledge: RwSignal<Vec<Knowledge>>,
    /// Upload modal visibility
    pub dialog_open: RwSignal<bool>,
    /// Draft fields
    pub name: RwSignal<String>,
    pub description: RwSignal<String>,
    pub files: RwSignal<Vec<File>>,
}

/// Provide board state to the component tree
pub fn provide_board_state() {
    let state = BoardState {
        knowledge: create_rw_signal(Vec::new()),
        dialog_open: create_rw_signal(false),
        name: create_rw_signal(String::new()),
        description: create_rw_signal(String::new()),
        files: create_rw_signal(Vec::new()),
    };

    provide_context(state);
}

/// Drop the record with `id`, keeping the order of the rest
pub fn remove_by_id(knowledge: &mut Vec<Knowledge>, id: &str) {
    knowledge.retain(|item| item.id != id);
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

impl BoardState {
    pub fn open_form(&self) {
        self.dialog_open.set(true);
    }

    pub fn close_form(&self) {
        self.dialog_open.set(false);
    }

    fn clear_draft(&self) {
        self.name.set(String::new());
        self.description.set(String::new());
        self.files.set(Vec::new());
    }

    /// Replace the cached list; on failure log and keep what we have
    pub async fn load(self) {
        match api::fetch_knowledge().await {
            Ok(knowledge) => self.knowledge.set(knowledge),
            Err(e) => {
                web_sys::console::error_1(&format!("Error fetching knowledge data: {}", e).into());
            }
        }
    }

    /// Upload the draft; success closes the modal and reloads the list
    pub async fn submit(self) {
        let name = self.name.get_untracked();
        let description = self.description.get_untracked();
        let files = self.files.get_untracked();

        match api::upload_knowledge(&name, &description, &files).await {
            Ok(()) => {
                alert(UPLOAD_SUCCESS);
                self.close_form();
                self.clear_draft();
                self.load().await;
            }
            Err(e) => alert(&format!("Error: {}", e)),
        }
    }

    /// Confirm, delete on the server, then drop the card locally
    pub async fn remove(self, id: String) {
        if !confirm(CONFIRM_REMOVE) {
            return;
        }

        match api::remove_knowledge(&id).await {
            Ok(()) => self.knowledge.update(|knowledge| remove_by_id(knowledge, &id)),
            Err(e) => {
                web_sys::console::error_1(&format!("Error removing knowledge data: {}", e).into());
            }
        }
    }
}
