//! Record Card
//!
//! Stateless rendering of a single record.

use serde::Serialize;

use super::Action;
use crate::records::Record;

/// Image shown on every card
pub const CARD_IMAGE: &str = "doc1.png";

/// Label of the card's delete button
pub const REMOVE_LABEL: &str = "Remove";

/// A card for one record; its delete button hands the id back to the board
#[derive(Debug, Clone, Copy)]
pub struct RecordCard<'a> {
    record: &'a Record,
}

/// Rendered card content
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: &'static str,
    pub button: &'static str,
}

impl<'a> RecordCard<'a> {
    pub fn new(record: &'a Record) -> Self {
        Self { record }
    }

    pub fn id(&self) -> &'a str {
        &self.record.id
    }

    pub fn view(&self) -> CardView {
        CardView {
            id: self.record.id.clone(),
            name: self.record.name.clone(),
            description: self.record.description.clone(),
            image: CARD_IMAGE,
            button: REMOVE_LABEL,
        }
    }

    /// What pressing the delete button asks the board to do
    pub fn remove_action(&self) -> Action {
        Action::Remove(self.record.id.clone())
    }
}
