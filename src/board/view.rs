//! Board Render Model
//!
//! A plain-data snapshot of what the board shows, plus a terminal rendering.

use serde::Serialize;
use std::fmt;

use super::card::CardView;

pub const BOARD_TITLE: &str = "AlFred Knowledge Management";
pub const EMPTY_PLACEHOLDER: &str = "No knowledge cards available";
pub const DIALOG_TITLE: &str = "Upload Files";
pub const ADD_LABEL: &str = "+ Add";

/// Snapshot of the whole board
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardView {
    pub title: &'static str,
    pub cards: Vec<CardView>,
    /// Set only when there are no cards
    pub placeholder: Option<&'static str>,
    /// Set only while the upload modal is open
    pub dialog: Option<DialogView>,
}

/// The upload modal and its draft fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DialogView {
    pub title: &'static str,
    pub name: String,
    pub description: String,
    pub files: Vec<String>,
}

impl fmt::Display for BoardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}    [{}]", self.title, ADD_LABEL)?;
        writeln!(f)?;

        if let Some(placeholder) = self.placeholder {
            writeln!(f, "{}", placeholder)?;
        }

        for card in &self.cards {
            writeln!(f, "[doc] {}  (id: {})", card.name, card.id)?;
            if !card.description.is_empty() {
                writeln!(f, "      {}", card.description)?;
            }
            writeln!(f, "      [{}]", card.button)?;
        }

        if let Some(dialog) = &self.dialog {
            writeln!(f)?;
            writeln!(f, "── {} ──", dialog.title)?;
            writeln!(f, "Name: {}", dialog.name)?;
            writeln!(f, "Description: {}", dialog.description)?;
            if dialog.files.is_empty() {
                writeln!(f, "Files: (none)")?;
            } else {
                writeln!(f, "Files: {}", dialog.files.join(", "))?;
            }
            writeln!(f, "[Submit] [Cancel]")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_placeholder() {
        let view = BoardView {
            title: BOARD_TITLE,
            cards: Vec::new(),
            placeholder: Some(EMPTY_PLACEHOLDER),
            dialog: None,
        };
        let text = view.to_string();
        assert!(text.starts_with("AlFred Knowledge Management"));
        assert!(text.contains("No knowledge cards available"));
        assert!(!text.contains("Upload Files"));
    }

    #[test]
    fn test_display_cards_and_dialog() {
        let view = BoardView {
            title: BOARD_TITLE,
            cards: vec![CardView {
                id: "a1".into(),
                name: "Handbook".into(),
                description: "Onboarding".into(),
                image: "doc1.png",
                button: "Remove",
            }],
            placeholder: None,
            dialog: Some(DialogView {
                title: DIALOG_TITLE,
                name: "Policies".into(),
                description: "".into(),
                files: vec!["a.pdf".into(), "b.pdf".into()],
            }),
        };
        let text = view.to_string();
        assert!(text.contains("[doc] Handbook  (id: a1)"));
        assert!(text.contains("      Onboarding"));
        assert!(text.contains("── Upload Files ──"));
        assert!(text.contains("Files: a.pdf, b.pdf"));
        assert!(!text.contains(EMPTY_PLACEHOLDER));
    }
}
