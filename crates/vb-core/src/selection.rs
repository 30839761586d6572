//! Per-question selection state and the toggle rules governing it.
//!
//! Selection identity is the option label. Toggling an already-selected
//! label removes it regardless of the cap; adding past the cap is refused
//! with the set unchanged, which the caller surfaces as a transient warning.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::{Question, StyleOption};

/// Recoverable selection failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// The per-question cap was hit; the set is unchanged.
    LimitExceeded { question_id: String, max: usize },
    /// The label does not name an option of the given question.
    UnknownOption { question_id: String, label: String },
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::LimitExceeded { question_id, max } => write!(
                f,
                "you can select up to {max} images for '{question_id}'"
            ),
            SelectionError::UnknownOption { question_id, label } => {
                write!(f, "no option '{label}' in question '{question_id}'")
            }
        }
    }
}

impl std::error::Error for SelectionError {}

/// What a toggle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggled {
    Added,
    Removed,
}

/// The user's selections, keyed by question id, in selection order.
///
/// Serializes to the JSON blob persisted under `visionBoardSelections`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSet {
    entries: BTreeMap<String, Vec<StyleOption>>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle `option` for `question`. Removes it when already selected
    /// (matched by label), appends it when under the cap, and otherwise
    /// fails with the set untouched. Only the entry for this question is
    /// ever mutated.
    pub fn toggle(
        &mut self,
        question: &Question,
        option: &StyleOption,
    ) -> Result<Toggled, SelectionError> {
        let chosen = self.entries.entry(question.id.clone()).or_default();

        if let Some(pos) = chosen.iter().position(|o| o.label == option.label) {
            chosen.remove(pos);
            if chosen.is_empty() {
                self.entries.remove(&question.id);
            }
            return Ok(Toggled::Removed);
        }

        if chosen.len() >= question.max_selections {
            return Err(SelectionError::LimitExceeded {
                question_id: question.id.clone(),
                max: question.max_selections,
            });
        }

        chosen.push(option.clone());
        Ok(Toggled::Added)
    }

    /// Toggle by label, resolving the option from the question's catalog.
    pub fn toggle_label(
        &mut self,
        question: &Question,
        label: &str,
    ) -> Result<Toggled, SelectionError> {
        let option = question
            .option_by_label(label)
            .ok_or_else(|| SelectionError::UnknownOption {
                question_id: question.id.clone(),
                label: label.to_string(),
            })?
            .clone();
        self.toggle(question, &option)
    }

    /// Read-only copy of the whole set.
    pub fn snapshot(&self) -> Self {
        self.clone()
    }

    /// Options chosen for one question, in selection order.
    pub fn selected(&self, question_id: &str) -> &[StyleOption] {
        self.entries
            .get(question_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_selected(&self, question_id: &str, label: &str) -> bool {
        self.selected(question_id).iter().any(|o| o.label == label)
    }

    pub fn count_for(&self, question_id: &str) -> usize {
        self.selected(question_id).len()
    }

    /// Total selections across all questions.
    pub fn total_selected(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
