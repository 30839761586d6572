//! Deriving a vision board from a finalized selection set.
//!
//! The board flattens every selected image in question order then
//! selection order, and unions all style tags into a deduplicated set.
//! Apart from `id` and `created_at` the derivation is a pure function of
//! its input, so redoing it over the same selections yields the same
//! images and tags.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::Question;
use crate::selection::SelectionSet;
use crate::time::now_unix_millis;

/// Finalization failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Nothing selected. Unreachable through a completed survey, since
    /// `advance()` demands a selection per visited question; validated
    /// here anyway.
    EmptySelection,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::EmptySelection => write!(f, "cannot build a board from no selections"),
        }
    }
}

impl std::error::Error for BoardError {}

/// The derived collage: image list plus aggregated style tags.
/// Immutable once created; redoing the survey supersedes it wholesale.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub id: Uuid,
    pub images: Vec<String>,
    pub style_tags: BTreeSet<String>,
    pub created_at: u64,
}

/// User reaction to a finished board, persisted under its own key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardFeedback {
    pub liked: bool,
    pub timestamp: u64,
}

impl BoardFeedback {
    pub fn new(liked: bool) -> Self {
        Self {
            liked,
            timestamp: now_unix_millis(),
        }
    }
}

/// Build a board from the finalized selections.
///
/// `questions` fixes the flatten order: question order first, then the
/// order each option was selected in.
pub fn finalize(questions: &[Question], selections: &SelectionSet) -> Result<Board, BoardError> {
    if selections.is_empty() {
        return Err(BoardError::EmptySelection);
    }

    let mut images = Vec::new();
    let mut style_tags = BTreeSet::new();

    for question in questions {
        for option in selections.selected(&question.id) {
            images.push(option.image.clone());
            style_tags.extend(option.tags.iter().cloned());
        }
    }

    Ok(Board {
        id: Uuid::new_v4(),
        images,
        style_tags,
        created_at: now_unix_millis(),
    })
}
