//! The multi-step survey state machine.
//!
//! States are `At(i)` for each question index plus a terminal `Complete`.
//! Forward navigation requires at least one selection on the current
//! question; backward navigation never fails. The preview jump is allowed
//! as soon as anything anywhere in the set is selected.

use std::fmt;

use crate::catalog::Question;
use crate::selection::SelectionSet;

/// Non-fatal navigation failures. The UI stays on the same step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurveyError {
    /// `advance()` with nothing selected for the current question.
    NoSelectionMade { question_id: String },
    /// Preview requested before any selection exists at all.
    NothingToPreview,
}

impl fmt::Display for SurveyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurveyError::NoSelectionMade { question_id } => {
                write!(f, "select at least one image for '{question_id}' first")
            }
            SurveyError::NothingToPreview => {
                write!(f, "nothing selected yet, no board to preview")
            }
        }
    }
}

impl std::error::Error for SurveyError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurveyState {
    At(usize),
    Complete,
}

/// Drives step progression over a fixed question list, holding the
/// selection set being built.
#[derive(Debug, Clone)]
pub struct Survey {
    questions: Vec<Question>,
    selections: SelectionSet,
    state: SurveyState,
}

impl Survey {
    /// Fresh survey at the first question with nothing selected.
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            selections: SelectionSet::new(),
            state: SurveyState::At(0),
        }
    }

    /// Resume with previously persisted selections. The position restarts
    /// at the first question; re-deriving progress is out of scope.
    pub fn with_selections(questions: Vec<Question>, selections: SelectionSet) -> Self {
        Self {
            questions,
            selections,
            state: SurveyState::At(0),
        }
    }

    pub fn state(&self) -> SurveyState {
        self.state
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn selections(&self) -> &SelectionSet {
        &self.selections
    }

    pub fn selections_mut(&mut self) -> &mut SelectionSet {
        &mut self.selections
    }

    /// The question the survey is currently showing, if not complete.
    pub fn current_question(&self) -> Option<&Question> {
        match self.state {
            SurveyState::At(i) => self.questions.get(i),
            SurveyState::Complete => None,
        }
    }

    /// `(current 1-based step, total)` for display. Complete reports
    /// `(total, total)`.
    pub fn progress(&self) -> (usize, usize) {
        let total = self.questions.len();
        match self.state {
            SurveyState::At(i) => (i + 1, total),
            SurveyState::Complete => (total, total),
        }
    }

    /// Move forward one step. Requires a selection on the current
    /// question; from the last question, transitions to `Complete`.
    pub fn advance(&mut self) -> Result<SurveyState, SurveyError> {
        let i = match self.state {
            SurveyState::At(i) => i,
            SurveyState::Complete => return Ok(SurveyState::Complete),
        };

        let question = &self.questions[i];
        if self.selections.count_for(&question.id) == 0 {
            return Err(SurveyError::NoSelectionMade {
                question_id: question.id.clone(),
            });
        }

        self.state = if i + 1 < self.questions.len() {
            SurveyState::At(i + 1)
        } else {
            SurveyState::Complete
        };
        Ok(self.state)
    }

    /// Move back one step, clamped at the first question. Never fails.
    pub fn retreat(&mut self) -> SurveyState {
        if let SurveyState::At(i) = self.state {
            self.state = SurveyState::At(i.saturating_sub(1));
        }
        self.state
    }

    /// Whether the preview jump is available: any selection anywhere.
    pub fn can_preview(&self) -> bool {
        !self.selections.is_empty()
    }

    /// Jump to the board preview without mutating the selection set.
    pub fn jump_to_preview(&self) -> Result<&SelectionSet, SurveyError> {
        if self.can_preview() {
            Ok(&self.selections)
        } else {
            Err(SurveyError::NothingToPreview)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::survey_questions;

    fn survey_with_pick(picks: &[usize]) -> Survey {
        // Select the first option on each question index listed.
        let questions = survey_questions();
        let mut survey = Survey::new(questions);
        for &i in picks {
            let q = survey.questions()[i].clone();
            let opt = q.options[0].clone();
            survey.selections_mut().toggle(&q, &opt).unwrap();
        }
        survey
    }

    #[test]
    fn test_starts_at_first_question() {
        let survey = Survey::new(survey_questions());
        assert_eq!(survey.state(), SurveyState::At(0));
        assert_eq!(survey.progress(), (1, 4));
        assert_eq!(survey.current_question().unwrap().id, "fitness");
    }

    #[test]
    fn test_advance_blocked_without_selection() {
        let mut survey = Survey::new(survey_questions());
        let err = survey.advance().unwrap_err();
        assert_eq!(
            err,
            SurveyError::NoSelectionMade {
                question_id: "fitness".to_string()
            }
        );
        assert_eq!(survey.state(), SurveyState::At(0), "index unchanged");
    }

    #[test]
    fn test_advance_through_to_complete() {
        let mut survey = survey_with_pick(&[0, 1, 2, 3]);
        assert_eq!(survey.advance().unwrap(), SurveyState::At(1));
        assert_eq!(survey.advance().unwrap(), SurveyState::At(2));
        assert_eq!(survey.advance().unwrap(), SurveyState::At(3));
        assert_eq!(survey.advance().unwrap(), SurveyState::Complete);
        assert!(survey.current_question().is_none());
        assert_eq!(survey.progress(), (4, 4));
    }

    #[test]
    fn test_advance_blocked_midway() {
        // Selections on questions 0 and 2, but not 1.
        let mut survey = survey_with_pick(&[0, 2]);
        survey.advance().unwrap();
        let err = survey.advance().unwrap_err();
        assert_eq!(
            err,
            SurveyError::NoSelectionMade {
                question_id: "travel".to_string()
            }
        );
        assert_eq!(survey.state(), SurveyState::At(1));
    }

    #[test]
    fn test_retreat_clamps_at_zero() {
        let mut survey = survey_with_pick(&[0]);
        assert_eq!(survey.retreat(), SurveyState::At(0));
        survey.advance().unwrap();
        assert_eq!(survey.retreat(), SurveyState::At(0));
    }

    #[test]
    fn test_preview_requires_any_selection() {
        let survey = Survey::new(survey_questions());
        assert!(!survey.can_preview());
        assert_eq!(
            survey.jump_to_preview().unwrap_err(),
            SurveyError::NothingToPreview
        );

        // A selection on a later question is enough, even while at(0).
        let survey = survey_with_pick(&[2]);
        assert_eq!(survey.state(), SurveyState::At(0));
        assert!(survey.can_preview());
        assert_eq!(survey.jump_to_preview().unwrap().total_selected(), 1);
    }

    #[test]
    fn test_restored_session_restarts_at_zero() {
        let mut seed = survey_with_pick(&[0, 1, 2, 3]);
        while seed.state() != SurveyState::Complete {
            seed.advance().unwrap();
        }

        let restored =
            Survey::with_selections(survey_questions(), seed.selections().snapshot());
        assert_eq!(restored.state(), SurveyState::At(0), "position not restored");
        assert_eq!(restored.selections().total_selected(), 4);
    }

    #[test]
    fn test_advance_after_complete_is_noop() {
        let mut survey = survey_with_pick(&[0, 1, 2, 3]);
        for _ in 0..4 {
            survey.advance().unwrap();
        }
        assert_eq!(survey.advance().unwrap(), SurveyState::Complete);
    }
}
