use std::collections::HashSet;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::common::{
    next_question_id, ChoiceId, QuestionId, MAX_CHOICE_TEXT_LENGTH, MAX_POINTS, MAX_TITLE_LENGTH,
    MIN_POINTS,
};

use super::Choice;

/// A single multiple-choice question.
///
/// Owns its choices and the authoritative set of correct choice IDs used for
/// grading. Every operation validates before mutating, so a failed call
/// leaves the question exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Unique ID.
    id: QuestionId,
    /// Question title.
    title: String,
    /// Points this question is worth.
    points: u32,
    /// Maximum number of choice IDs accepted in a single selection.
    max_selections: usize,
    /// Answer choices, in insertion order.
    choices: Vec<Choice>,
    /// IDs of the choices considered correct answers.
    correct_choice_ids: HashSet<ChoiceId>,
    /// The next choice ID to assign. Never decreases, even on removal.
    next_choice_id: ChoiceId,
}

impl Question {
    /// Default points a question is worth.
    pub const DEFAULT_POINTS: u32 = 1;
    /// Default maximum number of choice IDs in a single selection.
    pub const DEFAULT_MAX_SELECTIONS: usize = 1;

    /// Create a new question with a unique ID and no choices.
    pub fn new(title: impl Into<String>, points: u32, max_selections: usize) -> Result<Self> {
        let title = title.into();
        let length = title.chars().count();
        if !(1..=MAX_TITLE_LENGTH).contains(&length) {
            return Err(Error::Validation(format!(
                "Title must be 1-{MAX_TITLE_LENGTH} characters, got {length}"
            )));
        }
        if !(MIN_POINTS..=MAX_POINTS).contains(&points) {
            return Err(Error::Validation(format!(
                "Points must be {MIN_POINTS}-{MAX_POINTS}, got {points}"
            )));
        }
        if max_selections == 0 {
            return Err(Error::Validation(
                "A question must accept at least one selection".to_string(),
            ));
        }

        let id = next_question_id();
        debug!("Created question {id} worth {points} points");
        Ok(Self {
            id,
            title,
            points,
            max_selections,
            choices: Vec::new(),
            correct_choice_ids: HashSet::new(),
            next_choice_id: 1,
        })
    }

    /// The question's unique ID.
    pub fn id(&self) -> QuestionId {
        self.id
    }

    /// The question title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Points this question is worth.
    pub fn points(&self) -> u32 {
        self.points
    }

    /// Maximum number of choice IDs accepted by [`Self::select_choices`].
    pub fn max_selections(&self) -> usize {
        self.max_selections
    }

    /// The current choices, in insertion order.
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// The IDs currently treated as correct answers.
    pub fn correct_choice_ids(&self) -> &HashSet<ChoiceId> {
        &self.correct_choice_ids
    }

    /// Look up a current choice by ID.
    pub fn choice(&self, id: ChoiceId) -> Option<&Choice> {
        self.choices.iter().find(|choice| choice.id == id)
    }

    /// Add a new choice, assigning it the next unused choice ID.
    ///
    /// The `is_correct` flag is recorded on the choice but does not mark it
    /// as a correct answer; use [`Self::set_correct_choices`] for that.
    pub fn add_choice(&mut self, text: impl Into<String>, is_correct: bool) -> Result<&Choice> {
        let text = text.into();
        let length = text.chars().count();
        if !(1..=MAX_CHOICE_TEXT_LENGTH).contains(&length) {
            return Err(Error::Validation(format!(
                "Choice text must be 1-{MAX_CHOICE_TEXT_LENGTH} characters, got {length}"
            )));
        }

        let id = self.next_choice_id;
        self.next_choice_id += 1;
        self.choices.push(Choice { id, text, is_correct });
        Ok(self.choices.last().expect("just pushed"))
    }

    /// Remove the choice with the given ID.
    ///
    /// Remaining choices keep their IDs and relative order; the removed ID is
    /// never reassigned.
    pub fn remove_choice_by_id(&mut self, id: ChoiceId) -> Result<()> {
        let index = self
            .choices
            .iter()
            .position(|choice| choice.id == id)
            .ok_or_else(|| Error::NotFound(format!("No choice with ID {id}")))?;
        self.choices.remove(index);
        Ok(())
    }

    /// Remove every choice.
    ///
    /// Does not reset the choice ID sequence and does not clear the
    /// correct-choice set.
    pub fn remove_all_choices(&mut self) {
        self.choices.clear();
    }

    /// Replace the set of correct choice IDs with exactly the given IDs.
    ///
    /// The IDs are not checked against the current choices: an ID no current
    /// choice has is inert for grading, since choice IDs are never reused.
    pub fn set_correct_choices(&mut self, ids: impl IntoIterator<Item = ChoiceId>) {
        self.correct_choice_ids = ids.into_iter().collect();
        for &id in &self.correct_choice_ids {
            if self.choice(id).is_none() {
                warn!(
                    "Question {}: correct choice ID {} does not match any current choice",
                    self.id, id
                );
            }
        }
    }

    /// Grade a submitted selection, returning the submitted IDs that are
    /// correct answers.
    ///
    /// Input order and duplicates are preserved: an ID appears in the output
    /// once for every time it appears in the input and is correct.
    /// Correctness is membership in the correct-choice set alone; submitted
    /// IDs do not need to match current choices.
    pub fn select_choices(&self, submitted: &[ChoiceId]) -> Result<Vec<ChoiceId>> {
        if submitted.len() > self.max_selections {
            return Err(Error::Validation(format!(
                "Selected {} choices, but at most {} may be selected",
                submitted.len(),
                self.max_selections
            )));
        }
        Ok(submitted
            .iter()
            .copied()
            .filter(|id| self.correct_choice_ids.contains(id))
            .collect())
    }
}
