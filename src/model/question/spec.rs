use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::common::ChoiceId;

use super::Question;

/// A question specification.
///
/// The authoring format for questions: deserializable, with defaults for the
/// optional fields, and converted into a live [`Question`] with
/// [`Self::into_question`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSpec {
    /// Question title.
    pub title: String,
    /// Points this question is worth.
    #[serde(default = "default_points")]
    pub points: u32,
    /// Maximum number of choice IDs accepted in a single selection.
    #[serde(default = "default_max_selections")]
    pub max_selections: usize,
    /// Specifications of the question's choices, in order.
    #[serde(default)]
    pub choices: Vec<ChoiceSpec>,
}

fn default_points() -> u32 {
    Question::DEFAULT_POINTS
}

fn default_max_selections() -> usize {
    Question::DEFAULT_MAX_SELECTIONS
}

/// A choice specification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceSpec {
    /// Choice text.
    pub text: String,
    /// Whether this choice is a correct answer.
    #[serde(default)]
    pub is_correct: bool,
}

impl QuestionSpec {
    /// Convert this spec into a proper question with a unique ID.
    ///
    /// Choices are added in order, so they receive IDs 1, 2, 3, and so on.
    /// The choices flagged `is_correct` become the question's correct
    /// answers.
    pub fn into_question(self) -> Result<Question> {
        let mut question = Question::new(self.title, self.points, self.max_selections)?;
        let mut correct_ids: Vec<ChoiceId> = Vec::new();
        for spec in self.choices {
            let choice = question.add_choice(spec.text, spec.is_correct)?;
            if choice.is_correct {
                correct_ids.push(choice.id);
            }
        }
        question.set_correct_choices(correct_ids);
        Ok(question)
    }
}
