use serde::{Deserialize, Serialize};

use crate::model::common::ChoiceId;

/// One answer option belonging to a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Unique ID within the owning question.
    pub id: ChoiceId,
    /// Display text.
    pub text: String,
    /// Whether this choice was marked correct when it was added.
    /// Grading is driven by the question's correct-choice set, not this flag.
    pub is_correct: bool,
}
