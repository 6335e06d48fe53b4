pub mod error;
pub mod model;

pub use error::{Error, Result};
pub use model::common::{ChoiceId, QuestionId};
pub use model::question::{Choice, ChoiceSpec, Question, QuestionSpec};
