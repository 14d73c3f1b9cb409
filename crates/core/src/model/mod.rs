mod answer;
mod ids;
mod option;
mod phase;
mod question;
mod score;

pub use answer::{AnswerResult, NO_EXPLANATION_PLACEHOLDER};
pub use ids::{ParseIdError, ProfessionId, QuestionId};
pub use option::OptionLabel;
pub use phase::QuizPhase;
pub use question::Question;
pub use score::ScoreState;
