mod http;
mod scripted;
mod wire;

use async_trait::async_trait;
use quiz_core::model::{AnswerResult, OptionLabel, ProfessionId, Question, QuestionId, ScoreState};

use crate::error::QuizApiError;

pub use http::{HttpQuizApi, QuizApiConfig};
pub use scripted::ScriptedQuizApi;
pub use wire::{decode_answer, decode_question, decode_score};

/// What the server handed back for a question request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionFetch {
    Question(Question),
    /// The pool for the profession is exhausted; carries the server message.
    Exhausted { message: String },
}

/// Contract for the quiz server endpoints the client consumes.
#[async_trait]
pub trait QuizApi: Send + Sync {
    /// Fetch the next question for a profession.
    ///
    /// # Errors
    ///
    /// Returns `QuizApiError` for transport, status or decoding failures.
    async fn fetch_question(&self, profession_id: ProfessionId)
    -> Result<QuestionFetch, QuizApiError>;

    /// Submit an answer for grading.
    ///
    /// # Errors
    ///
    /// Returns `QuizApiError::Rejected` when the server answers with an error
    /// envelope, or other `QuizApiError` variants for transport failures.
    async fn check_answer(
        &self,
        question_id: &QuestionId,
        answer: OptionLabel,
    ) -> Result<AnswerResult, QuizApiError>;

    /// Fetch the running session score.
    ///
    /// # Errors
    ///
    /// Returns `QuizApiError` for transport, status or decoding failures.
    async fn fetch_score(&self) -> Result<ScoreState, QuizApiError>;
}
