use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::StatusCode;

use quiz_core::model::{AnswerResult, OptionLabel, ProfessionId, Question, QuestionId, ScoreState};

use super::{QuestionFetch, QuizApi};
use crate::error::QuizApiError;

/// Canned failure replayed by `ScriptedQuizApi`.
#[derive(Debug, Clone)]
enum Failure {
    Status(StatusCode),
    Rejected(String),
}

impl Failure {
    fn into_error(self) -> QuizApiError {
        match self {
            Failure::Status(status) => QuizApiError::HttpStatus(status),
            Failure::Rejected(message) => QuizApiError::Rejected(message),
        }
    }
}

type Scripted<T> = Result<T, Failure>;

#[derive(Default)]
struct Script {
    questions: VecDeque<Scripted<QuestionFetch>>,
    answers: VecDeque<Scripted<AnswerResult>>,
    scores: VecDeque<Scripted<ScoreState>>,
    question_requests: Vec<ProfessionId>,
    answer_requests: Vec<(QuestionId, OptionLabel)>,
    score_requests: usize,
}

/// In-memory `QuizApi` that replays queued responses in order.
///
/// Used for tests and offline prototyping. An empty queue answers like an
/// unreachable server (`503`). Every request is recorded so callers can
/// assert on what was sent.
#[derive(Clone, Default)]
pub struct ScriptedQuizApi {
    script: Arc<Mutex<Script>>,
}

impl ScriptedQuizApi {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn with_script<R>(&self, f: impl FnOnce(&mut Script) -> R) -> R {
        let mut guard = self
            .script
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        f(&mut guard)
    }

    pub fn push_question(&self, question: Question) -> &Self {
        self.with_script(|s| s.questions.push_back(Ok(QuestionFetch::Question(question))));
        self
    }

    pub fn push_exhausted(&self, message: impl Into<String>) -> &Self {
        let message = message.into();
        self.with_script(|s| s.questions.push_back(Ok(QuestionFetch::Exhausted { message })));
        self
    }

    pub fn push_question_failure(&self, status: StatusCode) -> &Self {
        self.with_script(|s| s.questions.push_back(Err(Failure::Status(status))));
        self
    }

    pub fn push_answer(&self, result: AnswerResult) -> &Self {
        self.with_script(|s| s.answers.push_back(Ok(result)));
        self
    }

    pub fn push_answer_failure(&self, status: StatusCode) -> &Self {
        self.with_script(|s| s.answers.push_back(Err(Failure::Status(status))));
        self
    }

    pub fn push_answer_rejection(&self, message: impl Into<String>) -> &Self {
        let message = message.into();
        self.with_script(|s| s.answers.push_back(Err(Failure::Rejected(message))));
        self
    }

    pub fn push_score(&self, score: ScoreState) -> &Self {
        self.with_script(|s| s.scores.push_back(Ok(score)));
        self
    }

    pub fn push_score_failure(&self, status: StatusCode) -> &Self {
        self.with_script(|s| s.scores.push_back(Err(Failure::Status(status))));
        self
    }

    #[must_use]
    pub fn question_requests(&self) -> Vec<ProfessionId> {
        self.with_script(|s| s.question_requests.clone())
    }

    #[must_use]
    pub fn answer_requests(&self) -> Vec<(QuestionId, OptionLabel)> {
        self.with_script(|s| s.answer_requests.clone())
    }

    #[must_use]
    pub fn score_requests(&self) -> usize {
        self.with_script(|s| s.score_requests)
    }
}

fn replay<T>(next: Option<Scripted<T>>) -> Result<T, QuizApiError> {
    match next {
        Some(Ok(value)) => Ok(value),
        Some(Err(failure)) => Err(failure.into_error()),
        None => Err(QuizApiError::HttpStatus(StatusCode::SERVICE_UNAVAILABLE)),
    }
}

#[async_trait]
impl QuizApi for ScriptedQuizApi {
    async fn fetch_question(
        &self,
        profession_id: ProfessionId,
    ) -> Result<QuestionFetch, QuizApiError> {
        replay(self.with_script(|s| {
            s.question_requests.push(profession_id);
            s.questions.pop_front()
        }))
    }

    async fn check_answer(
        &self,
        question_id: &QuestionId,
        answer: OptionLabel,
    ) -> Result<AnswerResult, QuizApiError> {
        replay(self.with_script(|s| {
            s.answer_requests.push((question_id.clone(), answer));
            s.answers.pop_front()
        }))
    }

    async fn fetch_score(&self) -> Result<ScoreState, QuizApiError> {
        replay(self.with_script(|s| {
            s.score_requests += 1;
            s.scores.pop_front()
        }))
    }
}
