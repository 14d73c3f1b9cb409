use std::collections::BTreeMap;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use quiz_core::model::{AnswerResult, OptionLabel, Question, QuestionId, ScoreState};

use super::QuestionFetch;
use crate::error::QuizApiError;

/// Every endpoint may answer with `{ "error": "..." }` instead of its payload.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Envelope<T> {
    Failure { error: String },
    Payload(T),
}

#[derive(Debug, Deserialize)]
struct QuestionPayload {
    id: QuestionId,
    question: String,
    options: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct AnswerPayload {
    correct: bool,
    correct_answer: OptionLabel,
    #[serde(default)]
    explanation: Option<String>,
    score: u32,
    total: u32,
}

#[derive(Debug, Serialize)]
pub(super) struct CheckAnswerRequest<'a> {
    pub question_id: &'a QuestionId,
    pub answer: OptionLabel,
}

fn decode_envelope<T: DeserializeOwned>(
    status: StatusCode,
    body: &str,
) -> Result<Envelope<T>, QuizApiError> {
    match serde_json::from_str::<Envelope<T>>(body) {
        Ok(envelope) => Ok(envelope),
        Err(_) if !status.is_success() => Err(QuizApiError::HttpStatus(status)),
        Err(err) => Err(QuizApiError::Decode(err)),
    }
}

/// Decode a `GET /api/question/{id}` response body.
///
/// # Errors
///
/// Returns `QuizApiError` when the body is neither a question nor an error
/// envelope, or when the question does not carry all four options.
pub fn decode_question(status: StatusCode, body: &str) -> Result<QuestionFetch, QuizApiError> {
    match decode_envelope::<QuestionPayload>(status, body)? {
        Envelope::Failure { error } => Ok(QuestionFetch::Exhausted { message: error }),
        Envelope::Payload(payload) => {
            let question =
                Question::from_option_map(payload.id, payload.question, payload.options)?;
            Ok(QuestionFetch::Question(question))
        }
    }
}

/// Decode a `POST /api/check-answer` response body.
///
/// # Errors
///
/// Returns `QuizApiError::Rejected` for error envelopes and other variants for
/// unreadable bodies.
pub fn decode_answer(status: StatusCode, body: &str) -> Result<AnswerResult, QuizApiError> {
    match decode_envelope::<AnswerPayload>(status, body)? {
        Envelope::Failure { error } => Err(QuizApiError::Rejected(error)),
        Envelope::Payload(payload) => Ok(AnswerResult {
            correct: payload.correct,
            correct_answer: payload.correct_answer,
            explanation: payload.explanation,
            score: ScoreState::new(payload.score, payload.total),
        }),
    }
}

/// Decode a `GET /api/score` response body.
///
/// # Errors
///
/// Returns `QuizApiError` for unreadable bodies or error envelopes.
pub fn decode_score(status: StatusCode, body: &str) -> Result<ScoreState, QuizApiError> {
    match decode_envelope::<ScoreState>(status, body)? {
        Envelope::Failure { error } => Err(QuizApiError::Rejected(error)),
        Envelope::Payload(score) => Ok(score),
    }
}
