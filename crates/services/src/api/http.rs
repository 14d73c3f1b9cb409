use std::env;

use async_trait::async_trait;
use reqwest::{Client, Response};
use url::Url;

use quiz_core::model::{AnswerResult, OptionLabel, ProfessionId, QuestionId, ScoreState};

use super::wire::{CheckAnswerRequest, decode_answer, decode_question, decode_score};
use super::{QuestionFetch, QuizApi};
use crate::error::{QuizApiConfigError, QuizApiError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizApiConfig {
    base_url: Url,
}

impl QuizApiConfig {
    pub const DEFAULT_BASE_URL: &'static str = "http://127.0.0.1:5001";

    /// Parse a server base url such as `http://localhost:5001`.
    ///
    /// # Errors
    ///
    /// Returns `QuizApiConfigError` for unparsable urls or non-http schemes.
    pub fn new(raw: &str) -> Result<Self, QuizApiConfigError> {
        let base_url = Url::parse(raw.trim()).map_err(|source| QuizApiConfigError::InvalidBaseUrl {
            raw: raw.to_string(),
            source,
        })?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(QuizApiConfigError::UnsupportedScheme(
                base_url.scheme().to_string(),
            ));
        }
        Ok(Self { base_url })
    }

    /// Reads `QUIZ_SERVER_URL`, falling back to the local development server.
    ///
    /// # Errors
    ///
    /// Returns `QuizApiConfigError` when the variable holds an invalid url.
    pub fn from_env() -> Result<Self, QuizApiConfigError> {
        let raw = env::var("QUIZ_SERVER_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_BASE_URL.into());
        Self::new(&raw)
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url.as_str().trim_end_matches('/'))
    }
}

/// `QuizApi` backed by the quiz HTTP server.
///
/// The server tracks the score in its session cookie, so the client keeps a
/// cookie store for as long as it lives.
#[derive(Clone)]
pub struct HttpQuizApi {
    client: Client,
    config: QuizApiConfig,
}

impl HttpQuizApi {
    /// # Errors
    ///
    /// Returns `QuizApiError::Http` if the HTTP client cannot be built.
    pub fn new(config: QuizApiConfig) -> Result<Self, QuizApiError> {
        let client = Client::builder().cookie_store(true).build()?;
        Ok(Self { client, config })
    }

    #[must_use]
    pub fn config(&self) -> &QuizApiConfig {
        &self.config
    }
}

async fn read_body(response: Response) -> Result<(reqwest::StatusCode, String), QuizApiError> {
    let status = response.status();
    let body = response.text().await?;
    Ok((status, body))
}

#[async_trait]
impl QuizApi for HttpQuizApi {
    async fn fetch_question(
        &self,
        profession_id: ProfessionId,
    ) -> Result<QuestionFetch, QuizApiError> {
        let url = self.config.endpoint(&format!("api/question/{profession_id}"));
        tracing::debug!(%url, "fetching question");
        let response = self.client.get(url).send().await?;
        let (status, body) = read_body(response).await?;
        decode_question(status, &body)
    }

    async fn check_answer(
        &self,
        question_id: &QuestionId,
        answer: OptionLabel,
    ) -> Result<AnswerResult, QuizApiError> {
        let url = self.config.endpoint("api/check-answer");
        tracing::debug!(%url, %question_id, %answer, "submitting answer");
        let response = self
            .client
            .post(url)
            .json(&CheckAnswerRequest {
                question_id,
                answer,
            })
            .send()
            .await?;
        let (status, body) = read_body(response).await?;
        decode_answer(status, &body)
    }

    async fn fetch_score(&self) -> Result<ScoreState, QuizApiError> {
        let url = self.config.endpoint("api/score");
        tracing::debug!(%url, "fetching score");
        let response = self.client.get(url).send().await?;
        let (status, body) = read_body(response).await?;
        decode_score(status, &body)
    }
}
