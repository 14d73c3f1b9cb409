use std::sync::Arc;

use quiz_core::model::{AnswerResult, OptionLabel, ProfessionId, ScoreState};

use super::controller::{LoadOutcome, LoadTicket, QuizController, SubmitOutcome, SubmitTicket};
use crate::api::{QuestionFetch, QuizApi};
use crate::error::QuizApiError;

/// Drives a `QuizController` against the quiz server.
///
/// Two ways in, one sequence:
/// - the composites (`initialize`, `load_question`, `advance_question`,
///   `submit_answer`, `refresh_score`) hold the controller by `&mut` across
///   the request and are the headless path used by tests and tooling;
/// - callers that keep the controller in shared reactive state (the desktop
///   quiz page) call `fetch_question`/`check_answer`/`current_score` between
///   the controller's `begin_*` and `finish_*` steps instead.
///
/// Both must keep the same order: question first, then a best-effort score.
/// Changes to one path belong in the other.
#[derive(Clone)]
pub struct QuizLoopService {
    api: Arc<dyn QuizApi>,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(api: Arc<dyn QuizApi>) -> Self {
        Self { api }
    }

    /// Request the question a load ticket was issued for.
    ///
    /// # Errors
    ///
    /// Returns `QuizApiError` from the underlying API.
    pub async fn fetch_question(&self, ticket: &LoadTicket) -> Result<QuestionFetch, QuizApiError> {
        self.api.fetch_question(ticket.profession_id()).await
    }

    /// Send the answer a submit ticket was issued for.
    ///
    /// # Errors
    ///
    /// Returns `QuizApiError` from the underlying API.
    pub async fn check_answer(&self, ticket: &SubmitTicket) -> Result<AnswerResult, QuizApiError> {
        self.api
            .check_answer(ticket.question_id(), ticket.answer())
            .await
    }

    /// Best-effort score fetch; failures are logged and yield `None`.
    pub async fn current_score(&self) -> Option<ScoreState> {
        match self.api.fetch_score().await {
            Ok(score) => Some(score),
            Err(err) => {
                tracing::warn!(error = %err, "failed to refresh score");
                None
            }
        }
    }

    /// Build a controller for a profession, load its first question and the
    /// current score. Failures end in the controller's error phase.
    pub async fn initialize(&self, profession_id: ProfessionId) -> QuizController {
        tracing::info!(profession = %profession_id, "starting quiz");
        let mut quiz = QuizController::new(profession_id);
        self.load_question(&mut quiz).await;
        self.refresh_score(&mut quiz).await;
        quiz
    }

    pub async fn load_question(&self, quiz: &mut QuizController) -> LoadOutcome {
        let ticket = quiz.begin_load();
        let result = self.fetch_question(&ticket).await;
        quiz.finish_load(&ticket, result)
    }

    pub async fn advance_question(&self, quiz: &mut QuizController) -> LoadOutcome {
        let ticket = quiz.advance();
        let result = self.fetch_question(&ticket).await;
        quiz.finish_load(&ticket, result)
    }

    pub async fn submit_answer(
        &self,
        quiz: &mut QuizController,
        answer: OptionLabel,
    ) -> SubmitOutcome {
        let Some(ticket) = quiz.begin_submit(answer) else {
            return SubmitOutcome::Rejected;
        };
        let result = self.check_answer(&ticket).await;
        quiz.finish_submit(&ticket, result)
    }

    /// Refresh the cached score. Returns whether the refresh succeeded.
    pub async fn refresh_score(&self, quiz: &mut QuizController) -> bool {
        match self.current_score().await {
            Some(score) => {
                quiz.apply_score(score);
                true
            }
            None => false,
        }
    }
}
