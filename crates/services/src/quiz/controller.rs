use quiz_core::model::{
    AnswerResult, OptionLabel, ProfessionId, Question, QuestionId, QuizPhase, ScoreState,
};

use crate::api::QuestionFetch;
use crate::error::QuizApiError;

/// Shown in place of the question when loading fails.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load question. Please check your connection.";
/// Raised as a transient notice when grading an answer fails.
pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to check answer. Please try again.";

//
// ─── OPTION CONTROLS ──────────────────────────────────────────────────────────
//

/// Highlight applied to an option once the answer was graded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMark {
    Unmarked,
    Correct,
    Incorrect,
}

/// Display state of one answer option control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionState {
    pub label: OptionLabel,
    pub text: String,
    pub selected: bool,
    pub mark: OptionMark,
    pub disabled: bool,
}

impl OptionState {
    fn blank(label: OptionLabel) -> Self {
        Self {
            label,
            text: String::new(),
            selected: false,
            mark: OptionMark::Unmarked,
            disabled: false,
        }
    }
}

/// Grading details shown after a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub correct: bool,
    pub chosen: OptionLabel,
    pub correct_answer: OptionLabel,
    pub explanation: String,
}

//
// ─── TICKETS & OUTCOMES ───────────────────────────────────────────────────────
//

/// Handle for one dispatched question request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    seq: u64,
    profession_id: ProfessionId,
}

impl LoadTicket {
    #[must_use]
    pub fn profession_id(&self) -> ProfessionId {
        self.profession_id
    }

    #[must_use]
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// Handle for one dispatched answer submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitTicket {
    load_seq: u64,
    question_id: QuestionId,
    answer: OptionLabel,
}

impl SubmitTicket {
    #[must_use]
    pub fn question_id(&self) -> &QuestionId {
        &self.question_id
    }

    #[must_use]
    pub fn answer(&self) -> OptionLabel {
        self.answer
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Displayed,
    Exhausted,
    Failed,
    /// A newer request was dispatched; this response was dropped.
    Stale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The gate refused the submission; nothing was sent.
    Rejected,
    Answered { correct: bool },
    /// The submission failed and the optimistic selection was rolled back.
    Failed,
    /// The question was replaced while the submission was in flight.
    Stale,
}

//
// ─── CONTROLLER ───────────────────────────────────────────────────────────────
//

/// Lifecycle of the question currently on screen.
///
/// Every network step is split into `begin_*`, which updates the display and
/// hands out a ticket, and `finish_*`, which applies the response for that
/// ticket. Callers perform the request in between, so the controller itself
/// never waits on I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizController {
    profession_id: ProfessionId,
    phase: QuizPhase,
    question: Option<Question>,
    question_number: u32,
    options: [OptionState; 4],
    answered: bool,
    feedback: Option<Feedback>,
    score: Option<ScoreState>,
    load_seq: u64,
    error_message: Option<String>,
    exhausted_message: Option<String>,
}

impl QuizController {
    #[must_use]
    pub fn new(profession_id: ProfessionId) -> Self {
        Self {
            profession_id,
            phase: QuizPhase::Loading,
            question: None,
            question_number: 1,
            options: OptionLabel::ALL.map(OptionState::blank),
            answered: false,
            feedback: None,
            score: None,
            load_seq: 0,
            error_message: None,
            exhausted_message: None,
        }
    }

    #[must_use]
    pub fn profession_id(&self) -> ProfessionId {
        self.profession_id
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    #[must_use]
    pub fn question(&self) -> Option<&Question> {
        self.question.as_ref()
    }

    /// Ordinal shown to the user; unrelated to server question ids.
    #[must_use]
    pub fn question_number(&self) -> u32 {
        self.question_number
    }

    #[must_use]
    pub fn options(&self) -> &[OptionState] {
        &self.options
    }

    #[must_use]
    pub fn option(&self, label: OptionLabel) -> &OptionState {
        &self.options[label.index()]
    }

    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.answered
    }

    #[must_use]
    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    /// Last known score; zeroes until the server reported one.
    #[must_use]
    pub fn score(&self) -> ScoreState {
        self.score.unwrap_or_default()
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    #[must_use]
    pub fn exhausted_message(&self) -> Option<&str> {
        self.exhausted_message.as_deref()
    }

    /// Switch to the loading phase and issue a ticket for a new question.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.load_seq += 1;
        self.phase = QuizPhase::Loading;
        LoadTicket {
            seq: self.load_seq,
            profession_id: self.profession_id,
        }
    }

    /// Bump the question ordinal and start loading the next question.
    pub fn advance(&mut self) -> LoadTicket {
        self.question_number = self.question_number.saturating_add(1);
        self.begin_load()
    }

    /// Apply the response for a question request.
    pub fn finish_load(
        &mut self,
        ticket: &LoadTicket,
        result: Result<QuestionFetch, QuizApiError>,
    ) -> LoadOutcome {
        if ticket.seq != self.load_seq {
            tracing::debug!(
                seq = ticket.seq,
                latest = self.load_seq,
                "dropping superseded question response"
            );
            return LoadOutcome::Stale;
        }

        match result {
            Ok(QuestionFetch::Question(question)) => {
                self.display(question);
                LoadOutcome::Displayed
            }
            Ok(QuestionFetch::Exhausted { message }) => {
                tracing::info!(profession = %self.profession_id, %message, "question pool exhausted");
                self.question = None;
                self.feedback = None;
                self.exhausted_message = Some(message);
                self.phase = QuizPhase::NoQuestionsAvailable;
                LoadOutcome::Exhausted
            }
            Err(err) => {
                tracing::warn!(error = %err, profession = %self.profession_id, "failed to load question");
                self.question = None;
                self.feedback = None;
                self.error_message = Some(LOAD_FAILED_MESSAGE.to_string());
                self.phase = QuizPhase::Error;
                LoadOutcome::Failed
            }
        }
    }

    fn display(&mut self, question: Question) {
        for (slot, (label, text)) in self.options.iter_mut().zip(question.options()) {
            *slot = OptionState {
                text: text.to_string(),
                ..OptionState::blank(label)
            };
        }
        self.question = Some(question);
        self.answered = false;
        self.feedback = None;
        self.error_message = None;
        self.exhausted_message = None;
        self.phase = QuizPhase::QuestionActive;
    }

    /// Claim the current question for an answer.
    ///
    /// Returns `None` when the question is not accepting answers, including
    /// while an earlier submission is still in flight.
    pub fn begin_submit(&mut self, answer: OptionLabel) -> Option<SubmitTicket> {
        if self.phase != QuizPhase::QuestionActive || self.answered {
            return None;
        }
        let question_id = self.question.as_ref()?.id().clone();

        self.answered = true;
        self.options[answer.index()].selected = true;
        Some(SubmitTicket {
            load_seq: self.load_seq,
            question_id,
            answer,
        })
    }

    /// Apply the grading response for a submission.
    pub fn finish_submit(
        &mut self,
        ticket: &SubmitTicket,
        result: Result<AnswerResult, QuizApiError>,
    ) -> SubmitOutcome {
        if ticket.load_seq != self.load_seq {
            if let Ok(result) = &result {
                self.score = Some(result.score);
            }
            return SubmitOutcome::Stale;
        }

        match result {
            Ok(result) => {
                self.show_feedback(ticket.answer, &result);
                SubmitOutcome::Answered {
                    correct: result.correct,
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, question = %ticket.question_id, "failed to check answer");
                self.answered = false;
                self.options[ticket.answer.index()].selected = false;
                SubmitOutcome::Failed
            }
        }
    }

    fn show_feedback(&mut self, chosen: OptionLabel, result: &AnswerResult) {
        for option in &mut self.options {
            option.disabled = true;
            option.mark = if option.label == result.correct_answer {
                OptionMark::Correct
            } else if option.label == chosen && !result.correct {
                OptionMark::Incorrect
            } else {
                OptionMark::Unmarked
            };
        }
        self.feedback = Some(Feedback {
            correct: result.correct,
            chosen,
            correct_answer: result.correct_answer,
            explanation: result.explanation_text().to_string(),
        });
        self.score = Some(result.score);
        self.phase = QuizPhase::AnsweredFeedback;
    }

    /// Replace the cached score with a fresh server value.
    pub fn apply_score(&mut self, score: ScoreState) {
        self.score = Some(score);
    }
}
