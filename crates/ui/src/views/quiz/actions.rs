use std::sync::Arc;

use dioxus::prelude::*;

use quiz_core::model::ProfessionId;
use services::{QuizController, QuizLoopService, SUBMIT_FAILED_MESSAGE, SubmitOutcome};

use crate::views::show_notice;
use crate::vm::{CORRECT_NOTICE, KEYBOARD_TIP_NOTICE, NoticeSeverity, NoticeStack, QuizIntent};

/// Reactive state of one quiz page.
#[derive(Clone, Copy, PartialEq)]
pub struct QuizState {
    pub quiz: Signal<QuizController>,
    pub notices: Signal<NoticeStack>,
}

pub fn use_quiz_state(profession: ProfessionId) -> QuizState {
    QuizState {
        quiz: use_signal(|| QuizController::new(profession)),
        notices: use_signal(NoticeStack::default),
    }
}

/// Raise the keyboard tip and load the first question, once per mount.
pub fn use_quiz_start(state: QuizState, quiz_loop: &Arc<QuizLoopService>) {
    let quiz_loop = Arc::clone(quiz_loop);
    use_hook(move || {
        show_notice(state.notices, KEYBOARD_TIP_NOTICE, NoticeSeverity::Info);
        spawn(async move {
            start_quiz(&quiz_loop, state.quiz).await;
        });
    });
}

pub fn use_quiz_dispatcher(
    state: QuizState,
    quiz_loop: &Arc<QuizLoopService>,
) -> Callback<QuizIntent> {
    let quiz_loop = Arc::clone(quiz_loop);
    use_callback(move |intent: QuizIntent| {
        let QuizState { mut quiz, notices } = state;
        let profession = quiz.read().profession_id();
        tracing::debug!(?intent, profession = %profession, "quiz intent");
        match intent {
            QuizIntent::Select(answer) => {
                // The gate is taken before anything is awaited so a second
                // click or key press in the same frame is refused.
                let Some(ticket) = quiz.write().begin_submit(answer) else {
                    tracing::debug!(%answer, "answer ignored; question is not accepting answers");
                    return;
                };
                let quiz_loop = Arc::clone(&quiz_loop);
                spawn(async move {
                    let result = quiz_loop.check_answer(&ticket).await;
                    let outcome = quiz.write().finish_submit(&ticket, result);
                    match outcome {
                        SubmitOutcome::Answered { correct: true } => {
                            show_notice(notices, CORRECT_NOTICE, NoticeSeverity::Success);
                        }
                        SubmitOutcome::Failed => {
                            show_notice(notices, SUBMIT_FAILED_MESSAGE, NoticeSeverity::Danger);
                        }
                        SubmitOutcome::Answered { correct: false }
                        | SubmitOutcome::Rejected
                        | SubmitOutcome::Stale => {}
                    }
                });
            }
            QuizIntent::Next => {
                let ticket = quiz.write().advance();
                let quiz_loop = Arc::clone(&quiz_loop);
                spawn(async move {
                    let result = quiz_loop.fetch_question(&ticket).await;
                    quiz.write().finish_load(&ticket, result);
                });
            }
            QuizIntent::Reload => {
                let quiz_loop = Arc::clone(&quiz_loop);
                spawn(async move {
                    start_quiz(&quiz_loop, quiz).await;
                });
            }
        }
    })
}

/// Signal-side counterpart of `QuizLoopService::initialize`: the same load
/// then best-effort score, applied step by step so no signal borrow is held
/// across an await.
pub async fn start_quiz(quiz_loop: &QuizLoopService, mut quiz: Signal<QuizController>) {
    let ticket = quiz.write().begin_load();
    tracing::info!(profession = %ticket.profession_id(), "starting quiz");
    let result = quiz_loop.fetch_question(&ticket).await;
    quiz.write().finish_load(&ticket, result);
    if let Some(score) = quiz_loop.current_score().await {
        quiz.write().apply_score(score);
    }
}
