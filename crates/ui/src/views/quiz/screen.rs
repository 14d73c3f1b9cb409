use dioxus::prelude::*;

use quiz_core::model::QuizPhase;
use services::{OptionState, QuizController};

use crate::views::{DEFAULT_ERROR_MESSAGE, ErrorPlaceholder, LoadingPlaceholder};
use crate::vm::{FeedbackVm, QuizIntent, ScoreVm, map_feedback, map_score, option_class};

/// Renders one snapshot of the quiz controller. Only the container for the
/// current phase is emitted.
#[component]
pub fn QuizScreen(quiz: QuizController, on_intent: EventHandler<QuizIntent>) -> Element {
    let phase = quiz.phase();
    let score = map_score(quiz.score());
    let prompt = quiz
        .question()
        .map(|question| question.prompt().to_string())
        .unwrap_or_default();
    let options = quiz.options().to_vec();
    let feedback = quiz.feedback().map(map_feedback);
    let error_message = quiz.error_message().map(str::to_string);
    let exhausted_message = quiz.exhausted_message().map(str::to_string);

    rsx! {
        ScoreBoard { score }
        match phase {
            QuizPhase::Loading => rsx! {
                div { id: "loading-container",
                    LoadingPlaceholder { message: "Loading question...".to_string() }
                }
            },
            QuizPhase::Error => rsx! {
                div { id: "loading-container",
                    ErrorPlaceholder {
                        message: error_message.unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string()),
                        on_reload: move |()| on_intent.call(QuizIntent::Reload),
                    }
                }
            },
            QuizPhase::NoQuestionsAvailable => rsx! {
                div { id: "no-questions-container", class: "no-questions",
                    h4 { "No questions available" }
                    if let Some(message) = exhausted_message {
                        p { class: "no-questions__message", "{message}" }
                    }
                    p { "Pick another profession, or try again later." }
                    button {
                        class: "btn btn-outline-primary",
                        id: "new-question-btn",
                        r#type: "button",
                        onclick: move |_| on_intent.call(QuizIntent::Next),
                        "Try Another Question"
                    }
                }
            },
            QuizPhase::QuestionActive | QuizPhase::AnsweredFeedback => rsx! {
                div { id: "question-container", class: "question fade-in",
                    p { id: "question-text", class: "question__text", "{prompt}" }
                    div { class: "question__options",
                        for option in options {
                            OptionButton { key: "{option.label}", option, on_intent }
                        }
                    }
                    if let Some(feedback) = feedback {
                        FeedbackPanel { feedback, on_intent }
                    }
                }
            },
        }
    }
}

#[component]
fn OptionButton(option: OptionState, on_intent: EventHandler<QuizIntent>) -> Element {
    let label = option.label;
    rsx! {
        button {
            class: "{option_class(&option)}",
            "data-option": "{label}",
            r#type: "button",
            disabled: option.disabled,
            onclick: move |_| on_intent.call(QuizIntent::Select(label)),
            span { class: "option-label", "{label}." }
            span { class: "option-text", "{option.text}" }
        }
    }
}

#[component]
fn ScoreBoard(score: ScoreVm) -> Element {
    rsx! {
        div { class: "scoreboard",
            span { class: "scoreboard__item",
                "Score: "
                span { id: "current-score", "{score.score_label}" }
            }
            span { class: "scoreboard__item",
                "Answered: "
                span { id: "total-questions", "{score.total_label}" }
            }
            span { class: "scoreboard__item",
                "Accuracy: "
                span { id: "percentage", "{score.percentage_label}" }
            }
            span { class: "visually-hidden", "{score.summary()}" }
        }
    }
}

#[component]
fn FeedbackPanel(feedback: FeedbackVm, on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        div { id: "feedback-container", class: "feedback",
            div { id: "feedback-alert", class: "{feedback.alert_class}",
                h5 { class: "feedback-title",
                    span { class: "feedback-icon", "{feedback.icon}" }
                    " {feedback.title}"
                }
                p {
                    "Correct answer: "
                    strong { id: "correct-answer", "{feedback.correct_answer_label}" }
                }
                p { id: "explanation", class: "feedback__explanation", "{feedback.explanation}" }
            }
            button {
                class: "btn btn-primary",
                id: "next-question-btn",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::Next),
                "Next Question"
            }
        }
    }
}
