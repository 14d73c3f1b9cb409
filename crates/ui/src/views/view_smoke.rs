use std::sync::Arc;

use dioxus::prelude::*;
use quiz_core::model::{
    AnswerResult, OptionLabel, ProfessionId, Question, QuestionId, QuizPhase, ScoreState,
};
use reqwest::StatusCode;
use services::{LOAD_FAILED_MESSAGE, QuizController, QuizLoopService, ScriptedQuizApi};

use super::test_harness::{ViewKind, setup_view_harness};
use crate::views::{ErrorPlaceholder, QuizScreen};

fn sample_question() -> Question {
    Question::new(
        QuestionId::Numeric(7),
        "Which tool measures voltage?",
        ["Voltmeter", "Ammeter", "Ohmmeter", "Caliper"].map(str::to_string),
    )
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_picker_and_resume_link() {
    let mut harness = setup_view_harness(
        ViewKind::Home,
        Some(ProfessionId::new(4)),
        ScriptedQuizApi::new(),
    );
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("profession-input"), "missing picker in {html}");
    assert!(html.contains("Start Practice"), "missing start button in {html}");
    assert!(
        html.contains("Continue with profession 4"),
        "missing resume link in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_loaded_question() {
    let api = ScriptedQuizApi::new();
    api.push_question(sample_question())
        .push_score(ScoreState::new(3, 9));
    let mut harness = setup_view_harness(ViewKind::Quiz(2), None, api);

    harness.rebuild();
    assert!(harness.render().contains("Loading question..."));
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Which tool measures voltage?"), "missing prompt in {html}");
    assert!(html.contains("Voltmeter"), "missing option text in {html}");
    assert!(html.contains("id=\"question-container\""), "missing question in {html}");
    assert!(html.contains("33%"), "missing percentage in {html}");
    assert!(html.contains("Pro tip"), "missing keyboard tip in {html}");
    assert_eq!(harness.api.question_requests(), vec![ProfessionId::new(2)]);
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_exhausted_pool() {
    let api = ScriptedQuizApi::new();
    api.push_exhausted("No more questions for this profession.")
        .push_score(ScoreState::new(10, 10));
    let mut harness = setup_view_harness(ViewKind::Quiz(2), None, api);

    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("no-questions-container"), "missing container in {html}");
    assert!(html.contains("No more questions for this profession."));
    assert!(html.contains("Try Another Question"));
    assert!(!html.contains("id=\"question-container\""), "question still shown in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_load_failure_with_reload() {
    let api = ScriptedQuizApi::new();
    api.push_question_failure(StatusCode::INTERNAL_SERVER_ERROR);
    let mut harness = setup_view_harness(ViewKind::Quiz(2), None, api);

    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains(LOAD_FAILED_MESSAGE), "missing error in {html}");
    assert!(html.contains("reload-btn"), "missing reload button in {html}");
    assert!(html.contains("Try Again"));
    assert!(!html.contains("id=\"question-container\""));
}

#[component]
fn ScreenHarness(quiz: QuizController) -> Element {
    rsx! {
        QuizScreen { quiz, on_intent: move |_| {} }
    }
}

fn render_screen(quiz: QuizController) -> String {
    let mut dom = VirtualDom::new_with_props(ScreenHarness, ScreenHarnessProps { quiz });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_screen_renders_wrong_answer_feedback() {
    let api = ScriptedQuizApi::new();
    api.push_question(sample_question())
        .push_score(ScoreState::new(3, 9))
        .push_answer(AnswerResult {
            correct: false,
            correct_answer: OptionLabel::A,
            explanation: Some("A voltmeter is wired in parallel.".to_string()),
            score: ScoreState::new(3, 10),
        });
    let quiz_loop = QuizLoopService::new(Arc::new(api.clone()));
    let mut quiz = quiz_loop.initialize(ProfessionId::new(2)).await;
    quiz_loop.submit_answer(&mut quiz, OptionLabel::B).await;
    assert_eq!(quiz.phase(), QuizPhase::AnsweredFeedback);

    let html = render_screen(quiz);
    assert!(html.contains("Incorrect. Learn from this!"), "missing title in {html}");
    assert!(html.contains("Option A"), "missing correct answer in {html}");
    assert!(html.contains("A voltmeter is wired in parallel."));
    assert!(html.contains("3 of 10 correct"), "missing summary in {html}");
    assert!(html.contains("30%"));
    assert!(html.contains("option-btn correct"), "missing correct mark in {html}");
    assert!(
        html.contains("option-btn selected incorrect"),
        "missing incorrect mark in {html}"
    );
    assert!(html.contains("next-question-btn"));
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_screen_shows_placeholder_explanation() {
    let api = ScriptedQuizApi::new();
    api.push_question(sample_question())
        .push_score(ScoreState::new(0, 0))
        .push_answer(AnswerResult {
            correct: true,
            correct_answer: OptionLabel::A,
            explanation: None,
            score: ScoreState::new(1, 1),
        });
    let quiz_loop = QuizLoopService::new(Arc::new(api.clone()));
    let mut quiz = quiz_loop.initialize(ProfessionId::new(2)).await;
    quiz_loop.submit_answer(&mut quiz, OptionLabel::A).await;

    let html = render_screen(quiz);
    assert!(html.contains("Correct! Well done!"), "missing title in {html}");
    assert!(html.contains("No explanation available."));
    assert!(html.contains("100%"));
}

#[component]
fn ErrorHarness(message: String) -> Element {
    rsx! {
        ErrorPlaceholder { message, on_reload: move |()| {} }
    }
}

#[test]
fn error_placeholder_always_offers_reload() {
    for message in ["", "Server unreachable"] {
        let mut dom = VirtualDom::new_with_props(
            ErrorHarness,
            ErrorHarnessProps {
                message: message.to_string(),
            },
        );
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("reload-btn"), "missing reload button in {html}");
        assert!(html.contains("Try Again"));
        assert!(html.contains(message));
    }
}
