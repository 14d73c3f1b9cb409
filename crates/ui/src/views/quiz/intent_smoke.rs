use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::model::{
    AnswerResult, OptionLabel, ProfessionId, Question, QuestionId, QuizPhase, ScoreState,
};
use reqwest::StatusCode;
use services::{QuizLoopService, SUBMIT_FAILED_MESSAGE, ScriptedQuizApi};

use super::actions::{QuizState, use_quiz_dispatcher, use_quiz_start, use_quiz_state};
use crate::views::{NoticeHost, QuizScreen};
use crate::vm::{CORRECT_NOTICE, KEYBOARD_TIP_NOTICE, QuizIntent};

#[derive(Clone, Default)]
struct HarnessHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    state: Rc<RefCell<Option<QuizState>>>,
}

impl HarnessHandles {
    fn dispatch(&self) -> Callback<QuizIntent> {
        self.dispatch.borrow().clone().expect("dispatch registered")
    }

    fn state(&self) -> QuizState {
        self.state.borrow().clone().expect("state registered")
    }
}

#[derive(Props, Clone)]
struct HarnessProps {
    profession_id: u64,
    quiz_loop: Arc<QuizLoopService>,
    handles: HarnessHandles,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn QuizIntentHarness(props: HarnessProps) -> Element {
    let state = use_quiz_state(ProfessionId::new(props.profession_id));
    use_quiz_start(state, &props.quiz_loop);
    let dispatch = use_quiz_dispatcher(state, &props.quiz_loop);
    let mut registered = use_signal(|| false);
    if !registered() {
        registered.set(true);
        *props.handles.dispatch.borrow_mut() = Some(dispatch);
        *props.handles.state.borrow_mut() = Some(state);
    }

    let quiz = state.quiz.read().clone();
    let question_number = quiz.question_number();
    rsx! {
        span { id: "question-number", "{question_number}" }
        QuizScreen { quiz, on_intent: dispatch }
        NoticeHost { notices: state.notices }
    }
}

struct IntentHarness {
    dom: VirtualDom,
    api: ScriptedQuizApi,
    handles: HarnessHandles,
}

impl IntentHarness {
    fn new(api: ScriptedQuizApi) -> Self {
        let handles = HarnessHandles::default();
        let quiz_loop = Arc::new(QuizLoopService::new(Arc::new(api.clone())));
        let mut dom = VirtualDom::new_with_props(
            QuizIntentHarness,
            HarnessProps {
                profession_id: 3,
                quiz_loop,
                handles: handles.clone(),
            },
        );
        dom.rebuild_in_place();
        drive_dom(&mut dom);
        Self { dom, api, handles }
    }

    fn dispatch(&self, intent: QuizIntent) {
        self.handles.dispatch().call(intent);
    }

    async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        drive_dom(&mut self.dom);
    }

    async fn settle(&mut self) {
        for _ in 0..4 {
            self.drive_async().await;
        }
    }

    fn phase(&self) -> QuizPhase {
        let state = self.handles.state();
        self.dom.in_runtime(|| state.quiz.read().phase())
    }

    fn question_number(&self) -> u32 {
        let state = self.handles.state();
        self.dom.in_runtime(|| state.quiz.read().question_number())
    }

    fn notice_count(&self) -> usize {
        let state = self.handles.state();
        self.dom.in_runtime(|| state.notices.read().len())
    }

    fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

fn question(id: u64, prompt: &str) -> Question {
    Question::new(
        QuestionId::Numeric(id),
        prompt,
        ["Voltmeter", "Ammeter", "Ohmmeter", "Caliper"].map(str::to_string),
    )
}

fn graded(correct: bool, score: u32, total: u32) -> AnswerResult {
    AnswerResult {
        correct,
        correct_answer: OptionLabel::A,
        explanation: Some("Voltage is measured in parallel.".to_string()),
        score: ScoreState::new(score, total),
    }
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn failed_submit_raises_notice_and_keeps_question_open() {
    let api = ScriptedQuizApi::new();
    api.push_question(question(1, "Which tool measures voltage?"))
        .push_score(ScoreState::new(0, 0))
        .push_answer_failure(StatusCode::BAD_GATEWAY)
        .push_answer(graded(true, 1, 1));
    let mut harness = IntentHarness::new(api);
    harness.settle().await;
    assert_eq!(harness.phase(), QuizPhase::QuestionActive);

    harness.dispatch(QuizIntent::Select(OptionLabel::A));
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains(SUBMIT_FAILED_MESSAGE), "missing failure notice in {html}");
    assert!(!html.contains("option-btn selected"), "selection not rolled back in {html}");
    assert_eq!(harness.phase(), QuizPhase::QuestionActive);

    harness.dispatch(QuizIntent::Select(OptionLabel::A));
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains(CORRECT_NOTICE), "missing success notice in {html}");
    assert!(html.contains("Correct! Well done!"), "missing feedback in {html}");
    assert_eq!(harness.phase(), QuizPhase::AnsweredFeedback);
    assert_eq!(harness.api.answer_requests().len(), 2);
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn wrong_answer_raises_no_success_notice() {
    let api = ScriptedQuizApi::new();
    api.push_question(question(1, "Which tool measures voltage?"))
        .push_score(ScoreState::new(0, 0))
        .push_answer(graded(false, 0, 1));
    let mut harness = IntentHarness::new(api);
    harness.settle().await;

    harness.dispatch(QuizIntent::Select(OptionLabel::C));
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Incorrect. Learn from this!"), "missing feedback in {html}");
    assert!(!html.contains(CORRECT_NOTICE), "unexpected success notice in {html}");
    assert!(!html.contains(SUBMIT_FAILED_MESSAGE));
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn next_loads_the_following_question_and_counts_it() {
    let api = ScriptedQuizApi::new();
    api.push_question(question(1, "Which tool measures voltage?"))
        .push_score(ScoreState::new(0, 0))
        .push_answer(graded(false, 0, 1))
        .push_question(question(2, "Which tool measures current?"));
    let mut harness = IntentHarness::new(api);
    harness.settle().await;
    assert_eq!(harness.question_number(), 1);

    harness.dispatch(QuizIntent::Select(OptionLabel::B));
    harness.settle().await;
    harness.dispatch(QuizIntent::Next);
    harness.settle().await;

    assert_eq!(harness.question_number(), 2);
    assert_eq!(harness.phase(), QuizPhase::QuestionActive);
    let html = harness.render();
    assert!(html.contains("Which tool measures current?"), "missing next prompt in {html}");
    assert!(html.contains("question-number\">2<"), "stale counter in {html}");
    assert!(!html.contains("feedback-container"), "feedback not cleared in {html}");
    assert_eq!(
        harness.api.question_requests(),
        vec![ProfessionId::new(3), ProfessionId::new(3)]
    );
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn reload_recovers_from_load_failure() {
    let api = ScriptedQuizApi::new();
    api.push_question_failure(StatusCode::INTERNAL_SERVER_ERROR);
    let mut harness = IntentHarness::new(api);
    harness.settle().await;
    assert_eq!(harness.phase(), QuizPhase::Error);
    assert!(harness.render().contains("reload-btn"));

    harness
        .api
        .push_question(question(5, "Which tool measures resistance?"))
        .push_score(ScoreState::new(2, 4));
    harness.dispatch(QuizIntent::Reload);
    harness.settle().await;

    assert_eq!(harness.phase(), QuizPhase::QuestionActive);
    let html = harness.render();
    assert!(html.contains("Which tool measures resistance?"), "missing prompt in {html}");
    assert!(html.contains("50%"), "missing refreshed score in {html}");
    assert!(!html.contains("reload-btn"), "error placeholder still shown in {html}");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn notices_leave_after_their_display_window() {
    let api = ScriptedQuizApi::new();
    api.push_question(question(1, "Which tool measures voltage?"))
        .push_score(ScoreState::new(0, 0));
    let mut harness = IntentHarness::new(api);
    harness.settle().await;

    assert_eq!(harness.notice_count(), 1);
    assert!(harness.render().contains(KEYBOARD_TIP_NOTICE));

    for _ in 0..200 {
        if harness.notice_count() == 0 {
            break;
        }
        harness.drive_async().await;
    }

    assert_eq!(harness.notice_count(), 0);
    assert!(!harness.render().contains(KEYBOARD_TIP_NOTICE));
}
