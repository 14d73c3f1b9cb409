use dioxus::document::eval;
use dioxus::prelude::*;

use quiz_core::model::{ProfessionId, QuizPhase};

use super::actions::{use_quiz_dispatcher, use_quiz_start, use_quiz_state};
use crate::context::AppContext;
use crate::views::{NoticeHost, ProfessionPicker, QuizScreen};
use crate::vm::{focus_target_for_phase, intent_for_key, is_shortcut_chord};

/// Route target. Keyed on the profession so switching professions starts a
/// fresh quiz instead of reusing the previous one's state.
#[component]
pub fn QuizPage(profession_id: u64) -> Element {
    rsx! {
        QuizView { key: "{profession_id}", profession_id }
    }
}

#[component]
pub fn QuizView(profession_id: u64) -> Element {
    let ctx = use_context::<AppContext>();
    let quiz_loop = ctx.quiz_loop();

    let state = use_quiz_state(ProfessionId::new(profession_id));
    use_quiz_start(state, &quiz_loop);
    let dispatch = use_quiz_dispatcher(state, &quiz_loop);
    let quiz = state.quiz;

    let mut typing = use_signal(|| false);
    let on_typing = use_callback(move |active: bool| typing.set(active));

    let on_key = use_callback(move |evt: KeyboardEvent| {
        if is_shortcut_chord(evt.data.modifiers()) {
            return;
        }
        let key = evt.data.key().to_string();
        let (phase, answered) = {
            let guard = quiz.read();
            (guard.phase(), guard.is_answered())
        };
        if let Some(intent) = intent_for_key(&key, typing(), phase, answered) {
            evt.prevent_default();
            dispatch.call(intent);
        }
    });

    let mut last_phase = use_signal(|| None::<QuizPhase>);
    use_effect(move || {
        let phase = quiz.read().phase();
        if last_phase() == Some(phase) {
            return;
        }
        last_phase.set(Some(phase));
        let target = focus_target_for_phase(phase);
        let mut js = format!("document.getElementById({target:?})?.focus({{ preventScroll: true }});");
        if phase == QuizPhase::AnsweredFeedback {
            js.push_str(
                "document.getElementById(\"feedback-container\")?.scrollIntoView({ behavior: \"smooth\", block: \"nearest\" });",
            );
        }
        let _ = eval(&js);
    });

    let snapshot = quiz.read().clone();
    let question_number = snapshot.question_number();

    rsx! {
        div {
            class: "page quiz-page quiz-container",
            id: "quiz-root",
            tabindex: "0",
            onkeydown: on_key,
            header { class: "quiz-page__header",
                h2 { class: "quiz-page__title",
                    "Question "
                    span { id: "question-number", "{question_number}" }
                }
                ProfessionPicker {
                    initial: Some(profession_id),
                    button_label: "Switch",
                    on_typing: Some(on_typing),
                }
            }
            QuizScreen { quiz: snapshot, on_intent: dispatch }
            NoticeHost { notices: state.notices }
        }
    }
}
