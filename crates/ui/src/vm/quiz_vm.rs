use dioxus::prelude::Modifiers;
use quiz_core::model::{OptionLabel, QuizPhase, ScoreState};
use services::{Feedback, OptionMark, OptionState};

/// Raised when the user answers correctly.
pub const CORRECT_NOTICE: &str = "Correct answer! Keep it up!";
/// Raised once when the quiz page opens.
pub const KEYBOARD_TIP_NOTICE: &str =
    "Pro tip: Use A, B, C, D keys to select answers and Enter for next question!";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Select(OptionLabel),
    Next,
    Reload,
}

/// Map a key press (as named by the keyboard event) to a quiz intent.
///
/// Letters only answer an active, unanswered question; Enter and Space only
/// advance once feedback is on screen. Nothing fires while `typing` is set.
#[must_use]
pub fn intent_for_key(
    key: &str,
    typing: bool,
    phase: QuizPhase,
    answered: bool,
) -> Option<QuizIntent> {
    if typing {
        return None;
    }
    match key {
        "Enter" | " " => (phase == QuizPhase::AnsweredFeedback).then_some(QuizIntent::Next),
        _ => {
            let mut chars = key.chars();
            let label = match (chars.next(), chars.next()) {
                (Some(ch), None) => OptionLabel::from_char(ch)?,
                _ => return None,
            };
            (phase == QuizPhase::QuestionActive && !answered).then_some(QuizIntent::Select(label))
        }
    }
}

/// Control, Meta and Alt chords belong to the platform (copy, select all),
/// never to the quiz shortcuts. Shift is allowed so `A` works like `a`.
#[must_use]
pub fn is_shortcut_chord(modifiers: Modifiers) -> bool {
    modifiers.intersects(Modifiers::CONTROL | Modifiers::META | Modifiers::ALT)
}

/// Element that should hold focus once the page enters `phase`.
///
/// Keyboard shortcuts are handled on `#quiz-root`, so the answering phases
/// keep focus there; otherwise a disabled option button would drop focus to
/// the document body and Enter would go nowhere. Terminal phases focus their
/// only action button.
#[must_use]
pub fn focus_target_for_phase(phase: QuizPhase) -> &'static str {
    match phase {
        QuizPhase::Loading | QuizPhase::QuestionActive | QuizPhase::AnsweredFeedback => {
            "quiz-root"
        }
        QuizPhase::NoQuestionsAvailable => "new-question-btn",
        QuizPhase::Error => "reload-btn",
    }
}

#[must_use]
pub fn option_class(option: &OptionState) -> String {
    let mut class = String::from("btn btn-outline-dark w-100 text-start option-btn");
    if option.selected {
        class.push_str(" selected");
    }
    match option.mark {
        OptionMark::Correct => class.push_str(" correct"),
        OptionMark::Incorrect => class.push_str(" incorrect"),
        OptionMark::Unmarked => {}
    }
    class
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub alert_class: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub correct_answer_label: String,
    pub explanation: String,
}

#[must_use]
pub fn map_feedback(feedback: &Feedback) -> FeedbackVm {
    let (alert_class, icon, title) = if feedback.correct {
        ("alert alert-success", "✔", "Correct! Well done!")
    } else {
        ("alert alert-danger", "✖", "Incorrect. Learn from this!")
    };
    FeedbackVm {
        alert_class,
        icon,
        title,
        correct_answer_label: format!("Option {}", feedback.correct_answer),
        explanation: feedback.explanation.clone(),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreVm {
    pub score_label: String,
    pub total_label: String,
    pub percentage_label: String,
}

impl ScoreVm {
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{} of {} correct", self.score_label, self.total_label)
    }
}

#[must_use]
pub fn map_score(score: ScoreState) -> ScoreVm {
    ScoreVm {
        score_label: score.score.to_string(),
        total_label: score.total.to_string(),
        percentage_label: score.percentage_label(),
    }
}
