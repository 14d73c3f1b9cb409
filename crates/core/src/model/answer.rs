use crate::model::option::OptionLabel;
use crate::model::score::ScoreState;

/// Text shown when the server sends no explanation for an answer.
pub const NO_EXPLANATION_PLACEHOLDER: &str = "No explanation available.";

/// The server's verdict on one submitted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerResult {
    pub correct: bool,
    pub correct_answer: OptionLabel,
    pub explanation: Option<String>,
    pub score: ScoreState,
}

impl AnswerResult {
    /// Explanation text to display, falling back to a fixed placeholder when
    /// the server sent none or only whitespace.
    #[must_use]
    pub fn explanation_text(&self) -> &str {
        self.explanation
            .as_deref()
            .filter(|text| !text.trim().is_empty())
            .unwrap_or(NO_EXPLANATION_PLACEHOLDER)
    }
}
