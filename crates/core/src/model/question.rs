use std::collections::BTreeMap;

use crate::error::QuizModelError;
use crate::model::ids::QuestionId;
use crate::model::option::OptionLabel;

//
// ─── QUESTION ─────────────────────────────────────────────────────────────────
//

/// A multiple-choice question as served for one quiz cycle.
///
/// Every question carries exactly one text per [`OptionLabel`]. Values are
/// immutable once built; the next question replaces the whole value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    prompt: String,
    options: [String; 4],
}

impl Question {
    /// Builds a question from its four option texts in label order.
    #[must_use]
    pub fn new(id: QuestionId, prompt: impl Into<String>, options: [String; 4]) -> Self {
        Self {
            id,
            prompt: prompt.into(),
            options,
        }
    }

    /// Builds a question from a label-keyed option map, as sent by the server.
    ///
    /// # Errors
    ///
    /// Returns `QuizModelError::UnknownOptionLabel` for keys outside A-D and
    /// `QuizModelError::MissingOption` when one of the four labels is absent.
    pub fn from_option_map(
        id: QuestionId,
        prompt: impl Into<String>,
        options: BTreeMap<String, String>,
    ) -> Result<Self, QuizModelError> {
        let mut slots: [Option<String>; 4] = Default::default();
        for (key, text) in options {
            let label: OptionLabel = key.parse()?;
            slots[label.index()] = Some(text);
        }

        let [a, b, c, d] = slots;
        let take = |slot: Option<String>, label| slot.ok_or(QuizModelError::MissingOption(label));
        Ok(Self::new(
            id,
            prompt,
            [
                take(a, OptionLabel::A)?,
                take(b, OptionLabel::B)?,
                take(c, OptionLabel::C)?,
                take(d, OptionLabel::D)?,
            ],
        ))
    }

    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn option_text(&self, label: OptionLabel) -> &str {
        &self.options[label.index()]
    }

    /// Iterates options in display order.
    pub fn options(&self) -> impl Iterator<Item = (OptionLabel, &str)> {
        OptionLabel::ALL
            .into_iter()
            .map(|label| (label, self.option_text(label)))
    }
}
