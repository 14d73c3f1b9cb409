use thiserror::Error;

use crate::model::OptionLabel;

/// Validation errors raised while building quiz model values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuizModelError {
    #[error("unknown option label: {0:?}")]
    UnknownOptionLabel(String),
    #[error("question is missing option {0}")]
    MissingOption(OptionLabel),
}
