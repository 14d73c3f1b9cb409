#![forbid(unsafe_code)]

pub mod api;
pub mod error;
pub mod quiz;

pub use error::{QuizApiConfigError, QuizApiError};

pub use api::{HttpQuizApi, QuestionFetch, QuizApi, QuizApiConfig, ScriptedQuizApi};
pub use quiz::{
    Feedback, LOAD_FAILED_MESSAGE, LoadOutcome, LoadTicket, OptionMark, OptionState,
    QuizController, QuizLoopService, SUBMIT_FAILED_MESSAGE, SubmitOutcome, SubmitTicket,
};
