mod controller;
mod workflow;

// Public API of the quiz subsystem.
pub use controller::{
    Feedback, LOAD_FAILED_MESSAGE, LoadOutcome, LoadTicket, OptionMark, OptionState,
    QuizController, SUBMIT_FAILED_MESSAGE, SubmitOutcome, SubmitTicket,
};
pub use workflow::QuizLoopService;
