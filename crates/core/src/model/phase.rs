/// Mutually exclusive display modes of the quiz page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    /// A question request is outstanding.
    Loading,
    /// A question is shown and can be answered.
    QuestionActive,
    /// The current question was answered and feedback is shown.
    AnsweredFeedback,
    /// The server has no questions for the selected profession.
    NoQuestionsAvailable,
    /// Loading failed; the user has to retry explicitly.
    Error,
}
