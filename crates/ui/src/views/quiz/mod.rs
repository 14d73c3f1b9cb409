mod actions;
mod screen;
mod view;

#[cfg(test)]
mod intent_smoke;

pub use screen::QuizScreen;
pub use view::{QuizPage, QuizView};
