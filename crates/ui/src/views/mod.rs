mod home;
mod notices;
mod placeholders;
mod profession_picker;
mod quiz;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use home::HomeView;
pub use notices::{NoticeHost, dismiss_notice, show_notice};
pub use placeholders::{
    DEFAULT_ERROR_MESSAGE, DEFAULT_LOADING_MESSAGE, ErrorPlaceholder, LoadingPlaceholder,
};
pub use profession_picker::ProfessionPicker;
pub use quiz::{QuizPage, QuizScreen, QuizView};
