#![forbid(unsafe_code)]

pub mod error;
pub mod format;
pub mod model;

pub use error::QuizModelError;
pub use format::format_percentage;
