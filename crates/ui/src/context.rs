use std::sync::Arc;

use quiz_core::model::ProfessionId;
use services::QuizLoopService;

pub trait UiApp: Send + Sync {
    /// Profession to offer on the home page, if one was configured at launch.
    fn default_profession(&self) -> Option<ProfessionId>;

    fn quiz_loop(&self) -> Arc<QuizLoopService>;
}

#[derive(Clone)]
pub struct AppContext {
    default_profession: Option<ProfessionId>,
    quiz_loop: Arc<QuizLoopService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            default_profession: app.default_profession(),
            quiz_loop: app.quiz_loop(),
        }
    }

    #[must_use]
    pub fn default_profession(&self) -> Option<ProfessionId> {
        self.default_profession
    }

    #[must_use]
    pub fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
