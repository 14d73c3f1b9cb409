use serde::{Deserialize, Serialize};

use crate::format::format_percentage;

/// Cumulative session score as last reported by the server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreState {
    pub score: u32,
    pub total: u32,
}

impl ScoreState {
    #[must_use]
    pub fn new(score: u32, total: u32) -> Self {
        Self { score, total }
    }

    #[must_use]
    pub fn percentage_label(&self) -> String {
        format_percentage(self.score, self.total)
    }
}
