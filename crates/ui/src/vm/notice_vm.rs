use std::time::Duration;

/// Delay between inserting a notice and fading it in.
pub const NOTICE_FADE_IN_DELAY: Duration = Duration::from_millis(100);
/// How long after insertion a notice starts fading out.
pub const NOTICE_DISPLAY_WINDOW: Duration = Duration::from_secs(3);
/// Length of the fade-out before the notice is removed.
pub const NOTICE_FADE_OUT: Duration = Duration::from_millis(300);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NoticeId(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeSeverity {
    Success,
    Info,
    Warning,
    Danger,
}

impl NoticeSeverity {
    #[must_use]
    pub fn alert_class(self) -> &'static str {
        match self {
            NoticeSeverity::Success => "alert alert-success",
            NoticeSeverity::Info => "alert alert-info",
            NoticeSeverity::Warning => "alert alert-warning",
            NoticeSeverity::Danger => "alert alert-danger",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            NoticeSeverity::Success => "✔",
            _ => "⚠",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeStage {
    Entering,
    Shown,
    Leaving,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoticeVm {
    pub id: NoticeId,
    pub message: String,
    pub severity: NoticeSeverity,
    pub stage: NoticeStage,
}

impl NoticeVm {
    #[must_use]
    pub fn class(&self) -> String {
        let stage = match self.stage {
            NoticeStage::Entering => "notice--entering",
            NoticeStage::Shown => "notice--shown",
            NoticeStage::Leaving => "notice--leaving",
        };
        format!("notice {} {stage}", self.severity.alert_class())
    }
}

/// Step applied to a single notice by its own timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeStep {
    Reveal,
    Dismiss,
    Remove,
}

/// Timer steps for one notice, each with the wait before it is applied.
///
/// The waits add up to reveal at 100 ms, fade at 3 s and removal at 3.3 s
/// after insertion.
#[must_use]
pub fn notice_schedule() -> [(Duration, NoticeStep); 3] {
    [
        (NOTICE_FADE_IN_DELAY, NoticeStep::Reveal),
        (
            NOTICE_DISPLAY_WINDOW.saturating_sub(NOTICE_FADE_IN_DELAY),
            NoticeStep::Dismiss,
        ),
        (NOTICE_FADE_OUT, NoticeStep::Remove),
    ]
}

/// Notices currently on screen, oldest first.
///
/// Each notice is driven by its own timer; the stack only records stages and
/// never orders or throttles them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeStack {
    next_id: u64,
    notices: Vec<NoticeVm>,
}

impl NoticeStack {
    pub fn push(&mut self, message: impl Into<String>, severity: NoticeSeverity) -> NoticeId {
        self.next_id += 1;
        let id = NoticeId(self.next_id);
        self.notices.push(NoticeVm {
            id,
            message: message.into(),
            severity,
            stage: NoticeStage::Entering,
        });
        id
    }

    /// Apply a timer step. Returns false when the notice is gone or already
    /// past that step.
    pub fn apply(&mut self, id: NoticeId, step: NoticeStep) -> bool {
        match step {
            NoticeStep::Reveal => self.reveal(id),
            NoticeStep::Dismiss => self.dismiss(id),
            NoticeStep::Remove => self.remove(id),
        }
    }

    pub fn reveal(&mut self, id: NoticeId) -> bool {
        match self.find_mut(id) {
            Some(notice) if notice.stage == NoticeStage::Entering => {
                notice.stage = NoticeStage::Shown;
                true
            }
            _ => false,
        }
    }

    pub fn dismiss(&mut self, id: NoticeId) -> bool {
        match self.find_mut(id) {
            Some(notice) if notice.stage != NoticeStage::Leaving => {
                notice.stage = NoticeStage::Leaving;
                true
            }
            _ => false,
        }
    }

    pub fn remove(&mut self, id: NoticeId) -> bool {
        let before = self.notices.len();
        self.notices.retain(|notice| notice.id != id);
        self.notices.len() != before
    }

    #[must_use]
    pub fn contains(&self, id: NoticeId) -> bool {
        self.notices.iter().any(|notice| notice.id == id)
    }

    #[must_use]
    pub fn notices(&self) -> &[NoticeVm] {
        &self.notices
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.notices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    fn find_mut(&mut self, id: NoticeId) -> Option<&mut NoticeVm> {
        self.notices.iter_mut().find(|notice| notice.id == id)
    }
}
