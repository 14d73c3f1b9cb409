mod notice_vm;
mod quiz_vm;

pub use notice_vm::{
    NOTICE_DISPLAY_WINDOW, NOTICE_FADE_IN_DELAY, NOTICE_FADE_OUT, NoticeId, NoticeSeverity,
    NoticeStack, NoticeStage, NoticeStep, NoticeVm, notice_schedule,
};
pub use quiz_vm::{
    CORRECT_NOTICE, FeedbackVm, KEYBOARD_TIP_NOTICE, QuizIntent, ScoreVm,
    focus_target_for_phase, intent_for_key, is_shortcut_chord, map_feedback, map_score,
    option_class,
};
