use dioxus::prelude::*;

use crate::vm::{NOTICE_FADE_OUT, NoticeId, NoticeSeverity, NoticeStack, notice_schedule};

/// Insert a transient notice and start its own fade-in/fade-out timer.
pub fn show_notice(
    mut notices: Signal<NoticeStack>,
    message: impl Into<String>,
    severity: NoticeSeverity,
) -> NoticeId {
    let id = notices.write().push(message, severity);
    spawn(async move {
        for (wait, step) in notice_schedule() {
            tokio::time::sleep(wait).await;
            let mut stack = notices.write();
            stack.apply(id, step);
            if !stack.contains(id) {
                break;
            }
        }
    });
    id
}

/// Start fading a notice now instead of waiting for its timer.
pub fn dismiss_notice(mut notices: Signal<NoticeStack>, id: NoticeId) {
    if !notices.write().dismiss(id) {
        return;
    }
    spawn(async move {
        tokio::time::sleep(NOTICE_FADE_OUT).await;
        notices.write().remove(id);
    });
}

#[component]
pub fn NoticeHost(notices: Signal<NoticeStack>) -> Element {
    let items = notices.read().notices().to_vec();
    rsx! {
        div { class: "notice-host",
            for notice in items {
                div { key: "{notice.id:?}", class: "{notice.class()}", role: "alert",
                    span { class: "notice__icon", "{notice.severity.icon()}" }
                    span { class: "notice__message", "{notice.message}" }
                    button {
                        class: "notice__close",
                        r#type: "button",
                        aria_label: "Dismiss",
                        onclick: move |_| dismiss_notice(notices, notice.id),
                        "×"
                    }
                }
            }
        }
    }
}
