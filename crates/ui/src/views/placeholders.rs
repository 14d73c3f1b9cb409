use dioxus::prelude::*;

pub const DEFAULT_LOADING_MESSAGE: &str = "Loading...";
pub const DEFAULT_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Spinner shown in place of a region while its content loads.
#[component]
pub fn LoadingPlaceholder(
    #[props(default = DEFAULT_LOADING_MESSAGE.to_string())] message: String,
) -> Element {
    rsx! {
        div { class: "placeholder placeholder--loading",
            div { class: "spinner", role: "status",
                span { class: "visually-hidden", "Loading..." }
            }
            p { class: "placeholder__message", "{message}" }
        }
    }
}

/// Replaces a region after a failure. The reload action is always offered,
/// whatever the message says.
#[component]
pub fn ErrorPlaceholder(
    #[props(default = DEFAULT_ERROR_MESSAGE.to_string())] message: String,
    on_reload: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "placeholder placeholder--error",
            span { class: "placeholder__icon", "⚠" }
            h5 { "Oops!" }
            p { class: "placeholder__message", "{message}" }
            button {
                class: "btn btn-primary",
                id: "reload-btn",
                r#type: "button",
                onclick: move |_| on_reload.call(()),
                "Try Again"
            }
        }
    }
}
