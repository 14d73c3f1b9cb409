use dioxus::prelude::*;
use dioxus_router::use_navigator;

use quiz_core::model::ProfessionId;

use crate::routes::Route;

/// Numeric profession input that opens the quiz for the entered id.
///
/// `on_typing` reports focus changes so that page-level shortcuts can stand
/// down while the user is typing.
#[component]
pub fn ProfessionPicker(
    initial: Option<u64>,
    button_label: &'static str,
    on_typing: Option<EventHandler<bool>>,
) -> Element {
    let navigator = use_navigator();
    let mut draft = use_signal(|| initial.map(|id| id.to_string()).unwrap_or_default());
    let mut invalid = use_signal(|| false);

    let submit = use_callback(move |()| {
        let parsed = draft.read().parse::<ProfessionId>();
        match parsed {
            Ok(id) => {
                invalid.set(false);
                navigator.push(Route::Quiz {
                    profession_id: id.value(),
                });
            }
            Err(_) => invalid.set(true),
        }
    });

    rsx! {
        div { class: "profession-picker",
            label { class: "profession-picker__label", r#for: "profession-input", "Profession" }
            input {
                id: "profession-input",
                class: "profession-picker__input",
                r#type: "number",
                min: "1",
                value: "{draft}",
                oninput: move |evt| draft.set(evt.value()),
                onfocus: move |_| {
                    if let Some(handler) = on_typing {
                        handler.call(true);
                    }
                },
                onblur: move |_| {
                    if let Some(handler) = on_typing {
                        handler.call(false);
                    }
                },
                onkeydown: move |evt: KeyboardEvent| {
                    if evt.data.key() == Key::Enter {
                        submit.call(());
                    }
                },
            }
            button {
                class: "btn btn-primary",
                r#type: "button",
                onclick: move |_| submit.call(()),
                "{button_label}"
            }
            if invalid() {
                p { class: "profession-picker__error", "Enter a numeric profession id." }
            }
        }
    }
}
