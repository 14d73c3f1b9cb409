use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::ProfessionPicker;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let default_profession = ctx.default_profession();

    rsx! {
        div { class: "page home-page",
            h2 { "Exam Practice" }
            p { class: "home-page__lead", "Pick a profession to start answering practice questions." }
            ProfessionPicker {
                initial: default_profession.map(|id| id.value()),
                button_label: "Start Practice",
            }
            if let Some(id) = default_profession {
                p { class: "home-page__resume",
                    Link { to: Route::Quiz { profession_id: id.value() }, "Continue with profession {id}" }
                }
            }
        }
    }
}
