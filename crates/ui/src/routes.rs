use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{HomeView, QuizPage};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/quiz/:profession_id", QuizPage)] Quiz { profession_id: u64 },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            nav { class: "topbar",
                Link { to: Route::Home {}, class: "topbar__brand", "Exam Practice" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
