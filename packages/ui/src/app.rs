use dioxus::prelude::*;

use crate::context::{use_app, AppProvider};
use crate::state::Screen;
use crate::views::{AlertModal, AuthView, ConsentView, DashboardView, ScreeningView};
use crate::MINDCHECK_CSS;

/// Root component shared by every launcher.
#[component]
pub fn MindCheck() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MINDCHECK_CSS }
        AppProvider {
            div {
                class: "app-container",
                AlertModal {}
                div {
                    class: "container",
                    Screens {}
                }
            }
        }
    }
}

/// Shows the screen the router state points at. Nothing interactive is
/// rendered until the stored session has been checked.
#[component]
fn Screens() -> Element {
    let app = use_app();
    let state = app();

    if state.session.loading {
        return rsx! {
            div { class: "loading", "Loading..." }
        };
    }

    match state.screen {
        Screen::Auth => rsx! { AuthView {} },
        Screen::Consent => rsx! { ConsentView {} },
        Screen::Dashboard => rsx! { DashboardView {} },
        Screen::Screening(questionnaire) => rsx! { ScreeningView { questionnaire } },
    }
}
