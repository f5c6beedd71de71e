//! Dashboard: greeting, mood check-in, and screening launchers.

use api::Questionnaire;
use dioxus::prelude::*;

use crate::context::{use_app, use_dispatch};
use crate::controller::Command;

/// Mood faces, worst to best. The index is the mood choice sent to the controller.
pub const MOOD_FACES: [&str; 5] = ["😞", "😟", "😐", "🙂", "😄"];

#[component]
pub fn DashboardView() -> Element {
    let app = use_app();
    let dispatch = use_dispatch();
    let mut notes = use_signal(String::new);

    let greeting = format!(
        "Hello, {}!",
        app()
            .session
            .user
            .as_ref()
            .map(|user| user.display_name().to_string())
            .unwrap_or_else(|| "User".to_string())
    );

    rsx! {
        div {
            class: "page",

            header {
                class: "header",
                h1 { class: "title", "{greeting}" }
                button {
                    class: "logout-button",
                    onclick: move |_| async move {
                        dispatch.send(Command::SignOut).await;
                    },
                    "Logout"
                }
            }

            div {
                class: "card",
                h2 { class: "card-title", "How are you feeling today?" }
                div {
                    class: "emoji-row",
                    for (choice, face) in MOOD_FACES.iter().enumerate() {
                        button {
                            key: "{choice}",
                            class: "emoji-button",
                            onclick: move |_| async move {
                                let outcome = dispatch
                                    .send(Command::LogMood { choice, notes: notes() })
                                    .await;
                                if outcome.is_applied() {
                                    notes.set(String::new());
                                }
                            },
                            {*face}
                        }
                    }
                }
                textarea {
                    class: "input notes",
                    placeholder: "Add a note (optional)",
                    value: notes(),
                    oninput: move |evt: FormEvent| notes.set(evt.value()),
                }
            }

            div {
                class: "card",
                h2 { class: "card-title", "Screening Tools" }
                p { class: "paragraph", "Take a quick check-up to understand your mental state." }
                for (index, questionnaire) in Questionnaire::ALL.into_iter().enumerate() {
                    button {
                        key: "{index}",
                        class: "button",
                        onclick: move |_| async move {
                            dispatch.send(Command::OpenScreening(questionnaire)).await;
                        },
                        {questionnaire.launch_label()}
                    }
                }
            }
        }
    }
}
