//! Questionnaire screen.

use api::{Questionnaire, ResponseSheet, ANSWER_OPTIONS};
use dioxus::prelude::*;

use crate::context::use_dispatch;
use crate::controller::Command;

/// Renders every item of `questionnaire` with its four answer options.
/// Submission goes through the controller, which refuses incomplete sheets.
#[component]
pub fn ScreeningView(questionnaire: Questionnaire) -> Element {
    let dispatch = use_dispatch();
    let mut sheet = use_signal(|| ResponseSheet::new(questionnaire));
    let current = sheet();

    rsx! {
        div {
            class: "page",
            h1 { class: "title", {questionnaire.title()} }
            p { class: "paragraph", {questionnaire.prompt()} }

            for (item, question) in questionnaire.items().iter().enumerate() {
                div {
                    key: "{item}",
                    class: "question-card",
                    p { class: "question-text", {format!("{}. {}", item + 1, question)} }
                    div {
                        class: "options",
                        for (value, label) in (0u8..).zip(ANSWER_OPTIONS) {
                            button {
                                key: "{value}",
                                class: if current.answer_at(item) == Some(value) { "option-button selected" } else { "option-button" },
                                onclick: move |_| {
                                    if let Err(e) = sheet.write().answer(item, value) {
                                        tracing::warn!(error = %e, "Rejected answer");
                                    }
                                },
                                {label}
                            }
                        }
                    }
                }
            }

            button {
                class: "button",
                onclick: move |_| async move {
                    dispatch.send(Command::SubmitScreening(sheet())).await;
                },
                "Submit & See Score"
            }
            button {
                class: "button secondary",
                onclick: move |_| async move {
                    dispatch.send(Command::CloseScreening).await;
                },
                "Back to Dashboard"
            }
        }
    }
}
