use dioxus::prelude::*;

use crate::context::use_dispatch;
use crate::controller::Command;

#[component]
pub fn ConsentView() -> Element {
    let dispatch = use_dispatch();
    let mut submitting = use_signal(|| false);

    let handle_agree = move |_| async move {
        submitting.set(true);
        if !dispatch.send(Command::GiveConsent).await.is_applied() {
            submitting.set(false);
        }
    };

    rsx! {
        div {
            class: "page",
            h1 { class: "title", "Consent" }
            p {
                class: "paragraph",
                "This application collects personal and sensitive data to provide mental health support. Your data will be stored securely and encrypted."
            }
            p {
                class: "paragraph",
                "By clicking \"I Agree,\" you consent to the collection and processing of your data. You can withdraw your consent at any time."
            }
            button {
                class: "button",
                disabled: submitting(),
                onclick: handle_agree,
                "I Agree"
            }
        }
    }
}
