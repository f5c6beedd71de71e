//! The single alert slot, rendered as a modal.

use dioxus::prelude::*;

use super::ModalOverlay;
use crate::context::{use_app, use_dispatch};
use crate::controller::Command;

/// Shows the current alert, if any. Dismissing empties the slot.
#[component]
pub fn AlertModal() -> Element {
    let app = use_app();
    let dispatch = use_dispatch();

    let Some(alert) = app().alert else {
        return rsx! {};
    };

    let dismiss = move || {
        spawn(async move {
            dispatch.send(Command::DismissAlert).await;
        });
    };

    rsx! {
        ModalOverlay {
            title: alert.title.clone(),
            on_close: move |_| dismiss(),
            p { class: "paragraph alert-message", "{alert.message}" }
            button {
                class: "button",
                onclick: move |_| dismiss(),
                "OK"
            }
        }
    }
}
