use dioxus::prelude::*;

/// Dialog shell: a dimmed backdrop with a titled card. A click that lands on
/// the backdrop rather than the card calls `on_close`.
#[component]
pub fn ModalOverlay(title: String, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-content",
                role: "alertdialog",
                aria_modal: "true",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                h2 { class: "card-title", "{title}" }
                {children}
            }
        }
    }
}
