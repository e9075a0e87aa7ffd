use api::ServerError;
use dioxus::prelude::*;
use state::presenter::{present, SUGGESTIONS_HEADING};

use crate::icons::{FaTriangleExclamation, FaXmark};
use crate::views::ModalOverlay;
use crate::Icon;

/// Modal explaining a failed submission. Stateless: closing is up to the caller.
#[component]
pub fn ErrorModal(error: Option<ServerError>, on_close: EventHandler<()>) -> Element {
    let Some(shown) = present(error.as_ref()) else {
        return rsx! {};
    };
    let presentation = shown.presentation;
    let status_line = shown.status_line();

    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),
            div {
                class: "error-modal",
                div {
                    class: "error-modal-header",
                    Icon { icon: FaTriangleExclamation, width: 20, height: 20 }
                    h2 { "{presentation.title}" }
                    button {
                        class: "icon-button",
                        title: "Cerrar",
                        onclick: move |_| on_close.call(()),
                        Icon { icon: FaXmark, width: 14, height: 14 }
                    }
                }
                p { class: "error-modal-description", "{presentation.description}" }
                h3 { "{SUGGESTIONS_HEADING}" }
                ul {
                    for suggestion in presentation.suggestions.iter() {
                        li { key: "{suggestion}", "{suggestion}" }
                    }
                }
                if let Some(line) = status_line {
                    p { class: "error-modal-status", "{line}" }
                }
            }
        }
    }
}
