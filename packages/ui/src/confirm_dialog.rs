use dioxus::prelude::*;

use crate::views::ModalOverlay;

/// Yes/no question in a modal. Clicking outside counts as "no".
#[component]
pub fn ConfirmDialog(
    message: String,
    #[props(default = "Eliminar".to_string())] confirm_label: String,
    #[props(default = "Cancelar".to_string())] cancel_label: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        ModalOverlay {
            on_close: move |_| on_cancel.call(()),
            div {
                class: "confirm-dialog",
                p { "{message}" }
                div {
                    class: "dialog-actions",
                    button {
                        class: "secondary",
                        onclick: move |_| on_cancel.call(()),
                        "{cancel_label}"
                    }
                    button {
                        class: "danger",
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}
