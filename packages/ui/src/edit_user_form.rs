use dioxus::prelude::*;
use state::{EditField, EditForm};

/// Inline form for editing a user. The username is shown, not editable.
#[component]
pub fn EditUserForm(
    username: String,
    form: EditForm,
    busy: bool,
    on_change: EventHandler<(EditField, String)>,
    on_submit: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        form {
            class: "card edit-user-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_submit.call(());
            },
            h2 { "Editar Usuario" }
            p { class: "muted", "{username}" }

            for field in EditField::ALL {
                div {
                    key: "{field.label()}",
                    class: "field",
                    label { "{field.label()}" }
                    input {
                        r#type: "{field.input_type()}",
                        value: "{form.get(field)}",
                        oninput: move |evt: FormEvent| on_change.call((field, evt.value())),
                    }
                }
            }

            div {
                class: "dialog-actions",
                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: busy,
                    "Actualizar"
                }
                button {
                    class: "secondary",
                    r#type: "button",
                    onclick: move |_| on_cancel.call(()),
                    "Cancelar"
                }
            }
        }
    }
}
