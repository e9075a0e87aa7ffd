use dioxus::prelude::*;
use state::FieldError;

/// Labelled input with its validation error and hints underneath.
#[component]
pub fn FieldInput(
    id: String,
    label: String,
    input_type: String,
    value: String,
    error: Option<FieldError>,
    oninput: EventHandler<String>,
) -> Element {
    let class = if error.is_some() { "field has-error" } else { "field" };

    rsx! {
        div {
            class: "{class}",
            label { r#for: "{id}", "{label}" }
            input {
                id: "{id}",
                name: "{id}",
                r#type: "{input_type}",
                value: "{value}",
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
            }
            if let Some(err) = error {
                div {
                    class: "field-error",
                    p { "{err.message}" }
                    ul {
                        for detail in err.details.iter() {
                            li { key: "{detail}", "{detail}" }
                        }
                    }
                }
            }
        }
    }
}
