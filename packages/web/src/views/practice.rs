use dioxus::prelude::*;

#[component]
pub fn Practice() -> Element {
    rsx! {
        ui::DomPractice {}
    }
}
