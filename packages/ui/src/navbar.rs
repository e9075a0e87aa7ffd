use dioxus::prelude::*;

use crate::activity_log_panel::ActivityLogToggle;

/// Top bar: navigation links passed as children, activity log toggle on the right.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        nav {
            class: "navbar",
            div { class: "navbar-links", {children} }
            ActivityLogToggle {}
        }
    }
}
