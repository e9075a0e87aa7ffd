use dioxus::prelude::*;
use ui::{ActivityLogPanel, Navbar};

use crate::Route;

/// Navigation bar and activity log around every page.
#[component]
pub fn Shell() -> Element {
    rsx! {
        Navbar {
            Link { to: Route::Home {}, "Usuarios" }
            Link { to: Route::Practice {}, "Práctica DOM" }
        }
        main {
            Outlet::<Route> {}
        }
        ActivityLogPanel {}
    }
}
