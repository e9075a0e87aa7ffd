use dioxus::prelude::*;

use views::{Home, Practice, Shell};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/practice")]
        Practice {},
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| Signal::new(ui::ActivityLog::default()));

    rsx! {
        document::Link { rel: "stylesheet", href: ui::UI_CSS }
        ui::BackendProvider {
            ui::SessionProvider {
                Router::<Route> {}
            }
        }
    }
}
