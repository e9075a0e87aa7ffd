//! Session context and hooks for the UI.

use dioxus::prelude::*;
use state::Session;

use crate::activity_log::{log_activity, use_activity_log, LogLevel};

/// Get the current session.
/// Returns a signal that updates when the user logs in or out.
pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

/// Provider component that owns the session.
/// Wrap your app with this component before rendering any screen that reads it.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let session = use_signal(Session::default);
    use_context_provider(|| session);

    rsx! {
        {children}
    }
}

/// Leaves the roster and returns to the credential form. Ends the session.
#[component]
pub fn BackToStartButton(
    #[props(default = "← Volver al Inicio".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut session = use_session();
    let mut log = use_activity_log();

    let onclick = move |_| {
        session.write().logout();
        log_activity(&mut log, LogLevel::Info, "Session closed");
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
