//! Login / registration form.
//!
//! Fetches the welcome message and the caller's IP on mount. Both are
//! decoration: a failure is logged and the form works without them.

use api::models::{IpInfo, DEFAULT_WELCOME};
use api::{Backend, Endpoint};
use dioxus::prelude::*;
use state::{submit, CredentialForm, SubmitOutcome};

use crate::activity_log::{log_activity, log_call, use_activity_log, LogLevel};
use crate::auth::use_session;
use crate::backend::use_backend;
use crate::error_modal::ErrorModal;
use crate::field_input::FieldInput;

#[component]
pub fn CredentialFormView() -> Element {
    let backend = use_backend();
    let mut session = use_session();
    let mut log = use_activity_log();
    let mut form = use_signal(CredentialForm::new);

    let welcome = use_resource({
        let backend = backend.clone();
        move || {
            let backend = backend.clone();
            async move {
                let result = backend.welcome().await;
                log_call(&mut log, &Endpoint::Welcome, &result, true);
                match result {
                    Ok(welcome) => Some(welcome.text().to_string()),
                    Err(e) => {
                        tracing::warn!(error = %e, "welcome message unavailable");
                        None
                    }
                }
            }
        }
    });

    let ip = use_resource({
        let backend = backend.clone();
        move || {
            let backend = backend.clone();
            async move {
                let result = backend.client_ip().await;
                log_call(&mut log, &Endpoint::Ip, &result, true);
                match result {
                    Ok(info) => Some(info),
                    Err(e) => {
                        tracing::warn!(error = %e, "client IP unavailable");
                        None
                    }
                }
            }
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(submission) = form.write().begin_submit() else {
            return;
        };
        let backend = backend.clone();
        spawn(async move {
            let endpoint = submission.endpoint();
            let outcome = submit(&backend, submission).await;
            match &outcome {
                SubmitOutcome::Failed(err) => log_activity(
                    &mut log,
                    LogLevel::Error,
                    &format!("{endpoint}: {}", err.message),
                ),
                _ => log_activity(&mut log, LogLevel::Success, &format!("{endpoint}")),
            }
            form.write().finish_submit(&outcome);
            session.write().on_submit(&outcome);
        });
    };

    let snapshot = form.read().clone();
    let mode = snapshot.mode();
    let can_submit = snapshot.is_valid() && !snapshot.is_submitting();
    let welcome_text = welcome
        .cloned()
        .flatten()
        .unwrap_or_else(|| DEFAULT_WELCOME.to_string());
    let ip_info = ip.cloned().flatten();

    rsx! {
        div {
            class: "credential-page",
            p { class: "welcome", "{welcome_text}" }

            form {
                class: "card credential-form",
                onsubmit: handle_submit,
                h1 { "{mode.title()}" }

                for field in mode.fields().iter().copied() {
                    FieldInput {
                        key: "{field.name()}",
                        id: field.name().to_string(),
                        label: field.label().to_string(),
                        input_type: field.input_type().to_string(),
                        value: snapshot.value(field).to_string(),
                        error: snapshot.error(field).cloned(),
                        oninput: move |value: String| form.write().set_field(field, &value),
                    }
                }

                if let Some(message) = snapshot.notice() {
                    p { class: "notice success", "{message}" }
                }

                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: !can_submit,
                    if snapshot.is_submitting() { "..." } else { "{mode.submit_label()}" }
                }

                button {
                    class: "link",
                    r#type: "button",
                    onclick: move |_| form.write().toggle_mode(),
                    "{mode.switch_label()}"
                }
            }

            if let Some(info) = ip_info.filter(IpInfo::has_content) {
                div {
                    class: "ip-info",
                    if let Some(address) = info.address() {
                        p { "Dirección IP: {address}" }
                    }
                    if let Some(details) = info.details() {
                        pre { "{details}" }
                    }
                }
            }

            ErrorModal {
                error: snapshot.server_error().cloned(),
                on_close: move |_| form.write().dismiss_error(),
            }
        }
    }
}
